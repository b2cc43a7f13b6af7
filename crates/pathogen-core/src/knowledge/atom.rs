use serde::{Deserialize, Serialize};

/// An opaque pathogen-atom identifier.
///
/// Atoms are ordinals into a [`KnowledgeBase`](super::KnowledgeBase) universe.
/// Their total order is the order in which the knowledge base defined them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Atom(u16);

impl Atom {
    pub(crate) const fn new(ordinal: u16) -> Self {
        Self(ordinal)
    }

    /// Position of this atom in its knowledge base's universe.
    pub fn ordinal(self) -> usize {
        usize::from(self.0)
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "atom#{}", self.0)
    }
}

/// Name and optional human-readable label of an atom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}
