//! Immutable domain data: the atom universe, the symptom→atom mapping,
//! and the atom→atom causal adjacency.
//!
//! A [`KnowledgeBase`] is built once and shared by reference. Several may
//! coexist (fixtures, production data) since nothing here is global.

mod atom;
pub mod builder;
pub mod definition;
pub mod matrix;

use std::collections::{BTreeMap, BTreeSet, HashMap};

pub use atom::{Atom, AtomInfo};
pub use builder::KnowledgeBaseBuilder;
pub use definition::{AtomDefinition, KnowledgeBaseDefinition, LinkDefinition, SymptomDefinition};

use crate::models::CausalEdge;

/// The knowledge base consulted by every inference run.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    atoms: Vec<AtomInfo>,
    by_name: HashMap<String, Atom>,
    symptoms: BTreeMap<String, BTreeSet<Atom>>,
    adjacency: BTreeMap<Atom, BTreeSet<Atom>>,
}

impl KnowledgeBase {
    /// Start building a knowledge base.
    pub fn builder() -> KnowledgeBaseBuilder {
        KnowledgeBaseBuilder::new()
    }

    /// Number of atoms in the universe.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// All atoms in universe order.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        (0..self.atoms.len()).map(|i| Atom::new(i as u16))
    }

    /// Look up an atom by name.
    pub fn atom(&self, name: &str) -> Option<Atom> {
        self.by_name.get(name).copied()
    }

    /// Name and label of an atom, if it belongs to this universe.
    pub fn info(&self, atom: Atom) -> Option<&AtomInfo> {
        self.atoms.get(atom.ordinal())
    }

    /// Short name of an atom (e.g. `Pa1`). Empty for atoms from another universe.
    pub fn name(&self, atom: Atom) -> &str {
        self.info(atom).map(|i| i.name.as_str()).unwrap_or_default()
    }

    /// Human-readable label when defined, otherwise the name.
    pub fn display_name(&self, atom: Atom) -> &str {
        match self.info(atom) {
            Some(AtomInfo {
                label: Some(label), ..
            }) => label.as_str(),
            Some(info) => info.name.as_str(),
            None => "",
        }
    }

    /// Atom set implicated by a symptom; `None` when the symptom is unmapped.
    pub fn atoms_for(&self, symptom: &str) -> Option<&BTreeSet<Atom>> {
        self.symptoms.get(symptom)
    }

    /// Whether the symptom is part of this knowledge base.
    pub fn has_symptom(&self, symptom: &str) -> bool {
        self.symptoms.contains_key(symptom)
    }

    /// Symptom identifiers in lexical order.
    pub fn symptoms(&self) -> impl Iterator<Item = &str> + '_ {
        self.symptoms.keys().map(String::as_str)
    }

    /// Atoms directly caused by `atom`, ascending.
    pub fn successors(&self, atom: Atom) -> impl Iterator<Item = Atom> + '_ {
        self.adjacency.get(&atom).into_iter().flatten().copied()
    }

    /// Whether `source` causally produces `target`.
    pub fn causes(&self, source: Atom, target: Atom) -> bool {
        self.adjacency
            .get(&source)
            .is_some_and(|targets| targets.contains(&target))
    }

    /// Every causal link in (source, target) order.
    pub fn links(&self) -> impl Iterator<Item = CausalEdge> + '_ {
        self.adjacency.iter().flat_map(|(&source, targets)| {
            targets.iter().map(move |&target| CausalEdge { source, target })
        })
    }

    /// Restriction of the adjacency to `vertices`, in (source, target) order.
    pub fn restrict_links(&self, vertices: &BTreeSet<Atom>) -> Vec<CausalEdge> {
        let mut edges = Vec::new();
        for &source in vertices {
            for target in self.successors(source) {
                if vertices.contains(&target) {
                    edges.push(CausalEdge { source, target });
                }
            }
        }
        edges
    }
}
