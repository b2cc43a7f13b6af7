use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::knowledge::{Atom, KnowledgeBase};

use super::CausalEdge;

/// One hypothesized causal network (a "PN").
///
/// Built from one Cartesian assignment of symptoms to atoms. The vertex set
/// has set semantics; the edges are exactly the knowledge base adjacency
/// restricted to it, so every endpoint is a vertex and there are no self-loops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateNetwork {
    index: usize,
    vertices: BTreeSet<Atom>,
    edges: Vec<CausalEdge>,
}

impl CandidateNetwork {
    /// Build the candidate induced by `vertices` at enumeration position `index`.
    pub fn induced(index: usize, vertices: BTreeSet<Atom>, kb: &KnowledgeBase) -> Self {
        let edges = kb.restrict_links(&vertices);
        Self {
            index,
            vertices,
            edges,
        }
    }

    /// Position in the Cartesian enumeration. Used for tie-breaking.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn vertices(&self) -> &BTreeSet<Atom> {
        &self.vertices
    }

    pub fn edges(&self) -> &[CausalEdge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, atom: Atom) -> bool {
        self.vertices.contains(&atom)
    }

    /// Same vertex and edge sets, ignoring the enumeration index.
    pub fn same_structure(&self, other: &CandidateNetwork) -> bool {
        self.vertices == other.vertices && self.edges == other.edges
    }
}
