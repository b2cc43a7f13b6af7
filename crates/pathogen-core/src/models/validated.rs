use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::knowledge::Atom;

use super::{CandidateNetwork, CausalEdge};

/// How the root of a valid network was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootKind {
    /// The network's only zero-in-degree vertex.
    SoleSource,
    /// A vertex on a cycle, in a network with no zero-in-degree vertex.
    CycleMember,
}

/// A candidate that passed screening (an "h-PN"), decorated with its root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedNetwork {
    network: CandidateNetwork,
    root: Atom,
    root_kind: RootKind,
}

impl ValidatedNetwork {
    pub fn new(network: CandidateNetwork, root: Atom, root_kind: RootKind) -> Self {
        Self {
            network,
            root,
            root_kind,
        }
    }

    /// The root vertex (Rv) that reaches every other vertex.
    pub fn root(&self) -> Atom {
        self.root
    }

    pub fn root_kind(&self) -> RootKind {
        self.root_kind
    }

    pub fn network(&self) -> &CandidateNetwork {
        &self.network
    }

    pub fn into_network(self) -> CandidateNetwork {
        self.network
    }

    pub fn index(&self) -> usize {
        self.network.index()
    }

    pub fn vertices(&self) -> &BTreeSet<Atom> {
        self.network.vertices()
    }

    pub fn edges(&self) -> &[CausalEdge] {
        self.network.edges()
    }
}
