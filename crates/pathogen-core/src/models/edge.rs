use serde::{Deserialize, Serialize};

use crate::knowledge::Atom;

/// A directed causal edge: `source` produces `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CausalEdge {
    pub source: Atom,
    pub target: Atom,
}
