//! Network models shared by generation, screening, and selection.

pub mod candidate;
pub mod edge;
pub mod policy;
pub mod selection;
pub mod validated;

pub use candidate::CandidateNetwork;
pub use edge::CausalEdge;
pub use policy::{SelectionPolicy, UnknownSymptomPolicy};
pub use selection::Selection;
pub use validated::{RootKind, ValidatedNetwork};
