//! # pathogen-core
//!
//! Foundation crate for pathogenesis network inference.
//! Defines the knowledge base, network models, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod knowledge;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::{InferenceConfig, PathogenConfig};
pub use errors::{PathogenError, PathogenResult};
pub use knowledge::{Atom, KnowledgeBase, KnowledgeBaseBuilder};
pub use models::{
    CandidateNetwork, CausalEdge, RootKind, Selection, SelectionPolicy, UnknownSymptomPolicy,
    ValidatedNetwork,
};
