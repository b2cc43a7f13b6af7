//! # pathogen-network
//!
//! Infers pathogenesis networks from symptoms: enumerates candidate networks
//! over a [`KnowledgeBase`](pathogen_core::KnowledgeBase), screens them for a
//! root vertex that reaches every other vertex, and selects a final network.

pub mod engine;
pub mod generation;
pub mod graph;
pub mod narrative;
pub mod selection;
pub mod validation;

pub use engine::{InferenceOutcome, PathogenesisEngine};
pub use generation::{CandidateIter, NetworkGenerator, ResolvedRequest};
pub use narrative::{NarrativeGenerator, PathogenesisNarrative, RenderView};
pub use selection::NetworkSelector;
pub use validation::{NetworkValidator, RejectReason, RejectionTally, Screening, Verdict};
