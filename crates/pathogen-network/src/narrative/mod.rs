//! Read-only presentation of inference results: a text narrative and a
//! render view for external diagram collaborators.

pub mod builder;
pub mod render_view;

pub use builder::{NarrativeSection, PathogenesisNarrative};
pub use render_view::{atom_id, symptom_id, LinkKind, NodeKind, RenderLink, RenderNode, RenderView};

use pathogen_core::knowledge::KnowledgeBase;

use crate::engine::InferenceOutcome;

/// Generates narratives from inference outcomes.
pub struct NarrativeGenerator;

impl NarrativeGenerator {
    pub fn generate(kb: &KnowledgeBase, outcome: &InferenceOutcome) -> PathogenesisNarrative {
        builder::build_narrative(kb, outcome)
    }
}
