//! PathogenesisEngine: owns the knowledge base and config, runs
//! generation → screening → selection, and renders results.

use std::sync::Arc;

use pathogen_core::config::InferenceConfig;
use pathogen_core::errors::PathogenResult;
use pathogen_core::knowledge::KnowledgeBase;
use pathogen_core::models::{CandidateNetwork, Selection, SelectionPolicy, ValidatedNetwork};
use pathogen_observability::generation_span;
use tracing::info;

use crate::generation::NetworkGenerator;
use crate::narrative::{NarrativeGenerator, PathogenesisNarrative, RenderView};
use crate::selection::NetworkSelector;
use crate::validation::{NetworkValidator, RejectionTally};

/// Everything one inference run produced.
#[derive(Debug, Clone)]
pub struct InferenceOutcome {
    /// Symptoms that took part in generation, after the unknown-symptom policy.
    pub symptoms: Vec<String>,
    /// Every candidate, in enumeration order.
    pub candidates: Vec<CandidateNetwork>,
    /// Candidates that passed screening, in enumeration order.
    pub valid: Vec<ValidatedNetwork>,
    /// Rejection counts per reason.
    pub rejected: RejectionTally,
    /// Policy used for the final selection.
    pub policy: SelectionPolicy,
    pub selection: Selection,
}

impl InferenceOutcome {
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn valid_count(&self) -> usize {
        self.valid.len()
    }

    pub fn selected(&self) -> Option<&ValidatedNetwork> {
        self.selection.network()
    }
}

/// The pathogenesis inference engine.
pub struct PathogenesisEngine {
    kb: Arc<KnowledgeBase>,
    config: InferenceConfig,
}

impl PathogenesisEngine {
    /// Engine with default inference settings.
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self::with_config(kb, InferenceConfig::default())
    }

    pub fn with_config(kb: Arc<KnowledgeBase>, config: InferenceConfig) -> Self {
        Self { kb, config }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Run the full pipeline with the configured selection policy.
    pub fn infer<S: AsRef<str>>(&self, symptoms: &[S]) -> PathogenResult<InferenceOutcome> {
        self.infer_with_policy(symptoms, self.config.selection_policy)
    }

    /// Run the full pipeline with an explicit selection policy.
    pub fn infer_with_policy<S: AsRef<str>>(
        &self,
        symptoms: &[S],
        policy: SelectionPolicy,
    ) -> PathogenResult<InferenceOutcome> {
        let generator = NetworkGenerator::with_config(&self.kb, &self.config);
        let (request, candidates) = {
            let _span = generation_span!(symptoms.len()).entered();
            let request = generator.resolve(symptoms)?;
            let candidates = generator.generate_resolved(&request)?;
            info!(
                symptoms = request.symptoms.len(),
                candidates = candidates.len(),
                "Stage 1: candidate networks generated"
            );
            (request, candidates)
        };

        let screening = NetworkValidator::new()
            .parallel(self.config.parallel_validation)
            .screen(&candidates)?;
        info!(valid = screening.valid.len(), "Stage 2: valid networks screened");

        let selection = NetworkSelector::new(policy).select(&screening.valid);

        Ok(InferenceOutcome {
            symptoms: request.symptoms,
            candidates,
            valid: screening.valid,
            rejected: screening.rejected,
            policy,
            selection,
        })
    }

    /// Narrative of an outcome produced by this engine.
    pub fn narrative(&self, outcome: &InferenceOutcome) -> PathogenesisNarrative {
        NarrativeGenerator::generate(&self.kb, outcome)
    }

    /// Render view of the selected network, if any.
    pub fn render_view(&self, outcome: &InferenceOutcome) -> Option<RenderView> {
        outcome
            .selected()
            .map(|network| RenderView::build(&self.kb, network, &outcome.symptoms))
    }
}
