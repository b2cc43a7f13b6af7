use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{SelectionPolicy, UnknownSymptomPolicy};

/// Inference pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Policy for choosing the final network among valid ones.
    pub selection_policy: SelectionPolicy,
    /// Policy for symptoms missing from the knowledge base.
    pub unknown_symptom_policy: UnknownSymptomPolicy,
    /// Upper bound on generated candidates. `None` means unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_candidates: Option<usize>,
    /// Screen candidates on the rayon pool.
    pub parallel_validation: bool,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            selection_policy: defaults::DEFAULT_SELECTION_POLICY,
            unknown_symptom_policy: defaults::DEFAULT_UNKNOWN_SYMPTOM_POLICY,
            max_candidates: defaults::DEFAULT_MAX_CANDIDATES,
            parallel_validation: defaults::DEFAULT_PARALLEL_VALIDATION,
        }
    }
}

impl InferenceConfig {
    pub fn with_selection_policy(mut self, policy: SelectionPolicy) -> Self {
        self.selection_policy = policy;
        self
    }

    pub fn with_unknown_symptom_policy(mut self, policy: UnknownSymptomPolicy) -> Self {
        self.unknown_symptom_policy = policy;
        self
    }

    pub fn with_max_candidates(mut self, limit: usize) -> Self {
        self.max_candidates = Some(limit);
        self
    }

    pub fn with_parallel_validation(mut self, enabled: bool) -> Self {
        self.parallel_validation = enabled;
        self
    }
}
