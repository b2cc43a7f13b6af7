//! Candidate generation: one network per Cartesian assignment of symptoms to atoms.
//!
//! The number of candidates is the product of the per-symptom atom-set sizes,
//! so it grows exponentially with the symptom count. `max_candidates` guards
//! against that before anything is allocated.

pub mod cartesian;

use pathogen_core::config::InferenceConfig;
use pathogen_core::errors::{NetworkError, PathogenError, PathogenResult};
use pathogen_core::knowledge::{Atom, KnowledgeBase};
use pathogen_core::models::{CandidateNetwork, UnknownSymptomPolicy};
use tracing::debug;

pub use cartesian::CandidateIter;

/// A symptom request resolved against a knowledge base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    /// Symptoms that take part in the product, in request order.
    pub symptoms: Vec<String>,
    /// Atom choices per symptom, ascending. Parallel to `symptoms`.
    pub factors: Vec<Vec<Atom>>,
}

impl ResolvedRequest {
    /// Number of candidates the request enumerates, `None` on overflow.
    pub fn candidate_count(&self) -> Option<usize> {
        if self.factors.is_empty() || self.factors.iter().any(Vec::is_empty) {
            return Some(0);
        }
        self.factors
            .iter()
            .try_fold(1usize, |acc, factor| acc.checked_mul(factor.len()))
    }
}

/// Generates candidate networks for symptom requests.
pub struct NetworkGenerator<'kb> {
    kb: &'kb KnowledgeBase,
    unknown_symptom_policy: UnknownSymptomPolicy,
    max_candidates: Option<usize>,
}

impl<'kb> NetworkGenerator<'kb> {
    /// Generator with default policies: unknown symptoms reject the request, no cap.
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        Self::with_config(kb, &InferenceConfig::default())
    }

    pub fn with_config(kb: &'kb KnowledgeBase, config: &InferenceConfig) -> Self {
        Self {
            kb,
            unknown_symptom_policy: config.unknown_symptom_policy,
            max_candidates: config.max_candidates,
        }
    }

    pub fn with_unknown_symptom_policy(mut self, policy: UnknownSymptomPolicy) -> Self {
        self.unknown_symptom_policy = policy;
        self
    }

    pub fn with_max_candidates(mut self, limit: Option<usize>) -> Self {
        self.max_candidates = limit;
        self
    }

    /// Look up every symptom, applying the unknown-symptom policy.
    pub fn resolve<S: AsRef<str>>(&self, symptoms: &[S]) -> PathogenResult<ResolvedRequest> {
        let mut request = ResolvedRequest {
            symptoms: Vec::with_capacity(symptoms.len()),
            factors: Vec::with_capacity(symptoms.len()),
        };

        for symptom in symptoms {
            let symptom = symptom.as_ref();
            let factor = match self.kb.atoms_for(symptom) {
                Some(atoms) => atoms.iter().copied().collect(),
                None => match self.unknown_symptom_policy {
                    UnknownSymptomPolicy::RejectRequest => {
                        return Err(PathogenError::UnknownSymptom {
                            symptom: symptom.to_string(),
                        });
                    }
                    UnknownSymptomPolicy::EmptyContribution => {
                        debug!(symptom, "unknown symptom contributes no atoms");
                        Vec::new()
                    }
                    UnknownSymptomPolicy::SkipSymptom => {
                        debug!(symptom, "skipping unknown symptom");
                        continue;
                    }
                },
            };
            request.symptoms.push(symptom.to_string());
            request.factors.push(factor);
        }

        Ok(request)
    }

    /// Enforce the candidate cap for a resolved request.
    pub fn check_limit(&self, request: &ResolvedRequest) -> Result<usize, NetworkError> {
        let required = request.candidate_count().unwrap_or(usize::MAX);
        match self.max_candidates {
            Some(limit) if required > limit => {
                Err(NetworkError::CandidateLimitExceeded { required, limit })
            }
            _ => Ok(required),
        }
    }

    /// Lazily enumerate the candidates of a resolved request.
    pub fn iter<'r>(&self, request: &'r ResolvedRequest) -> CandidateIter<'r>
    where
        'kb: 'r,
    {
        CandidateIter::new(self.kb, &request.factors)
    }

    /// Resolve `symptoms` and materialize every candidate in enumeration order.
    pub fn generate<S: AsRef<str>>(&self, symptoms: &[S]) -> PathogenResult<Vec<CandidateNetwork>> {
        let request = self.resolve(symptoms)?;
        self.generate_resolved(&request)
    }

    /// Materialize every candidate of an already resolved request.
    pub fn generate_resolved(
        &self,
        request: &ResolvedRequest,
    ) -> PathogenResult<Vec<CandidateNetwork>> {
        self.check_limit(request)?;
        let candidates: Vec<CandidateNetwork> = self.iter(request).collect();
        debug!(
            symptoms = request.symptoms.len(),
            candidates = candidates.len(),
            "generated candidate networks"
        );
        Ok(candidates)
    }
}
