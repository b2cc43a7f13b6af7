//! Root-vertex screening of candidate networks.
//!
//! With N the number of zero-in-degree vertices of a candidate:
//! - N ≥ 2: rejected, there is no single causal origin.
//! - N = 1: the source is the root if it reaches every vertex.
//! - N = 0: every vertex has an incoming edge, so a cycle exists. A cycle is
//!   searched in the component no other component reaches; its first vertex
//!   is the root if it reaches every vertex.
//!
//! Each candidate is judged on its own. Rejections are local verdicts; only a
//! missing cycle in the N = 0 branch is an error.

use pathogen_core::errors::NetworkError;
use pathogen_core::knowledge::Atom;
use pathogen_core::models::{CandidateNetwork, RootKind, ValidatedNetwork};
use pathogen_observability::screening_span;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::graph::{self, cycle, in_degree, reachability};

/// Why a candidate failed screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectReason {
    /// The candidate has no vertices.
    EmptyNetwork,
    /// More than one vertex has no incoming edge.
    MultipleSources { count: usize },
    /// The root candidate does not reach every vertex.
    Unreachable { root: Atom, unreached: usize },
}

/// Screening verdict for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted(ValidatedNetwork),
    Rejected(RejectReason),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn into_validated(self) -> Option<ValidatedNetwork> {
        match self {
            Self::Accepted(network) => Some(network),
            Self::Rejected(_) => None,
        }
    }
}

/// Rejection counts per reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionTally {
    pub empty: usize,
    pub multiple_sources: usize,
    pub unreachable: usize,
}

impl RejectionTally {
    pub fn record(&mut self, reason: &RejectReason) {
        match reason {
            RejectReason::EmptyNetwork => self.empty += 1,
            RejectReason::MultipleSources { .. } => self.multiple_sources += 1,
            RejectReason::Unreachable { .. } => self.unreachable += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.empty + self.multiple_sources + self.unreachable
    }
}

/// Valid networks in enumeration order, plus what was rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screening {
    pub valid: Vec<ValidatedNetwork>,
    pub rejected: RejectionTally,
}

/// Classifies candidates as valid or not and finds their root.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkValidator {
    parallel: bool,
}

impl NetworkValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen on the rayon pool. Output order is unchanged.
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Judge a single candidate.
    pub fn validate(&self, candidate: &CandidateNetwork) -> Result<Verdict, NetworkError> {
        validate(candidate)
    }

    /// Judge every candidate, keeping the valid ones in enumeration order.
    pub fn screen(&self, candidates: &[CandidateNetwork]) -> Result<Screening, NetworkError> {
        let _span = screening_span!(candidates.len(), self.parallel).entered();

        let verdicts: Vec<Verdict> = if self.parallel {
            candidates.par_iter().map(validate).collect::<Result<_, _>>()?
        } else {
            candidates.iter().map(validate).collect::<Result<_, _>>()?
        };

        let mut screening = Screening::default();
        for (candidate, verdict) in candidates.iter().zip(verdicts) {
            match verdict {
                Verdict::Accepted(network) => screening.valid.push(network),
                Verdict::Rejected(reason) => {
                    trace!(index = candidate.index(), ?reason, "candidate rejected");
                    screening.rejected.record(&reason);
                }
            }
        }

        info!(
            candidates = candidates.len(),
            valid = screening.valid.len(),
            rejected = screening.rejected.total(),
            "screening complete"
        );
        Ok(screening)
    }
}

/// Judge a single candidate.
pub fn validate(candidate: &CandidateNetwork) -> Result<Verdict, NetworkError> {
    if candidate.is_empty() {
        return Ok(Verdict::Rejected(RejectReason::EmptyNetwork));
    }

    let degrees = in_degree::in_degrees(candidate);
    let sources = in_degree::sources(&degrees);
    let graph = graph::build(candidate);

    let (root, root_kind) = match sources.as_slice() {
        [root] => (*root, RootKind::SoleSource),
        [] => {
            let root = cycle::find_source_cycle(&graph)
                .and_then(|cycle| cycle.first().copied())
                .ok_or(NetworkError::MissingCycle {
                    vertices: candidate.vertex_count(),
                })?;
            (root, RootKind::CycleMember)
        }
        many => {
            return Ok(Verdict::Rejected(RejectReason::MultipleSources {
                count: many.len(),
            }));
        }
    };

    let reached = reachability::closure(&graph, root);
    if reached.len() == candidate.vertex_count() {
        debug!(index = candidate.index(), ?root, ?root_kind, "candidate accepted");
        Ok(Verdict::Accepted(ValidatedNetwork::new(
            candidate.clone(),
            root,
            root_kind,
        )))
    } else {
        Ok(Verdict::Rejected(RejectReason::Unreachable {
            root,
            unreached: candidate.vertex_count() - reached.len(),
        }))
    }
}
