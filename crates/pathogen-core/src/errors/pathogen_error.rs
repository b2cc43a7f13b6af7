use super::{ConfigError, KnowledgeError, NetworkError};

/// Top-level error for pathogenesis inference.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PathogenError {
    #[error("unknown symptom: {symptom}")]
    UnknownSymptom { symptom: String },

    #[error("knowledge base error: {0}")]
    Knowledge(#[from] KnowledgeError),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PathogenError {
    /// True when the error signals a defect rather than a bad request.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Network(NetworkError::MissingCycle { .. }))
    }
}

/// Convenience alias used across the workspace.
pub type PathogenResult<T> = Result<T, PathogenError>;
