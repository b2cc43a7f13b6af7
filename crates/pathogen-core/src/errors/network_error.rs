/// Network generation and screening errors.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Every vertex had an incoming edge but no cycle was found.
    /// In-degree accounting and cycle search disagree, which is a defect.
    #[error("internal consistency error: no cycle among {vertices} source-free vertices")]
    MissingCycle { vertices: usize },

    #[error("candidate limit exceeded: request needs {required} candidates, limit is {limit}")]
    CandidateLimitExceeded { required: usize, limit: usize },
}
