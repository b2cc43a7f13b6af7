//! Span definitions per pipeline stage: generation, screening, selection.
//!
//! Each span carries the stage's input size via the `tracing` crate.

/// Create a candidate generation span.
#[macro_export]
macro_rules! generation_span {
    ($symptom_count:expr) => {
        tracing::info_span!("pathogen.generation", symptom_count = $symptom_count)
    };
}

/// Create a screening span.
#[macro_export]
macro_rules! screening_span {
    ($candidate_count:expr, $parallel:expr) => {
        tracing::info_span!(
            "pathogen.screening",
            candidate_count = $candidate_count,
            parallel = $parallel
        )
    };
}

/// Create a selection span.
#[macro_export]
macro_rules! selection_span {
    ($policy:expr, $valid_count:expr) => {
        tracing::info_span!(
            "pathogen.selection",
            policy = %$policy,
            valid_count = $valid_count
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const GENERATION: &str = "pathogen.generation";
    pub const SCREENING: &str = "pathogen.screening";
    pub const SELECTION: &str = "pathogen.selection";
}
