// Single source of truth for all default values.

use crate::models::{SelectionPolicy, UnknownSymptomPolicy};

// --- Inference ---
pub const DEFAULT_SELECTION_POLICY: SelectionPolicy = SelectionPolicy::FewestVertices;
pub const DEFAULT_UNKNOWN_SYMPTOM_POLICY: UnknownSymptomPolicy =
    UnknownSymptomPolicy::RejectRequest;
pub const DEFAULT_MAX_CANDIDATES: Option<usize> = None;
pub const DEFAULT_PARALLEL_VALIDATION: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
