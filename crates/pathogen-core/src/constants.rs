/// Pathogen system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest atom universe a knowledge base may hold (atoms are `u16` ordinals).
pub const MAX_ATOMS: usize = u16::MAX as usize;

/// Environment variable consulted for tracing filters.
pub const LOG_ENV_VAR: &str = "PATHOGEN_LOG";

/// Environment overrides for inference settings.
pub const ENV_SELECTION_POLICY: &str = "PATHOGEN_SELECTION_POLICY";
pub const ENV_UNKNOWN_SYMPTOM_POLICY: &str = "PATHOGEN_UNKNOWN_SYMPTOM_POLICY";
pub const ENV_MAX_CANDIDATES: &str = "PATHOGEN_MAX_CANDIDATES";
