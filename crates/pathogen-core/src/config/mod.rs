//! Configuration for pathogenesis inference.
//! TOML-based, with environment overrides and compiled defaults.

pub mod defaults;
pub mod inference_config;
pub mod observability_config;
pub mod pathogen_config;

pub use inference_config::InferenceConfig;
pub use observability_config::ObservabilityConfig;
pub use pathogen_config::PathogenConfig;
