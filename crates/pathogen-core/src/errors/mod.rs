//! Error handling for the pathogen workspace.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod knowledge_error;
pub mod network_error;
pub mod pathogen_error;

pub use config_error::ConfigError;
pub use knowledge_error::KnowledgeError;
pub use network_error::NetworkError;
pub use pathogen_error::{PathogenError, PathogenResult};
