//! Error types for suitor-agent.

use suitor_core::SuitorError;
use thiserror::Error;

/// Errors that can occur while constructing or configuring an agent.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Agent tunables are inconsistent.
    #[error("invalid agent config: {0}")]
    InvalidConfig(String),

    /// Config could not be parsed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Game-level error.
    #[error(transparent)]
    Suitor(#[from] SuitorError),
}
