//! Errors surfaced by generation.

use thiserror::Error;

/// Errors that can occur while configuring or running a generator
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid syllable table: {0}")]
    InvalidTable(String),

    #[error("invalid generator config: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}
