//! Error types for Raymarch

use thiserror::Error;

/// Result type alias using Raymarch's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or validating scenes and configuration.
///
/// The numerical core never produces these; distance and normal queries
/// return plain floats and propagate NaN on degenerate input.
#[derive(Error, Debug)]
pub enum Error {
    /// Shape parameter out of contract (negative radius, non-finite value)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Tuning constant out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
