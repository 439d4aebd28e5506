//! Error types for the advisory orchestrator

use thiserror::Error;

/// Result type alias for advisory operations
pub type Result<T> = std::result::Result<T, AdvisoryError>;

#[derive(Error, Debug)]
pub enum AdvisoryError {

    // =============================
    // Advisory Pipeline Errors
    // =============================

    #[error("Generation error: {0}")]
    GenerationError(String),

    #[error("Generation credential missing or placeholder")]
    MissingCredential,

    #[error("Input stream closed before a valid value was supplied")]
    InputClosed,

    // =============================
    // External Library Conversions
    // =============================

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
