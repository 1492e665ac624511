//! Error types for llm-tour.

use thiserror::Error;

/// Result type alias for llm-tour operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for llm-tour.
#[derive(Error, Debug)]
pub enum Error {
    /// Navigation target outside the stage catalog.
    #[error("stage {index} out of range (catalog has {count} stages)")]
    InvalidStage { index: usize, count: usize },

    /// Demo scenario failed validation.
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
