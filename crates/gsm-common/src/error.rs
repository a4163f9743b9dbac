//! Error types for GSM

use thiserror::Error;

/// Result type alias for GSM operations
pub type Result<T> = std::result::Result<T, GsmError>;

/// Main error type for GSM
#[derive(Error, Debug)]
pub enum GsmError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
