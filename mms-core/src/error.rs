use thiserror::Error;

/// Main error type for MMS inspection operations
#[derive(Error, Debug)]
pub enum MmsError {
    #[error("Connection error: {0}")]
    Connection(#[from] std::io::Error),

    #[error("Timeout")]
    Timeout,

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for MMS inspection operations
pub type MmsResult<T> = Result<T, MmsError>;
