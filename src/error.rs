use thiserror::Error;

pub type Result<T> = std::result::Result<T, TierListError>;

#[derive(Debug, Error)]
pub enum TierListError {
    #[error("Tier not found: {0}")]
    TierNotFound(String),

    #[error("Invalid tier ID: {0}")]
    InvalidTierId(String),

    #[error("Invalid item ID format: {0}")]
    InvalidItemId(String),

    #[error("Invalid tier color '{0}', expected #RRGGBB")]
    InvalidColor(String),

    #[error("Board invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to ingest {path}: {reason}")]
    IngestError { path: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
