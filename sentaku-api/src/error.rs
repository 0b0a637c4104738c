//! API error types

use sentaku_engine::EngineError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Engine error
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
