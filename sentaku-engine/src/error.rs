//! Engine error types
//!
//! Errors cover configuration faults only. Gate rejections during
//! validation are ordinary data (`RejectReason`), not errors, and no
//! failure in this crate is fatal to the surrounding process.

use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Empty or malformed target language code
    #[error("invalid target language: {0:?}")]
    InvalidLanguage(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
