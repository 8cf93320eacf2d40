//! API error types

use akshara_core::CoreError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Profile loading or validation failed
    #[error("profile error: {0}")]
    Profile(#[from] CoreError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
