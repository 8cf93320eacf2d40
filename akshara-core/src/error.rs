//! Core error types
//!
//! Segmentation and analysis are total and never fail. Errors only arise
//! while loading or registering language profiles.

use thiserror::Error;

/// Errors raised while building language profiles
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Profile configuration failed validation
    #[error("invalid profile '{code}': {reason}")]
    InvalidProfile {
        /// Code of the offending profile (may be empty)
        code: String,
        /// What failed validation
        reason: String,
    },

    /// A code point literal could not be parsed
    #[error("invalid code point literal '{literal}'")]
    InvalidCodePoint {
        /// The literal as written in the configuration
        literal: String,
    },

    /// Profile configuration could not be parsed
    #[error("failed to parse profile configuration: {0}")]
    Parse(String),

    /// Profile configuration file could not be read
    #[error("failed to read profile configuration {path}: {reason}")]
    Io {
        /// Path that was being read
        path: String,
        /// Underlying I/O failure
        reason: String,
    },

    /// A language name is not registered
    #[error("language '{0}' is not registered")]
    UnknownLanguage(String),
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::Parse(err.to_string())
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
