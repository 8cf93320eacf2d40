//! CLI error types

use std::fmt;

/// Failures specific to the command line front end
#[derive(Debug)]
pub enum CliError {
    /// No input matched
    FileNotFound(String),
    /// Glob pattern could not be parsed
    InvalidPattern(String),
    /// `akshara.toml` could not be used
    ConfigError(String),
    /// An operation answered with a non-success response code
    RequestFailed {
        /// Response code of the envelope
        code: u16,
        /// Response message
        message: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::RequestFailed { code, message } => {
                write!(f, "Request failed ({code}): {message}")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let cases = [
            (
                CliError::FileNotFound("పాఠాలు/అమ్మ.txt".to_string()),
                "File not found: పాఠాలు/అమ్మ.txt",
            ),
            (
                CliError::InvalidPattern("corpus/[te".to_string()),
                "Invalid file pattern: corpus/[te",
            ),
            (
                CliError::ConfigError("unknown output format: yaml".to_string()),
                "Configuration error: unknown output format: yaml",
            ),
            (
                CliError::RequestFailed {
                    code: 404,
                    message: "Operation not found: fly".to_string(),
                },
                "Request failed (404): Operation not found: fly",
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_request_failure_survives_anyhow() {
        let failure: CliResult<()> = Err(CliError::RequestFailed {
            code: 400,
            message: "Missing required parameter: input2".to_string(),
        }
        .into());
        let err = failure.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::RequestFailed { code: 400, .. })
        ));
    }
}
