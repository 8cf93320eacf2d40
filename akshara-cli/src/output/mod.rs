//! Output formatting module

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// JSON envelopes and records
    Json,
}

/// Result of one operation
///
/// Serializes as `{response_code, message, string, language, data}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    /// 200 on success, 400 for bad operands, 404 for unknown operations
    pub response_code: u16,
    /// Human-readable outcome
    pub message: String,
    /// The input text echoed back
    pub string: Option<String>,
    /// The requested language echoed back
    pub language: Option<String>,
    /// Operation result
    pub data: Value,
}

impl Envelope {
    /// Successful result
    pub fn ok(message: impl Into<String>, string: &str, language: &str, data: Value) -> Self {
        Self {
            response_code: 200,
            message: message.into(),
            string: Some(string.to_string()),
            language: Some(language.to_string()),
            data,
        }
    }

    /// Failed request with no echo
    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            response_code: code,
            message: message.into(),
            string: None,
            language: None,
            data: Value::Null,
        }
    }

    /// True for a 200 response
    pub fn is_success(&self) -> bool {
        self.response_code == 200
    }
}

/// Logical characters of one input line
#[derive(Debug, Clone, Serialize)]
pub struct SegmentedLine {
    /// Source file
    pub file: String,
    /// 1-based line number
    pub line: usize,
    /// Logical characters in order
    pub logical_chars: Vec<String>,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output an operation result
    fn format_envelope(&mut self, envelope: &Envelope) -> Result<()>;

    /// Format and output one segmented line
    fn format_line(&mut self, line: &SegmentedLine) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}
