//! Configuration module
//!
//! Optional `akshara.toml` supplying defaults for flags left unset on the
//! command line.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Default language for processing
    pub default_language: String,

    /// Seed for randomized operations
    pub seed: Option<u64>,

    /// Number of worker threads for segmenting files (0 = auto)
    pub worker_threads: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            default_language: akshara_core::DEFAULT_LANGUAGE.to_string(),
            seed: None,
            worker_threads: 0,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Separator placed between logical characters in text output
    pub delimiter: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            delimiter: " ".to_string(),
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        config.default_format()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// The configured default output format
    pub fn default_format(&self) -> Result<OutputFormat> {
        match self.output.default_format.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::ConfigError(format!("unknown output format: {other}")).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.processing.default_language, "telugu");
        assert_eq!(config.output.delimiter, " ");
        assert!(matches!(config.default_format().unwrap(), OutputFormat::Text));
    }

    #[test]
    fn test_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[processing]
default_language = "english"
seed = 7

[output]
default_format = "json"
"#
        )
        .unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.processing.default_language, "english");
        assert_eq!(config.processing.seed, Some(7));
        assert!(config.output.pretty_json);
        assert!(matches!(config.default_format().unwrap(), OutputFormat::Json));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[output]\ndefault_format = \"yaml\"\n").unwrap();
        let err = CliConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("unknown output format"));
    }

    #[test]
    fn test_missing_file() {
        assert!(CliConfig::load(Some(Path::new("/nonexistent/akshara.toml"))).is_err());
        assert!(CliConfig::load(None).is_ok());
    }
}
