//! Run command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::io;
use std::path::PathBuf;

use akshara_api::{Config, WordProcessor};

use crate::{
    config::CliConfig,
    error::CliError,
    operation::{self, Operands},
    output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter},
};

/// Arguments for the run command
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Operation name (see `akshara list operations`)
    #[arg(value_name = "OPERATION")]
    pub operation: String,

    /// Text to bind
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub string: String,

    /// Language name (unknown names fall back to Telugu)
    #[arg(short, long, value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Language profile file to use instead of a built-in language
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Second operand; comma-separated for list operations
    #[arg(long, value_name = "TEXT")]
    pub input2: Option<String>,

    /// Third operand
    #[arg(long, value_name = "TEXT")]
    pub input3: Option<String>,

    /// Count for random and filler operations, columns for split
    #[arg(long, value_name = "N")]
    pub count: Option<usize>,

    /// Filler kind: consonant or vowel
    #[arg(long, value_name = "KIND")]
    pub kind: Option<String>,

    /// Seed for reproducible randomized operations
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl RunArgs {
    /// Execute the run command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, false);
        log::debug!("Arguments: {:?}", self);

        let cli_config = CliConfig::load(self.config.as_deref())?;
        let processor = self.build_processor(&cli_config)?;

        let operands = Operands {
            input2: self.input2.clone(),
            input3: self.input3.clone(),
            count: self.count,
            kind: self.kind.clone(),
        };
        let envelope = operation::respond(&self.operation, &self.string, &processor, &operands);

        let format = match self.format {
            Some(format) => format,
            None => cli_config.default_format()?,
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::stdout(&cli_config.output.delimiter)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(io::stdout(), cli_config.output.pretty_json))
            }
        };
        formatter.format_envelope(&envelope)?;
        formatter.finish()?;

        if !envelope.is_success() {
            return Err(CliError::RequestFailed {
                code: envelope.response_code,
                message: envelope.message,
            }
            .into());
        }

        Ok(())
    }

    fn build_processor(&self, cli_config: &CliConfig) -> Result<WordProcessor> {
        let language = self
            .language
            .clone()
            .unwrap_or_else(|| cli_config.processing.default_language.clone());

        let mut builder = Config::builder().language(language);
        if let Some(seed) = self.seed.or(cli_config.processing.seed) {
            builder = builder.seed(seed);
        }
        if let Some(path) = &self.language_config {
            builder = builder
                .profile_file(path)
                .with_context(|| format!("Failed to load profile: {}", path.display()))?;
        }
        let config = builder.build()?;

        Ok(WordProcessor::with_config(&self.string, &config))
    }
}
