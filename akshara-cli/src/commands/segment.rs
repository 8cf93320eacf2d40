//! Segment command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use akshara_api::Config;
use akshara_core::{LanguageProfile, Word};

use crate::{
    config::CliConfig,
    input::{resolve_patterns, FileReader},
    output::{JsonFormatter, OutputFormat, OutputFormatter, SegmentedLine, TextFormatter},
    progress::ProgressReporter,
};

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Language name (unknown names fall back to Telugu)
    #[arg(short, long, value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Language profile file to use instead of a built-in language
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Separator between logical characters in text output
    #[arg(short, long, value_name = "SEP")]
    pub delimiter: Option<String>,

    /// Segment files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel segmentation
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting segmentation");
        log::debug!("Arguments: {:?}", self);

        let cli_config = CliConfig::load(self.config.as_deref())?;
        let profile = self.profile(&cli_config)?;
        let files = resolve_patterns(&self.input)?;
        log::info!("Segmenting {} file(s) as {}", files.len(), profile.name());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let results: Vec<Result<Vec<SegmentedLine>>> = if self.parallel && files.len() > 1 {
            let threads = self
                .threads
                .or(Some(cli_config.processing.worker_threads).filter(|&n| n > 0))
                .unwrap_or_else(num_cpus::get);
            log::debug!("Using {threads} worker threads");

            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| {
                files
                    .par_iter()
                    .map(|path| segment_file(path, profile.as_ref(), &progress))
                    .collect()
            })
        } else {
            files
                .iter()
                .map(|path| segment_file(path, profile.as_ref(), &progress))
                .collect()
        };
        progress.finish();

        let delimiter = self
            .delimiter
            .clone()
            .unwrap_or_else(|| cli_config.output.delimiter.clone());
        let format = match self.format {
            Some(format) => format,
            None => cli_config.default_format()?,
        };

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            )),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, delimiter)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer, cli_config.output.pretty_json))
            }
        };

        for lines in results {
            for line in lines? {
                formatter.format_line(&line)?;
            }
        }
        formatter.finish()?;

        Ok(())
    }

    fn profile(&self, cli_config: &CliConfig) -> Result<Arc<dyn LanguageProfile>> {
        let language = self
            .language
            .clone()
            .unwrap_or_else(|| cli_config.processing.default_language.clone());
        let mut builder = Config::builder().language(language);
        if let Some(path) = &self.language_config {
            builder = builder
                .profile_file(path)
                .with_context(|| format!("Failed to load profile: {}", path.display()))?;
        }
        Ok(builder.build()?.profile())
    }
}

/// Segment every line of one file
fn segment_file(
    path: &Path,
    profile: &dyn LanguageProfile,
    progress: &ProgressReporter,
) -> Result<Vec<SegmentedLine>> {
    let size = FileReader::file_size(path)?;
    log::debug!("Reading {} ({size} bytes)", path.display());
    let text = FileReader::read_text(path)?;
    let file = path.display().to_string();

    let lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| SegmentedLine {
            file: file.clone(),
            line: i + 1,
            logical_chars: Word::parse(line, profile)
                .units()
                .iter()
                .map(ToString::to_string)
                .collect(),
        })
        .collect();

    progress.file_completed(&file);
    Ok(lines)
}
