//! CLI command implementations

use akshara_core::LanguageProfile;
use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod run;
pub mod segment;
pub mod validate;

use crate::operation::Operation;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one word operation on a text
    Run(run::RunArgs),

    /// Segment text files into logical characters
    Segment(segment::SegmentArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a language profile file
    Validate(validate::ValidateArgs),

    /// Generate a language profile template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List registered languages
    Languages,

    /// List operations accepted by `run`
    Operations,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Run(args) => args.execute(),
            Commands::Segment(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Languages => {
                let registry = akshara_core::default_registry();
                let default = registry.default_profile().code().to_string();
                for name in registry.languages() {
                    let profile = registry.resolve(name);
                    let marker = if profile.code() == default {
                        " (default)"
                    } else {
                        ""
                    };
                    let aliases = profile.aliases().join(", ");
                    if aliases.is_empty() {
                        println!("{:<4} {}{marker}", profile.code(), profile.name());
                    } else {
                        println!(
                            "{:<4} {}{marker} [{aliases}]",
                            profile.code(),
                            profile.name()
                        );
                    }
                }
            }
            ListCommands::Operations => {
                for op in Operation::ALL {
                    println!("{:<36} {}", op.name(), op.message());
                }
            }
        }
        Ok(())
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_commands_debug_format() {
        let validate_cmd = Commands::Validate(validate::ValidateArgs {
            language_config: PathBuf::from("kannada.toml"),
        });
        let debug_str = format!("{:?}", validate_cmd);
        assert!(debug_str.contains("Validate"));
        assert!(debug_str.contains("kannada.toml"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Operations,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Operations"));
    }

    #[test]
    fn test_listings_succeed() {
        assert!(ListCommands::Languages.execute().is_ok());
        assert!(ListCommands::Operations.execute().is_ok());
    }
}
