//! akshara command-line entry point

use std::process::ExitCode;

use akshara_cli::commands::Commands;
use clap::Parser;

/// Logical-character segmentation and word analysis for Indic scripts
#[derive(Debug, Parser)]
#[command(name = "akshara", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
