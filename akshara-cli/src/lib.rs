//! Akshara CLI library
//!
//! This library provides the command-line interface for the Akshara
//! logical-character segmentation and word analysis system.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod operation;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
