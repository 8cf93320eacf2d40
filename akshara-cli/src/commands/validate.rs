//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language profile file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        use akshara_core::{ConfigurableProfile, FillerKind, LanguageProfile};

        let path = self.language_config.display();
        println!("Validating language profile: {path}");

        match ConfigurableProfile::from_file(&self.language_config) {
            Ok(profile) => {
                println!("✓ Profile is valid!");
                println!("  Language code: {}", profile.code());
                println!("  Language name: {}", profile.name());
                println!("  Scripted: {}", profile.is_scripted());
                if !profile.aliases().is_empty() {
                    println!("  Aliases: {}", profile.aliases().join(", "));
                }
                println!(
                    "  Filler inventory: {} consonants, {} vowels",
                    profile.filler_inventory(FillerKind::Consonant).len(),
                    profile.filler_inventory(FillerKind::Vowel).len()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Profile is invalid: {e}");
                anyhow::bail!("Validation failed: {e}")
            }
        }
    }
}
