//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new profile
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating language profile template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Profile template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Fill in the script ranges and set scripted = true");
        println!("2. Validate your profile:");
        println!("   akshara validate -c {}", self.output.display());
        println!("3. Use it:");
        println!(
            "   akshara run logical -s <text> --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template profile content
    fn generate_template(&self) -> String {
        format!(
            r#"# Language profile for {code}
#
# Code points are hexadecimal ("0C15" or "U+0C15"). Ranges are closed
# [start, end] pairs. Role ranges must lie inside the script ranges.

[metadata]
code = "{code}"
name = "Custom Language"
# Other names this profile answers to
aliases = []
# Set to true once the script ranges below are filled in. Unscripted
# profiles treat every character as its own logical character.
scripted = false

[ranges]
# Whole script block, e.g. [["0C00", "0C7F"]] for Telugu
script = []
# Base consonants
consonant = []
# Freestanding vowels
independent_vowel = []
# Vowel signs attached to a preceding consonant or vowel
dependent_vowel = []
# Virama joining consonants into conjuncts
halant = []
# Anusvara, visarga and similar marks closing a logical character
modifier = []
# Single control characters that belong to the script, e.g. ["200C"]
joiner = []

[filler]
# Characters drawn by the filler operation
consonant = []
vowel = []
"#,
            code = self.language_code
        )
    }
}
