//! Word processor API for Akshara
//!
//! This crate binds a text to a language once and exposes the word-level
//! operations over its logical characters: lengths and accessors, editing,
//! containment, metrics, pairwise comparisons and randomized selections.
//!
//! # Example
//!
//! ```rust
//! use akshara_api::WordProcessor;
//!
//! let word = WordProcessor::bind("అమెరికా", "telugu");
//! assert_eq!(word.logical_strings(), ["అ", "మె", "రి", "కా"]);
//! assert_eq!(word.strength(), 2);
//! assert!(WordProcessor::bind("listen", "english").is_anagram("silent"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod processor;
pub mod random;

// Re-export key types
pub use akshara_core::{
    analysis::{marks_to_string, MatchMark},
    default_registry, detect_language, FillerKind, LanguageProfile, LogicalChar,
};
pub use config::{Config, ConfigBuilder};
pub use dto::WordSummary;
pub use error::{ApiError, Result};
pub use processor::WordProcessor;

/// Bind `text` under the language it appears to be written in
pub fn bind_detected(text: &str) -> WordProcessor {
    let profile = detect_language(text);
    log::debug!("detected {} for input", profile.name());
    WordProcessor::new(text, profile)
}
