//! Logical-character segmentation and word analysis for Indic scripts
//!
//! Text is decoded into Unicode scalars, each scalar is classified by a
//! language profile, and a single forward pass groups the scalars into
//! logical characters: the orthographic units a reader counts, such as a
//! consonant with its vowel sign or a conjunct joined by a halant.
//! Word-level analysis (strength, anagrams, ladders, ...) then works on those
//! units instead of raw code points.
//!
//! # Architecture
//!
//! - **Extraction**: [`extract`] decodes text, dropping zero-width non-joiners
//! - **Classification**: [`CharacterClassifier`] maps a scalar to a [`ScriptRole`]
//! - **Segmentation**: [`segment`] groups classified scalars
//! - **Languages**: [`LanguageProfile`] implementations and the [`Registry`]
//! - **Analysis**: pure functions in [`analysis`]
//!
//! # Example
//!
//! ```rust
//! use akshara_core::{analysis, get_profile, Word};
//!
//! let profile = get_profile("telugu");
//! let word = Word::parse("అమెరికా", profile.as_ref());
//!
//! let units: Vec<String> = word.units().iter().map(|u| u.to_string()).collect();
//! assert_eq!(units, ["అ", "మె", "రి", "కా"]);
//! assert_eq!(analysis::strength(word.units(), word.is_scripted()), 2);
//! assert_eq!(analysis::weight(word.units(), word.is_scripted()), 7);
//! ```

pub mod analysis;
pub mod classifier;
pub mod error;
pub mod extractor;
pub mod language;
pub mod segmenter;
pub mod types;
pub mod word;

pub use analysis::MatchMark;
pub use classifier::{CharacterClassifier, PlainClassifier};
pub use error::{CoreError, Result};
pub use extractor::{extract, extract_bytes, ZWNJ};
pub use language::{
    default_registry, detect_language, get_profile, ConfigurableProfile, FillerKind,
    LanguageProfile, PlainProfile, ProfileConfig, Registry, DEFAULT_LANGUAGE,
};
pub use segmenter::{scalar_counts, segment};
pub use types::{join_units, LogicalChar, ScalarSequence, ScriptRole};
pub use word::Word;
