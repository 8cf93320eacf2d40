//! Public contract for language profiles

use crate::{
    classifier::CharacterClassifier,
    extractor::extract,
    segmenter::segment,
    types::{LogicalChar, ScalarSequence},
};

/// Inventory to draw filler characters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillerKind {
    /// Base consonants
    Consonant,
    /// Independent vowels
    Vowel,
}

impl FillerKind {
    /// Parse a filler kind name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "consonant" | "consonants" => Some(FillerKind::Consonant),
            "vowel" | "vowels" => Some(FillerKind::Vowel),
            _ => None,
        }
    }

    /// Lowercase name of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            FillerKind::Consonant => "consonant",
            FillerKind::Vowel => "vowel",
        }
    }
}

/// A language: classifier, segmentation and script facts
///
/// Segmentation is shared by every profile; languages differ only in how
/// scalars are classified. A profile that needs different grouping rules can
/// override [`parse`](Self::parse).
pub trait LanguageProfile: CharacterClassifier + 'static {
    /// Short language code, e.g. "te"
    fn code(&self) -> &str;

    /// Display name, e.g. "Telugu"
    fn name(&self) -> &str;

    /// Additional names this profile answers to
    fn aliases(&self) -> &[String] {
        &[]
    }

    /// Whether the language uses a combining script
    ///
    /// Strength and weight count scalars for scripted languages and units
    /// otherwise.
    fn is_scripted(&self) -> bool;

    /// Characters used for random filler generation
    fn filler_inventory(&self, kind: FillerKind) -> &[char];

    /// Extract and segment `text`
    fn parse(&self, text: &str) -> (ScalarSequence, Vec<LogicalChar>) {
        let scalars = extract(text);
        let units = segment(scalars.as_slice(), self);
        (scalars, units)
    }
}

impl std::fmt::Debug for dyn LanguageProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageProfile")
            .field("code", &self.code())
            .field("name", &self.name())
            .finish()
    }
}
