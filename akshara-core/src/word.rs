//! A parsed word: text plus its scalars and logical characters

use crate::{
    language::LanguageProfile,
    segmenter::scalar_counts,
    types::{join_units, LogicalChar, ScalarSequence},
};

/// Text bound to a language and parsed once
///
/// Holds the scalar sequence and the logical characters produced by the
/// profile. A `Word` never changes; parse a new one for new text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Word {
    text: String,
    language: String,
    scripted: bool,
    scalars: ScalarSequence,
    units: Vec<LogicalChar>,
}

impl Word {
    /// Extract and segment `text` under `profile`
    pub fn parse(text: &str, profile: &dyn LanguageProfile) -> Self {
        let (scalars, units) = profile.parse(text);
        log::trace!(
            "parsed {} scalars into {} units under {}",
            scalars.len(),
            units.len(),
            profile.code()
        );
        Self {
            text: text.to_string(),
            language: profile.code().to_string(),
            scripted: profile.is_scripted(),
            scalars,
            units,
        }
    }

    /// The text as given
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Code of the profile that parsed this word
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether the parsing profile uses a combining script
    pub fn is_scripted(&self) -> bool {
        self.scripted
    }

    /// Extracted scalars, ZWNJ removed
    pub fn scalars(&self) -> &ScalarSequence {
        &self.scalars
    }

    /// Logical characters in order
    pub fn units(&self) -> &[LogicalChar] {
        &self.units
    }

    /// Scalar count of each logical character
    pub fn scalar_counts(&self) -> Vec<usize> {
        scalar_counts(&self.units)
    }

    /// Number of logical characters
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// True when the text produced no logical characters
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The logical characters joined back into text
    pub fn joined(&self) -> String {
        join_units(&self.units)
    }
}
