//! Minimal profile for scripts without combining rules
//!
//! Every scalar is foreign, so each one becomes its own logical character.

use crate::{
    classifier::{CharacterClassifier, PlainClassifier},
    language::interface::{FillerKind, LanguageProfile},
    types::ScriptRole,
};

const CONSONANTS: [char; 21] = [
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w',
    'x', 'y', 'z',
];
const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// English-style profile: one scalar per unit
#[derive(Debug, Clone)]
pub struct PlainProfile {
    code: String,
    name: String,
    aliases: Vec<String>,
}

impl PlainProfile {
    /// The built-in English profile
    pub fn english() -> Self {
        Self::new("en", "English")
    }

    /// A plain profile under another name
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    /// Add names this profile answers to
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }
}

impl Default for PlainProfile {
    fn default() -> Self {
        Self::english()
    }
}

impl CharacterClassifier for PlainProfile {
    #[inline]
    fn classify(&self, ch: char) -> ScriptRole {
        PlainClassifier.classify(ch)
    }
}

impl LanguageProfile for PlainProfile {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn aliases(&self) -> &[String] {
        &self.aliases
    }

    fn is_scripted(&self) -> bool {
        false
    }

    fn filler_inventory(&self, kind: FillerKind) -> &[char] {
        match kind {
            FillerKind::Consonant => &CONSONANTS,
            FillerKind::Vowel => &VOWELS,
        }
    }
}
