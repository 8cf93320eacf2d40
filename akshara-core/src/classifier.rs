//! Character classification for logical-character segmentation

use crate::types::ScriptRole;

/// Pure script-role classification logic
///
/// Implementors only provide [`classify`](Self::classify) and
/// [`is_script_member`](Self::is_script_member); the role predicates are
/// derived from them.
pub trait CharacterClassifier: Send + Sync {
    /// Classify a scalar value
    fn classify(&self, ch: char) -> ScriptRole;

    /// Check if the scalar belongs to this classifier's script
    fn is_script_member(&self, ch: char) -> bool {
        self.classify(ch).is_script()
    }

    /// Check if scalar is a base consonant
    fn is_consonant(&self, ch: char) -> bool {
        matches!(self.classify(ch), ScriptRole::Consonant)
    }

    /// Check if scalar is an independent vowel
    fn is_independent_vowel(&self, ch: char) -> bool {
        matches!(self.classify(ch), ScriptRole::IndependentVowel)
    }

    /// Check if scalar is a dependent vowel sign
    fn is_dependent_vowel_sign(&self, ch: char) -> bool {
        matches!(self.classify(ch), ScriptRole::DependentVowelSign)
    }

    /// Check if scalar is the virama
    fn is_halant(&self, ch: char) -> bool {
        matches!(self.classify(ch), ScriptRole::Halant)
    }

    /// Check if scalar is an anusvara/visarga-class modifier
    fn is_combining_modifier(&self, ch: char) -> bool {
        matches!(self.classify(ch), ScriptRole::CombiningModifier)
    }
}

/// Classifier for text with no combining script: every scalar is foreign
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainClassifier;

impl CharacterClassifier for PlainClassifier {
    #[inline]
    fn classify(&self, _ch: char) -> ScriptRole {
        ScriptRole::Foreign
    }
}
