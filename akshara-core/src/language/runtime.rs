//! Runtime implementation of language profiles
//!
//! Bridges a validated [`ProfileConfig`] and the hot-path classifier.

use std::path::Path;

use crate::{
    classifier::CharacterClassifier,
    error::{CoreError, Result},
    language::{
        config::ProfileConfig,
        interface::{FillerKind, LanguageProfile},
        tables::RangeTable,
    },
    types::ScriptRole,
};

/// Language profile driven by range tables
#[derive(Debug, Clone)]
pub struct ConfigurableProfile {
    code: String,
    name: String,
    aliases: Vec<String>,
    scripted: bool,

    script: RangeTable,
    joiners: RangeTable,
    consonants: RangeTable,
    independent_vowels: RangeTable,
    dependent_vowels: RangeTable,
    halants: RangeTable,
    modifiers: RangeTable,

    filler_consonants: Vec<char>,
    filler_vowels: Vec<char>,
}

impl ConfigurableProfile {
    /// Create from configuration
    pub fn from_config(config: &ProfileConfig) -> Result<Self> {
        config.validate()?;
        let ranges = &config.ranges;

        Ok(Self {
            code: config.metadata.code.trim().to_string(),
            name: config.metadata.name.trim().to_string(),
            aliases: config.metadata.aliases.clone(),
            scripted: config.metadata.scripted,
            script: RangeTable::from_literals(&ranges.script)?,
            joiners: RangeTable::from_points(&ranges.joiner)?,
            consonants: RangeTable::from_literals(&ranges.consonant)?,
            independent_vowels: RangeTable::from_literals(&ranges.independent_vowel)?,
            dependent_vowels: RangeTable::from_literals(&ranges.dependent_vowel)?,
            halants: RangeTable::from_literals(&ranges.halant)?,
            modifiers: RangeTable::from_literals(&ranges.modifier)?,
            filler_consonants: RangeTable::from_literals(&config.filler.consonant)?.expand(),
            filler_vowels: RangeTable::from_literals(&config.filler.vowel)?.expand(),
        })
    }

    /// Parse and build from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        Self::from_config(&ProfileConfig::from_toml(text)?)
    }

    /// Load from a TOML file on disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CoreError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&text)
    }
}

impl CharacterClassifier for ConfigurableProfile {
    fn classify(&self, ch: char) -> ScriptRole {
        if !self.is_script_member(ch) {
            return ScriptRole::Foreign;
        }
        if self.halants.contains(ch) {
            ScriptRole::Halant
        } else if self.modifiers.contains(ch) {
            ScriptRole::CombiningModifier
        } else if self.consonants.contains(ch) {
            ScriptRole::Consonant
        } else if self.independent_vowels.contains(ch) {
            ScriptRole::IndependentVowel
        } else if self.dependent_vowels.contains(ch) {
            ScriptRole::DependentVowelSign
        } else {
            ScriptRole::ScriptOther
        }
    }

    #[inline]
    fn is_script_member(&self, ch: char) -> bool {
        self.script.contains(ch) || self.joiners.contains(ch)
    }
}

impl LanguageProfile for ConfigurableProfile {
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
        self.scripted
    }

    fn filler_inventory(&self, kind: FillerKind) -> &[char] {
        match kind {
            FillerKind::Consonant => &self.filler_consonants,
            FillerKind::Vowel => &self.filler_vowels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn telugu() -> ConfigurableProfile {
        ConfigurableProfile::from_toml(include_str!("../../configs/languages/telugu.toml"))
            .unwrap()
    }

    #[test]
    fn test_telugu_role_ranges() {
        let te = telugu();
        assert!(te.is_consonant('\u{0C15}'));
        assert!(te.is_consonant('\u{0C39}'));
        assert!(!te.is_consonant('\u{0C14}'));
        assert!(te.is_independent_vowel('\u{0C05}'));
        assert!(te.is_independent_vowel('\u{0C14}'));
        assert!(te.is_dependent_vowel_sign('\u{0C3E}'));
        assert!(te.is_dependent_vowel_sign('\u{0C4C}'));
        assert!(te.is_halant('\u{0C4D}'));
        for ch in ['\u{0C01}', '\u{0C02}', '\u{0C03}'] {
            assert!(te.is_combining_modifier(ch));
        }
    }

    #[test]
    fn test_telugu_script_membership() {
        let te = telugu();
        assert!(te.is_script_member('\u{0C00}'));
        assert!(te.is_script_member('\u{0C7F}'));
        assert!(te.is_script_member('\u{200C}'));
        assert!(!te.is_script_member('a'));
        assert!(!te.is_script_member('\u{0915}'));
        assert_eq!(te.classify('\u{0C66}'), ScriptRole::ScriptOther);
        assert_eq!(te.classify('\u{200C}'), ScriptRole::ScriptOther);
        assert_eq!(te.classify('x'), ScriptRole::Foreign);
    }

    #[test]
    fn test_telugu_metadata_and_fillers() {
        let te = telugu();
        assert_eq!(te.code(), "te");
        assert_eq!(te.name(), "Telugu");
        assert!(te.is_scripted());
        let consonants = te.filler_inventory(FillerKind::Consonant);
        assert!(consonants.iter().all(|&c| te.is_consonant(c)));
        assert!(!consonants.contains(&'\u{0C29}'));
        let vowels = te.filler_inventory(FillerKind::Vowel);
        assert!(vowels.iter().all(|&c| te.is_independent_vowel(c)));
        assert!(!vowels.contains(&'\u{0C0D}'));
        assert!(!vowels.contains(&'\u{0C11}'));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[metadata]
code = "kn"
name = "Kannada"

[ranges]
script = [["0C80", "0CFF"]]
consonant = [["0C95", "0CB9"]]
halant = [["0CCD", "0CCD"]]
"#
        )
        .unwrap();

        let kn = ConfigurableProfile::from_file(file.path()).unwrap();
        assert_eq!(kn.name(), "Kannada");
        assert!(kn.is_halant('\u{0CCD}'));
        assert_eq!(kn.parse("ಕ್ಕ").1.len(), 1);
    }

    #[test]
    fn test_from_missing_file() {
        let err = ConfigurableProfile::from_file(Path::new("/nonexistent/profile.toml"))
            .unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }
}
