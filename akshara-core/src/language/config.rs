//! Configuration structures and validation
//!
//! This module defines the TOML schema for language profiles. Code points
//! are written as hexadecimal literals ("0C15" or "U+0C15"); ranges are
//! closed `[start, end]` pairs.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::language::tables::RangeTable;

/// Root profile configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub ranges: Ranges,
    #[serde(default)]
    pub filler: Filler,
}

/// Profile metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default = "default_true")]
    pub scripted: bool,
}

/// Script role ranges
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ranges {
    #[serde(default)]
    pub script: Vec<[String; 2]>,
    #[serde(default)]
    pub consonant: Vec<[String; 2]>,
    #[serde(default)]
    pub independent_vowel: Vec<[String; 2]>,
    #[serde(default)]
    pub dependent_vowel: Vec<[String; 2]>,
    #[serde(default)]
    pub halant: Vec<[String; 2]>,
    #[serde(default)]
    pub modifier: Vec<[String; 2]>,
    /// Individual control characters that count as script members
    #[serde(default)]
    pub joiner: Vec<String>,
}

/// Filler inventories
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Filler {
    #[serde(default)]
    pub consonant: Vec<[String; 2]>,
    #[serde(default)]
    pub vowel: Vec<[String; 2]>,
}

fn default_true() -> bool {
    true
}

impl ProfileConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| CoreError::InvalidProfile {
            code: self.metadata.code.clone(),
            reason,
        };

        if self.metadata.code.trim().is_empty() {
            return Err(invalid("language code is empty".to_string()));
        }
        if self.metadata.name.trim().is_empty() {
            return Err(invalid("language name is empty".to_string()));
        }

        let script = RangeTable::from_literals(&self.ranges.script)
            .map_err(|e| invalid(e.to_string()))?;
        if self.metadata.scripted && script.is_empty() {
            return Err(invalid("scripted profile defines no script range".to_string()));
        }

        let roles = [
            ("consonant", &self.ranges.consonant),
            ("independent_vowel", &self.ranges.independent_vowel),
            ("dependent_vowel", &self.ranges.dependent_vowel),
            ("halant", &self.ranges.halant),
            ("modifier", &self.ranges.modifier),
            ("filler.consonant", &self.filler.consonant),
            ("filler.vowel", &self.filler.vowel),
        ];
        for (label, literals) in roles {
            let table =
                RangeTable::from_literals(literals).map_err(|e| invalid(e.to_string()))?;
            if self.metadata.scripted && !table.is_within(&script) {
                return Err(invalid(format!("{label} range lies outside the script range")));
            }
        }

        RangeTable::from_points(&self.ranges.joiner).map_err(|e| invalid(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[metadata]
code = "xx"
name = "Test"

[ranges]
script = [["0C00", "0C7F"]]
consonant = [["0C15", "0C39"]]
"#;

    #[test]
    fn test_minimal_config_validates() {
        let config = ProfileConfig::from_toml(MINIMAL).unwrap();
        assert!(config.metadata.scripted);
        assert!(config.metadata.aliases.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_code_rejected() {
        let mut config = ProfileConfig::from_toml(MINIMAL).unwrap();
        config.metadata.code = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_role_outside_script_rejected() {
        let text = MINIMAL.replace("[\"0C15\", \"0C39\"]", "[\"0915\", \"0939\"]");
        let config = ProfileConfig::from_toml(&text).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("consonant"));
    }

    #[test]
    fn test_scripted_without_script_range_rejected() {
        let text = r#"
[metadata]
code = "xx"
name = "Test"
"#;
        let config = ProfileConfig::from_toml(text).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unscripted_without_ranges_validates() {
        let text = r#"
[metadata]
code = "en"
name = "English"
scripted = false
"#;
        let config = ProfileConfig::from_toml(text).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = ProfileConfig::from_toml("[metadata\ncode=").unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
    }
}
