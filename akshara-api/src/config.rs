//! Processor configuration

use std::path::Path;
use std::sync::Arc;

use akshara_core::{get_profile, ConfigurableProfile, LanguageProfile, DEFAULT_LANGUAGE};

use crate::error::{ApiError, Result};

/// Language and randomness settings for a [`WordProcessor`](crate::WordProcessor)
#[derive(Debug, Clone)]
pub struct Config {
    language: String,
    seed: Option<u64>,
    profile: Option<Arc<dyn LanguageProfile>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            seed: None,
            profile: None,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Language name as requested
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Seed for the processor's random generator, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The profile this configuration selects
    ///
    /// A custom profile wins; otherwise the language name is resolved against
    /// the built-in registry, falling back to the default language.
    pub fn profile(&self) -> Arc<dyn LanguageProfile> {
        match &self.profile {
            Some(profile) => Arc::clone(profile),
            None => get_profile(&self.language),
        }
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Seed the random generator for reproducible shuffles and fillers
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Use a custom profile instead of a registered language
    pub fn profile(mut self, profile: Arc<dyn LanguageProfile>) -> Self {
        self.config.language = profile.name().to_string();
        self.config.profile = Some(profile);
        self
    }

    /// Load a custom profile from a TOML file
    pub fn profile_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let profile = ConfigurableProfile::from_file(path.as_ref())?;
        log::info!("loaded profile {} from {}", profile.code(), path.as_ref().display());
        Ok(self.profile(Arc::new(profile)))
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.language.trim().is_empty() && self.config.profile.is_none() {
            return Err(ApiError::Config(
                "language or custom profile required".to_string(),
            ));
        }

        Ok(self.config)
    }
}
