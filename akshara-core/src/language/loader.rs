//! Language registry
//!
//! Maps language names to profiles. The process-wide registry holds the
//! embedded built-in profiles and never changes after initialization, so it
//! is shared by every caller without locking.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::{
    error::{CoreError, Result},
    language::{interface::LanguageProfile, plain::PlainProfile, runtime::ConfigurableProfile},
};

/// Name of the profile used when a language is not recognized
pub const DEFAULT_LANGUAGE: &str = "telugu";

/// Embedded built-in profile configurations
const EMBEDDED: &[(&str, &str)] = &[(
    "telugu",
    include_str!("../../configs/languages/telugu.toml"),
)];

static DEFAULT_REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Normalize a language name for lookup
fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Name-to-profile mapping with a fallback profile
#[derive(Clone)]
pub struct Registry {
    profiles: HashMap<String, Arc<dyn LanguageProfile>>,
    /// Registration order, primary names only
    order: Vec<String>,
    default: Arc<dyn LanguageProfile>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("languages", &self.order)
            .field("default", &self.default.name())
            .finish()
    }
}

impl Registry {
    /// Empty registry whose fallback is `default`
    ///
    /// The fallback profile is registered under its own names.
    pub fn new(default: Arc<dyn LanguageProfile>) -> Self {
        let mut registry = Self {
            profiles: HashMap::new(),
            order: Vec::new(),
            default: Arc::clone(&default),
        };
        registry.register(default);
        registry
    }

    /// Registry with the built-in profiles, falling back to Telugu
    pub fn builtin() -> Self {
        let mut registry = Self::new(Arc::new(PlainProfile::english()));

        for (name, toml_str) in EMBEDDED {
            match ConfigurableProfile::from_toml(toml_str) {
                Ok(profile) => registry.register(Arc::new(profile)),
                Err(e) => log::error!("failed to load embedded {name} profile: {e}"),
            }
        }

        if let Err(e) = registry.set_default(DEFAULT_LANGUAGE) {
            log::warn!("{e}; falling back to English");
        }

        log::debug!("initialized language registry: {:?}", registry.order);
        registry
    }

    /// Register a profile under its code, name and aliases
    ///
    /// Later registrations replace earlier ones for any shared name.
    pub fn register(&mut self, profile: Arc<dyn LanguageProfile>) {
        let primary = normalize(profile.name());
        let names = std::iter::once(profile.code().to_string())
            .chain(std::iter::once(profile.name().to_string()))
            .chain(profile.aliases().iter().cloned());

        for name in names {
            let key = normalize(&name);
            if !key.is_empty() {
                self.profiles.insert(key, Arc::clone(&profile));
            }
        }

        if !self.order.contains(&primary) {
            self.order.push(primary);
        }
    }

    /// Choose the fallback profile by name
    pub fn set_default(&mut self, name: &str) -> Result<()> {
        let profile = self
            .get(name)
            .ok_or_else(|| CoreError::UnknownLanguage(name.to_string()))?;
        self.default = profile;
        Ok(())
    }

    /// Look up a profile, `None` when the name is not registered
    pub fn get(&self, name: &str) -> Option<Arc<dyn LanguageProfile>> {
        self.profiles.get(&normalize(name)).cloned()
    }

    /// Look up a profile, falling back to the default profile
    pub fn resolve(&self, name: &str) -> Arc<dyn LanguageProfile> {
        match self.get(name) {
            Some(profile) => profile,
            None => {
                log::debug!(
                    "language '{name}' not registered, using {}",
                    self.default.name()
                );
                Arc::clone(&self.default)
            }
        }
    }

    /// Whether `name` is registered
    pub fn is_supported(&self, name: &str) -> bool {
        self.profiles.contains_key(&normalize(name))
    }

    /// The fallback profile
    pub fn default_profile(&self) -> &Arc<dyn LanguageProfile> {
        &self.default
    }

    /// Primary names in registration order
    pub fn languages(&self) -> &[String] {
        &self.order
    }

    /// Every registered name, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Guess the profile for `text` from its script
    ///
    /// Returns the first scripted profile, in registration order, that claims
    /// any scalar of the text. Text in no registered script resolves to the
    /// first unscripted profile.
    pub fn detect(&self, text: &str) -> Arc<dyn LanguageProfile> {
        let profiles: Vec<&Arc<dyn LanguageProfile>> = self
            .order
            .iter()
            .filter_map(|name| self.profiles.get(name))
            .collect();

        let scripted = profiles.iter().filter(|p| p.is_scripted()).find(|p| {
            text.chars()
                .any(|ch| ch != crate::extractor::ZWNJ && p.is_script_member(ch))
        });

        match scripted.or_else(|| profiles.iter().find(|p| !p.is_scripted())) {
            Some(profile) => Arc::clone(*profile),
            None => Arc::clone(&self.default),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The process-wide built-in registry
pub fn default_registry() -> &'static Registry {
    DEFAULT_REGISTRY.get_or_init(Registry::builtin)
}

/// Resolve a language name against the built-in registry
pub fn get_profile(language: &str) -> Arc<dyn LanguageProfile> {
    default_registry().resolve(language)
}

/// Guess the language of `text` against the built-in registry
pub fn detect_language(text: &str) -> Arc<dyn LanguageProfile> {
    default_registry().detect(text)
}
