//! Language profiles and the language registry
//!
//! A profile pairs a [`CharacterClassifier`](crate::CharacterClassifier)
//! with the segmenter and a few script facts. Built-in profiles are
//! described by TOML files embedded at compile time; further profiles can be
//! loaded from disk and registered by name.

pub mod interface;

pub(crate) mod config;
pub(crate) mod loader;
pub(crate) mod plain;
pub(crate) mod runtime;
pub(crate) mod tables;

pub use config::ProfileConfig;
pub use interface::*;
pub use loader::{default_registry, detect_language, get_profile, Registry, DEFAULT_LANGUAGE};
pub use plain::PlainProfile;
pub use runtime::ConfigurableProfile;
