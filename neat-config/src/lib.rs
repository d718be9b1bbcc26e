//! Shared configuration loader for the neat formatter.
//!
//! `defaults/neat.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`NeatConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use neat_core::RenderRules;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/neat.default.toml");

/// Top-level configuration consumed by neat applications.
#[derive(Debug, Clone, Deserialize)]
pub struct NeatConfig {
    pub formatting: FormattingConfig,
    pub comment: CommentConfig,
}

/// Formatting-related configuration groups.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingConfig {
    pub rules: RenderRulesConfig,
}

/// Mirrors the knobs exposed by the neat renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderRulesConfig {
    pub max_line_len: usize,
    pub avoid_runts: bool,
    pub compact_lists: bool,
}

impl From<RenderRulesConfig> for RenderRules {
    fn from(config: RenderRulesConfig) -> Self {
        RenderRules {
            max_line_len: config.max_line_len,
            avoid_runts: config.avoid_runts,
            compact_lists: config.compact_lists,
        }
    }
}

/// Comment formatting knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentConfig {
    pub prefix: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<NeatConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<NeatConfig, ConfigError> {
    Loader::new().build()
}
