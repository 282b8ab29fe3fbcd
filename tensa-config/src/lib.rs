//! Configuration for the tensa toolchain.
//!
//! All knobs ship as an embedded TOML document
//! (`defaults/tensa.default.toml`), so every binary carries working
//! defaults and a user file only needs to name the keys it changes.
//! [`Loader`] stacks those layers — defaults, then files, then individual
//! overrides — and deserializes the merged view into [`TensaConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/tensa.default.toml");

/// Top-level configuration consumed by tensa applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TensaConfig {
    pub pipeline: PipelineConfig,
    pub checker: CheckerConfig,
    pub remote: RemoteConfig,
}

/// Knobs for the reactive analysis pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Debounce window before the full path runs, in milliseconds.
    pub debounce_ms: u64,
    /// Caller-level guard: inputs shorter than this are not analyzed.
    pub min_input_chars: usize,
    /// Word-count delta at or below which an edit counts as minor.
    pub quick_word_delta: usize,
    /// Character-length delta at or below which an edit counts as minor.
    pub quick_char_delta: usize,
}

/// Spell/grammar checker configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckerConfig {
    /// `"en"` or `"es"` forces that language bucket; `"auto"` (the default)
    /// lets statistical detection decide per text.
    pub locale: String,
    /// Whether the English grammar pass runs.
    pub grammar_pass: bool,
}

/// Remote analysis service endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

/// Load the embedded defaults with no user layers applied.
pub fn load_defaults() -> Result<TensaConfig, ConfigError> {
    Loader::new().build()
}

/// Builds a [`TensaConfig`] by stacking sources over the embedded defaults.
///
/// Sources are applied in the order they are added; later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// A loader whose first layer is the embedded default document.
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer a TOML file that may legitimately be absent, e.g. a per-user
    /// settings file that most installs never create.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml).required(false));
        self
    }

    /// Layer a TOML file that must exist; building reports an error if it
    /// cannot be read.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml).required(true));
        self
    }

    /// Pin one dotted key (e.g. `"pipeline.debounce_ms"`) above every file
    /// layer. This is how CLI flags beat configuration files.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge all layers and deserialize.
    pub fn build(self) -> Result<TensaConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.pipeline.debounce_ms, 500);
        assert_eq!(config.pipeline.min_input_chars, 5);
        assert_eq!(config.pipeline.quick_word_delta, 2);
        assert_eq!(config.pipeline.quick_char_delta, 10);
        assert_eq!(config.checker.locale, "auto");
        assert!(config.checker.grammar_pass);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("pipeline.debounce_ms", 250u64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.pipeline.debounce_ms, 250);
    }

    #[test]
    fn overrides_can_retarget_the_checker() {
        let config = Loader::new()
            .set_override("checker.locale", "es")
            .expect("override to apply")
            .set_override("checker.grammar_pass", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.checker.locale, "es");
        assert!(!config.checker.grammar_pass);
    }
}
