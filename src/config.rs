//! Configuration loading for the galign tools.
//!
//! `defaults/galign.default.toml` is embedded into every binary so that the
//! documented defaults and runtime behavior stay in sync. Applications layer
//! user files on top of those defaults via [`Loader`] before deserializing
//! into [`GalignConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/galign.default.toml");

/// Name of the optional per-directory override file picked up by the binaries.
pub const LOCAL_CONFIG_FILE: &str = "galign.toml";

/// Top-level configuration consumed by the galign tools.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalignConfig {
    pub prep: PrepConfig,
    pub align: AlignConfig,
}

/// Markers and naming used by the line transcoder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PrepConfig {
    pub comment_marker: String,
    pub paragraph_marker: String,
    pub sentence_marker: String,
    pub output_suffix: String,
    pub on_error: ErrorPolicy,
}

/// What the transcoder does when one input of a batch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    Abort,
    Skip,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlignConfig {
    pub hard_delimiter: String,
    pub soft_delimiter: String,
    pub output_suffix: String,
    pub length_unit: LengthUnit,
    pub costs: CostConfig,
}

/// How the length of a region is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LengthUnit {
    Codepoints,
    Bytes,
}

/// Parameters of the Gale-Church length model.
///
/// Penalties are `-100 * log(P(shape) / P(1-1))` for the named match shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CostConfig {
    pub chars_per_char: f64,
    pub variance_per_char: f64,
    pub penalty_2_1: i64,
    pub penalty_2_2: i64,
    pub penalty_0_1: i64,
    pub big_distance: i64,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            comment_marker: "#".to_string(),
            paragraph_marker: ".PARA".to_string(),
            sentence_marker: ".End of Sentence".to_string(),
            output_suffix: ".out".to_string(),
            on_error: ErrorPolicy::Abort,
        }
    }
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            hard_delimiter: ".PARA".to_string(),
            soft_delimiter: ".End of Sentence".to_string(),
            output_suffix: ".al".to_string(),
            length_unit: LengthUnit::Codepoints,
            costs: CostConfig::default(),
        }
    }
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            chars_per_char: 1.0,
            variance_per_char: 6.8,
            penalty_2_1: 230,
            penalty_2_2: 440,
            penalty_0_1: 450,
            big_distance: 2500,
        }
    }
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
    pub fn build(self) -> Result<GalignConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<GalignConfig, ConfigError> {
    Loader::new().build()
}

/// Defaults, then `galign.toml` from the working directory if present, then
/// `explicit` (which must exist) when given.
pub fn load(explicit: Option<&Path>) -> Result<GalignConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = explicit {
        loader = loader.with_file(path);
    }
    loader.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_defaults_match_builtin_values() {
        let config = load_defaults().expect("defaults to deserialize");
        let builtin = GalignConfig::default();
        assert_eq!(config.prep, builtin.prep);
        assert_eq!(config.align, builtin.align);
    }

    #[test]
    fn loads_default_markers() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.prep.paragraph_marker, ".PARA");
        assert_eq!(config.prep.sentence_marker, ".End of Sentence");
        assert_eq!(config.prep.on_error, ErrorPolicy::Abort);
        assert_eq!(config.align.length_unit, LengthUnit::Codepoints);
        assert_eq!(config.align.costs.penalty_0_1, 450);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("prep.on_error", "skip")
            .expect("override to apply")
            .set_override("align.length_unit", "bytes")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.prep.on_error, ErrorPolicy::Skip);
        assert_eq!(config.align.length_unit, LengthUnit::Bytes);
    }

    #[test]
    fn user_file_overrides_only_given_keys() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[prep]\noutput_suffix = \".tok\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.prep.output_suffix, ".tok");
        assert_eq!(config.prep.comment_marker, "#");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = Loader::new()
            .with_optional_file(dir.path().join("absent.toml"))
            .build()
            .expect("config to build");
        assert_eq!(config.align.output_suffix, ".al");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = Loader::new()
            .with_file(dir.path().join("absent.toml"))
            .build();
        assert!(result.is_err());
    }
}
