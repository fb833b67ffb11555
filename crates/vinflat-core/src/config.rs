//! Configuration types for vinflat.
//!
//! [`Config::load`] layers, lowest to highest precedence: the embedded
//! defaults, `vinflat.toml` in the working directory (or an explicit file),
//! then `VINFLAT__SECTION__KEY` environment variables. [`Config::defaults`]
//! returns the embedded defaults without touching the filesystem.

use crate::normalizer::IdStrategy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[input]
path = ""

[regions]
output = "regions.json"

[normalize]
strategy = "positional"
pretty   = true
output   = ""
"#;

/// Config file picked up from the working directory when no path is given.
pub const CONFIG_FILE: &str = "vinflat.toml";

const ENV_PREFIX: &str = "VINFLAT";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub regions: RegionsConfig,
    #[serde(default)]
    pub normalize: NormalizeConfig,
}

/// `[input]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputConfig {
    /// JSON table to read instead of the built-in one. Empty means built-in.
    #[serde(default)]
    pub path: String,
}

/// `[regions]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionsConfig {
    #[serde(default = "default_regions_output")]
    pub output: String,
}

fn default_regions_output() -> String { crate::regions::DEFAULT_REGIONS_FILE.to_string() }

impl Default for RegionsConfig {
    fn default() -> Self {
        Self {
            output: default_regions_output(),
        }
    }
}

/// `[normalize]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct NormalizeConfig {
    #[serde(default)]
    pub strategy: IdStrategy,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// File to write the tables to. Empty means stdout.
    #[serde(default)]
    pub output: String,
}

fn default_pretty() -> bool { true }

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            strategy: IdStrategy::default(),
            pretty: default_pretty(),
            output: String::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. An explicit `path` must exist; the
    /// implicit `vinflat.toml` is optional.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::from(Path::new(CONFIG_FILE)).required(false),
        };

        let cfg = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    pub fn input_path(&self) -> Option<PathBuf> {
        non_empty_path(&self.input.path)
    }

    pub fn regions_output(&self) -> PathBuf {
        PathBuf::from(&self.regions.output)
    }

    pub fn normalize_output(&self) -> Option<PathBuf> {
        non_empty_path(&self.normalize.output)
    }
}

fn non_empty_path(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
