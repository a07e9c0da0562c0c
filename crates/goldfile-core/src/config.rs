//! Configuration types for goldfile.
//!
//! [`GoldenConfig::load`] layers three sources: the embedded defaults, an
//! optional `goldfile.toml` in the current working directory, and
//! `GOLDFILE_*` environment variables. [`GoldenConfig::defaults`] returns the
//! embedded defaults without touching the filesystem (useful in tests).
//!
//! Update mode is the usual reason to touch this:
//!
//! ```sh
//! GOLDFILE_UPDATE=1 cargo test
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::diff::DiffGranularity;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
update = false

[diff]
granularity = "line"
"#;

/// File name looked up in the working directory by [`GoldenConfig::load`].
pub const CONFIG_FILE_NAME: &str = "goldfile.toml";

/// Prefix of the environment variables layered on top of the config file.
pub const ENV_PREFIX: &str = "GOLDFILE";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level goldfile configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenConfig {
    /// Rewrite golden files from the actual output before comparing.
    #[serde(default)]
    pub update: bool,
    /// Base directory for relative golden file paths. Relative paths resolve
    /// against the working directory when unset.
    #[serde(default)]
    pub root: Option<PathBuf>,
    #[serde(default)]
    pub diff: DiffConfig,
}

/// `[diff]` section of `goldfile.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiffConfig {
    #[serde(default)]
    pub granularity: DiffGranularity,
}

impl Default for GoldenConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl GoldenConfig {
    /// Load from `./goldfile.toml` (if present) and `GOLDFILE_*` environment
    /// variables, layered on top of the built-in defaults.
    pub fn load() -> Result<Self> {
        Self::build(Some(Path::new(CONFIG_FILE_NAME)), None)
    }

    /// Load from an explicit file, which must exist, plus the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .add_source(environment(None))
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }

    /// Layer an optional file and an explicit variable map instead of the
    /// process environment. Keys in `env` carry the `GOLDFILE_` prefix.
    pub fn load_with_env(file: Option<&Path>, env: HashMap<String, String>) -> Result<Self> {
        Self::build(file, Some(env))
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

    /// Resolve a golden file path against [`GoldenConfig::root`].
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    fn build(file: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
        if let Some(file) = file {
            builder = builder.add_source(config::File::from(file).required(false));
        }
        let cfg = builder
            .add_source(environment(env))
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }
}

// ---------------------------------------------------------------------------
// Environment helpers
// ---------------------------------------------------------------------------

fn environment(source: Option<HashMap<String, String>>) -> config::Environment {
    let env = config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true);
    match source {
        Some(vars) => env.source(Some(vars.into_iter().collect())),
        None => env,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
