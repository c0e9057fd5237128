//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`SWHAT_OUTPUT__NO_COLOR`, `SWHAT_OUTPUT__FORMAT`)
//! 3. Config file (`--config FILE`, else [`AppConfig::config_path`] if present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left at `auto`.
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration from file and environment on top of the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with_env(config_file, "SWHAT")
    }

    fn load_with_env(config_file: Option<&Path>, env_prefix: &str) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();

        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::from(Self::config_path()).required(false)),
        };

        builder = builder.add_source(
            config::Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .context("Failed to load configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `swhat.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "swhat")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("swhat.toml"))
    }
}
