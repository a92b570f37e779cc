//! Layered configuration: defaults → `moji.toml` (or `--config`) →
//! `MOJI_*` environment → command-line flags.
//!
//! Nested keys use a double underscore in the environment, so
//! `MOJI_LOG__FORMAT=json` sets `log.format`. The bare `MOJI_LOG` and
//! `MOJI_LOG_FORMAT` variables are left to [`moji_log::Config::with_env`].

use std::path::Path;

use anyhow::{Context, Result, ensure};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// File picked up from the working directory when `--config` is absent.
pub const DEFAULT_FILE: &str = "moji.toml";

const ENV_PREFIX: &str = "MOJI_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Policy used by `check` when `--policy` is omitted.
    pub default_policy: String,
    pub output: OutputFormat,
    pub log: moji_log::Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_policy: "name".to_string(),
            output: OutputFormat::Text,
            log: moji_log::Config::quiet(),
        }
    }
}

impl AppConfig {
    /// Loads configuration. An explicit `path` must exist; the default file
    /// is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::figment(path)?
            .extract::<Self>()
            .map(|config| Self {
                log: config.log.with_env(),
                ..config
            })
            .context("invalid configuration")
    }

    fn figment(path: Option<&Path>) -> Result<Figment> {
        let file = match path {
            Some(path) => {
                ensure!(path.is_file(), "config file not found: {}", path.display());
                Toml::file(path)
            }
            None => Toml::file(DEFAULT_FILE),
        };

        Ok(Figment::from(Serialized::defaults(Self::default()))
            .merge(file)
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["LOG", "LOG_FORMAT"]).split("__")))
    }
}
