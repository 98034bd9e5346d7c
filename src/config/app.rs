// src/config/app.rs
use super::defaults::*;
use crate::consts::DEFAULT_CONFIG_FILE;
use crate::enums::Mode;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_cipher")]
    pub cipher: CipherSection,
    #[serde(default = "default_output")]
    pub output: OutputSection,
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherSection {
    #[serde(default = "default_shift")]
    pub shift: i64,
    #[serde(default)]
    pub mode: Mode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub show_alphabet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Path of the config file: `CAESAR_CONFIG`, else `caesar.toml`
pub fn config_path() -> PathBuf {
    std::env::var_os("CAESAR_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Parse a config file. Missing sections and fields take their defaults.
pub fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(toml::from_str(&content)?)
}

/// Apply `CAESAR_SHIFT` / `CAESAR_MODE` overrides read through `lookup`
///
/// Values that don't parse are skipped with a warning.
pub fn apply_env_overrides<F>(mut conf: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup("CAESAR_SHIFT") {
        match raw.trim().parse::<i64>() {
            Ok(shift) => conf.cipher.shift = shift,
            Err(_) => warn!("Ignoring CAESAR_SHIFT={raw:?}: not an integer"),
        }
    }

    if let Some(raw) = lookup("CAESAR_MODE") {
        match raw.parse::<Mode>() {
            Ok(mode) => conf.cipher.mode = mode,
            Err(err) => warn!("Ignoring CAESAR_MODE: {err}"),
        }
    }

    conf
}

/// Global config, loaded on first use. Never fails: any problem falls back to defaults.
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let path = config_path();

        let conf = if path.exists() {
            match load_from(&path) {
                Ok(conf) => {
                    debug!("Loaded config from {}", path.display());
                    conf
                }
                Err(err) => {
                    warn!("{} unusable ({err}), using built-in defaults", path.display());
                    default_config()
                }
            }
        } else {
            debug!("{} not found, using built-in defaults", path.display());
            default_config()
        };

        apply_env_overrides(conf, |key| std::env::var(key).ok())
    })
}
