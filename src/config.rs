use anyhow::{Context, Result};
use crate::listener::Visibility;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "purge";
const CONFIG_FILE: &str = "config.toml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub notification: NotificationConfig,
    pub logging: LoggingConfig,
}

/// Constants passed to `update_views` before a removal starts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NotificationConfig {
    pub message_key: String,
    pub text_visibility: Visibility,
    pub progress_visibility: Visibility,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            message_key: "rm_old".to_string(),
            text_visibility: Visibility::Visible,
            progress_visibility: Visibility::Visible,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Loads `explicit_path` if given (it must exist), otherwise the default
/// location, falling back to defaults when that file is absent.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config> {
    load_config_from(explicit_path, default_config_path())
}

pub fn load_config_from(
    explicit_path: Option<&Path>,
    default_path: Option<PathBuf>,
) -> Result<Config> {
    match explicit_path {
        Some(path) => read_config(path),
        None => match default_path {
            Some(path) if path.exists() => read_config(&path),
            _ => Ok(Config::default()),
        },
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
