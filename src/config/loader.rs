//! Configuration file discovery and loading.
//!
//! Settings are layered, later sources overriding earlier ones:
//! 1. Built-in defaults
//! 2. Config file (`~/.turtleshop/config.yml`, or `--config PATH`)
//! 3. Environment (`TURTLESHOP_API_URL`, `TURTLESHOP_DATA_DIR`)
//! 4. Command-line flags

use crate::config::schema::ShopConfig;
use crate::error::{Result, ShopError};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding `api_url`.
pub const ENV_API_URL: &str = "TURTLESHOP_API_URL";

/// Environment variable overriding `data_dir`.
pub const ENV_DATA_DIR: &str = "TURTLESHOP_DATA_DIR";

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_url: Option<String>,
    pub data_dir: Option<PathBuf>,
}

/// Find the user's config at ~/.turtleshop/config.yml
pub fn user_config_path() -> Option<PathBuf> {
    let path = dirs::home_dir()?.join(".turtleshop").join("config.yml");
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Parse YAML content into ShopConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ShopConfig> {
    if content.trim().is_empty() {
        return Ok(ShopConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ShopError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
///
/// A missing file is `Ok(None)`; an unreadable or invalid one is an error.
pub fn load_config_file(path: &Path) -> Result<Option<ShopConfig>> {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content, path).map(Some),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ShopError::Io(e)),
    }
}

/// Apply environment overrides read through `lookup`.
pub fn apply_env(config: &mut ShopConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.is_empty()) {
        config.api_url = url;
    }
    if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.is_empty()) {
        config.data_dir = Some(PathBuf::from(dir));
    }
}

/// Apply command-line overrides.
pub fn apply_overrides(config: &mut ShopConfig, overrides: &ConfigOverrides) {
    if let Some(url) = &overrides.api_url {
        config.api_url = url.clone();
    }
    if let Some(dir) = &overrides.data_dir {
        config.data_dir = Some(dir.clone());
    }
}

/// Load the effective configuration.
///
/// If `config_override` is provided it replaces the user config file.
pub fn load_config(
    config_override: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<ShopConfig> {
    let path = match config_override {
        Some(path) => Some(path.to_path_buf()),
        None => user_config_path(),
    };

    let mut config = match path {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)?.unwrap_or_default()
        }
        None => ShopConfig::default(),
    };

    apply_env(&mut config, |key| std::env::var(key).ok());
    apply_overrides(&mut config, overrides);

    Ok(config)
}
