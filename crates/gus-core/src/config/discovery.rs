//! Configuration discovery and resolution

use super::types::{Config, OutputFormat};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Environment variable naming the gh executable
pub const GH_PATH_ENV: &str = "GH_USER_STATUS_GH";

/// Environment variable selecting the output format
pub const FORMAT_ENV: &str = "GH_USER_STATUS_FORMAT";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Command-line overrides for configuration
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub gh_path: Option<String>,
    pub format: Option<OutputFormat>,
}

/// Location of the config file under `home_dir`
pub fn config_path(home_dir: &Path) -> PathBuf {
    home_dir.join(".config/gh-user-status/config.toml")
}

/// Resolve configuration from all sources
///
/// Priority (highest to lowest):
/// 1. Command-line overrides
/// 2. Environment variables
/// 3. Config file (`~/.config/gh-user-status/config.toml`)
/// 4. Defaults
///
/// A config file that fails to parse is reported and skipped.
pub fn resolve_config(overrides: &ConfigOverrides, home_dir: &Path) -> Config {
    let mut config = Config::default();

    let path = config_path(home_dir);
    if path.exists() {
        match load_config_file(&path) {
            Ok(file_config) => config = file_config,
            Err(e) => warn!("Failed to parse config at {path:?}: {e}"),
        }
    }

    apply_env_overrides(&mut config);
    apply_cli_overrides(&mut config, overrides);

    config
}

/// Load config from a TOML file
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(gh) = std::env::var(GH_PATH_ENV) {
        if !gh.trim().is_empty() {
            config.core.gh_path = Some(gh.trim().to_string());
        }
    }

    if let Ok(format) = std::env::var(FORMAT_ENV) {
        match format.parse::<OutputFormat>() {
            Ok(format) => config.display.format = format,
            Err(e) => warn!("Ignoring {FORMAT_ENV}: {e}"),
        }
    }
}

fn apply_cli_overrides(config: &mut Config, overrides: &ConfigOverrides) {
    if let Some(ref gh_path) = overrides.gh_path {
        config.core.gh_path = Some(gh_path.clone());
    }

    if let Some(format) = overrides.format {
        config.display.format = format;
    }
}
