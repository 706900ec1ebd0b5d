//! Configuration types

use crate::emoji::DEFAULT_EMOJI;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Complete configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Core configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Explicit gh executable; looked up on `PATH` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gh_path: Option<String>,
    /// Emoji alias used by `set` when none is given
    #[serde(default = "default_emoji")]
    pub default_emoji: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            gh_path: None,
            default_emoji: default_emoji(),
        }
    }
}

fn default_emoji() -> String {
    DEFAULT_EMOJI.to_string()
}

/// Display configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text with rendered emoji
    #[default]
    Text,
    /// JSON documents of the decoded values
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}' (expected text or json)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.core.gh_path, None);
        assert_eq!(config.core.default_emoji, "thought_balloon");
        assert_eq!(config.display.format, OutputFormat::Text);
    }

    #[test]
    fn test_config_partial_file() {
        let toml_str = r#"
[core]
gh_path = "/opt/homebrew/bin/gh"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.core.gh_path.as_deref(), Some("/opt/homebrew/bin/gh"));
        assert_eq!(config.core.default_emoji, "thought_balloon");
        assert_eq!(config.display.format, OutputFormat::Text);
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.display.format = OutputFormat::Json;
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.display.format, OutputFormat::Json);
        assert_eq!(deserialized.core.default_emoji, config.core.default_emoji);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" text ".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
