//! Persistent CLI Configuration Loader
//!
//! This module provides platform-aware configuration file loading for the
//! gratuity CLI. Configuration is loaded from `~/.config/gratuity/config.toml`
//! on Linux/macOS or `%APPDATA%\gratuity\config.toml` on Windows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

/// CLI Configuration structure loaded from TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CliConfig {
    /// Default locale code (e.g., "en-US", "de-DE", "ja-JP").
    pub locale: Option<String>,
    /// Tip percentage prefilled in the TUI.
    pub default_tip_percent: Option<Decimal>,
    /// Round-up toggle state on startup.
    pub round_up: Option<bool>,
    /// Enable file logging by default.
    pub enable_logging: Option<bool>,
}

impl CliConfig {
    /// Returns the platform-specific configuration directory.
    /// - Linux: ~/.config/gratuity/
    /// - macOS: ~/Library/Application Support/gratuity/
    /// - Windows: %APPDATA%\gratuity\
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gratuity"))
    }

    /// Returns the full path to the config file.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Attempts to load configuration from the default config file location.
    /// Returns `CliConfig::default()` if the file doesn't exist or fails to parse.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            debug!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            debug!("No config file found at {:?}", path);
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<CliConfig>(&content) {
                Ok(config) => {
                    debug!("Loaded configuration from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse config file {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Saves the current configuration to the default config file location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let path = Self::config_path().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        std::fs::write(&path, content)?;
        debug!("Saved configuration to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_config_default() {
        let config = CliConfig::default();
        assert!(config.locale.is_none());
        assert!(config.default_tip_percent.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = CliConfig {
            locale: Some("de-DE".to_string()),
            default_tip_percent: Some(dec!(15)),
            ..Default::default()
        };
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("default-tip-percent"));
        assert!(toml_str.contains("de-DE"));
    }

    #[test]
    fn test_config_parse_kebab_case() {
        let config: CliConfig = toml::from_str(
            r#"
            locale = "ja-JP"
            default-tip-percent = "18"
            round-up = true
            "#,
        )
        .unwrap();
        assert_eq!(config.locale.as_deref(), Some("ja-JP"));
        assert_eq!(config.default_tip_percent, Some(dec!(18)));
        assert_eq!(config.round_up, Some(true));
    }
}
