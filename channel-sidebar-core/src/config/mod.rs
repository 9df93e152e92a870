//! Configuration management for the channel sidebar
//!
//! Defaults can be overridden from a TOML file or from environment
//! variables named `CHANNEL_SIDEBAR_<SECTION>_<KEY>`.

use crate::logging::{LogConfig, LogLevel};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

mod error;

pub use error::ConfigError;

/// Prefix shared by every environment override
pub const ENV_PREFIX: &str = "CHANNEL_SIDEBAR";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Sidebar presentation
    pub sidebar: SidebarConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON formatting
    pub json_format: bool,

    /// Include timestamps
    pub with_timestamp: bool,

    /// Include target module
    pub with_target: bool,
}

/// Text and links of the channel sidebar section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Section heading
    pub heading: String,

    /// Tooltip of the owner's manage affordance
    pub manage_tooltip: String,

    /// Icon glyph of the manage affordance
    pub manage_glyph: String,

    /// Path segment under `/<community-slug>/` the affordance links to
    pub settings_path: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            with_timestamp: true,
            with_target: true,
        }
    }
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            heading: "Channels".to_string(),
            manage_tooltip: "Manage channels".to_string(),
            manage_glyph: "settings".to_string(),
            settings_path: "settings".to_string(),
        }
    }
}

impl SidebarConfig {
    /// Link target of the manage affordance for a community
    pub fn settings_href(&self, community_slug: &str) -> String {
        format!("/{}/{}", community_slug, self.settings_path.trim_matches('/'))
    }
}

impl LoggingConfig {
    /// Logging subsystem settings; call after `Config::validate`
    pub fn log_config(&self) -> LogConfig {
        LogConfig::new(LogLevel::from_str(&self.level).unwrap_or_default())
            .with_timestamp(self.with_timestamp)
            .with_target(self.with_target)
            .json_format(self.json_format)
    }
}

fn parse_flag(key: &str, value: String) -> Result<bool, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        })
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Example: `CHANNEL_SIDEBAR_LOG_LEVEL=debug`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, applying the same
    /// overrides as [`Config::from_env`]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| {
            let key = format!("{}_{}", ENV_PREFIX, suffix);
            lookup(&key).map(|value| (key, value))
        };

        // Logging config
        if let Some((_, level)) = var("LOG_LEVEL") {
            self.logging.level = level.to_lowercase();
        }
        if let Some((key, json)) = var("LOG_JSON") {
            self.logging.json_format = parse_flag(&key, json)?;
        }
        if let Some((key, timestamps)) = var("LOG_TIMESTAMPS") {
            self.logging.with_timestamp = parse_flag(&key, timestamps)?;
        }
        if let Some((key, target)) = var("LOG_TARGET") {
            self.logging.with_target = parse_flag(&key, target)?;
        }

        // Sidebar config
        if let Some((_, heading)) = var("SIDEBAR_HEADING") {
            self.sidebar.heading = heading;
        }
        if let Some((_, tooltip)) = var("SIDEBAR_MANAGE_TOOLTIP") {
            self.sidebar.manage_tooltip = tooltip;
        }
        if let Some((_, glyph)) = var("SIDEBAR_MANAGE_GLYPH") {
            self.sidebar.manage_glyph = glyph;
        }
        if let Some((_, path)) = var("SIDEBAR_SETTINGS_PATH") {
            self.sidebar.settings_path = path;
        }

        Ok(())
    }

    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: PathBuf::from(path),
            source,
        })?;

        let config: Self = toml::from_str(&contents)?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if LogLevel::from_str(&self.logging.level).is_none() {
            return Err(ConfigError::ValidationFailed(format!(
                "Invalid log level: {}",
                self.logging.level
            )));
        }

        if self.sidebar.heading.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "sidebar heading must not be empty".to_string(),
            ));
        }

        if self.sidebar.settings_path.trim_matches('/').is_empty() {
            return Err(ConfigError::ValidationFailed(
                "sidebar settings_path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = toml::to_string_pretty(self)?;

        std::fs::write(path, contents).map_err(|source| ConfigError::FileWrite {
            path: PathBuf::from(path),
            source,
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sidebar.heading, "Channels");
        assert_eq!(config.sidebar.settings_href("spectrum"), "/spectrum/settings");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.logging.level = "invalid".to_string();
        assert!(config.validate().is_err());

        config = Config::default();
        config.sidebar.heading = "  ".to_string();
        assert!(config.validate().is_err());

        config = Config::default();
        config.sidebar.settings_path = "/".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = Config::from_lookup(lookup(&[
            ("CHANNEL_SIDEBAR_LOG_LEVEL", "DEBUG"),
            ("CHANNEL_SIDEBAR_LOG_JSON", "true"),
            ("CHANNEL_SIDEBAR_SIDEBAR_HEADING", "Rooms"),
            ("CHANNEL_SIDEBAR_SIDEBAR_SETTINGS_PATH", "/admin/"),
        ]))
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json_format);
        assert_eq!(config.sidebar.heading, "Rooms");
        assert_eq!(config.sidebar.settings_href("rust"), "/rust/admin");
    }

    #[test]
    fn test_every_field_has_an_override() {
        let config = Config::from_lookup(lookup(&[
            ("CHANNEL_SIDEBAR_LOG_TIMESTAMPS", "false"),
            ("CHANNEL_SIDEBAR_LOG_TARGET", "false"),
            ("CHANNEL_SIDEBAR_SIDEBAR_MANAGE_TOOLTIP", "Edit channels"),
            ("CHANNEL_SIDEBAR_SIDEBAR_MANAGE_GLYPH", "gear"),
        ]))
        .unwrap();

        assert!(!config.logging.with_timestamp);
        assert!(!config.logging.with_target);
        assert_eq!(config.sidebar.manage_tooltip, "Edit channels");
        assert_eq!(config.sidebar.manage_glyph, "gear");

        let err = Config::from_lookup(lookup(&[("CHANNEL_SIDEBAR_LOG_TARGET", "no")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref key, .. } if key == "CHANNEL_SIDEBAR_LOG_TARGET"
        ));
    }

    #[test]
    fn test_invalid_flag_override() {
        let err = Config::from_lookup(lookup(&[("CHANNEL_SIDEBAR_LOG_JSON", "yes")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref key, .. } if key == "CHANNEL_SIDEBAR_LOG_JSON"
        ));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sidebar.toml");

        let mut config = Config::default();
        config.sidebar.manage_tooltip = "Edit channels".to_string();
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sidebar.toml");
        std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.sidebar, SidebarConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/nonexistent/sidebar.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_log_config_conversion() {
        let mut config = LoggingConfig::default();
        config.level = "trace".to_string();
        config.json_format = true;

        let log_config = config.log_config();
        assert_eq!(log_config.level, LogLevel::Trace);
        assert!(log_config.json_format);
    }
}
