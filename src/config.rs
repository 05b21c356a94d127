//! Configuration module for staffdir
//!
//! Manages search tunables and the default roster path. Configuration
//! is stored as TOML in the user's config directory.

use crate::search::debounce::DEFAULT_DEBOUNCE;
use crate::search::query::MIN_QUERY_CHARS;
use crate::surface::ViewMode;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

fn default_debounce_ms() -> u64 {
    // Duration::as_millis returns u128
    u64::try_from(DEFAULT_DEBOUNCE.as_millis()).unwrap_or(600)
}

const fn default_min_query_chars() -> usize {
    MIN_QUERY_CHARS
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StaffdirConfig {
    /// Delay in milliseconds before a paused query is applied
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Minimum query length before filtering kicks in
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,

    /// View mode selected on startup
    #[serde(default)]
    pub default_view: ViewMode,

    /// Roster file used when none is given on the command line
    #[serde(default)]
    pub roster: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for StaffdirConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_chars: default_min_query_chars(),
            default_view: ViewMode::default(),
            roster: None,
            quiet: false,
        }
    }
}

impl StaffdirConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("staffdir").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// The configured debounce delay as a `Duration`
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StaffdirConfig::default();
        assert_eq!(config.debounce_ms, 600);
        assert_eq!(config.min_query_chars, 3);
        assert_eq!(config.default_view, ViewMode::Grid);
        assert!(config.roster.is_none());
        assert!(!config.quiet);
    }

    #[test]
    fn test_debounce_duration() {
        let config = StaffdirConfig {
            debounce_ms: 250,
            ..StaffdirConfig::default()
        };
        assert_eq!(config.debounce(), Duration::from_millis(250));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = StaffdirConfig {
            debounce_ms: 300,
            min_query_chars: 2,
            default_view: ViewMode::Table,
            roster: Some(PathBuf::from("/tmp/roster.json")),
            quiet: true,
        };

        let toml_string = toml::to_string_pretty(&config).unwrap();
        let parsed: StaffdirConfig = toml::from_str(&toml_string).unwrap();
        assert_eq!(parsed.debounce_ms, 300);
        assert_eq!(parsed.min_query_chars, 2);
        assert_eq!(parsed.default_view, ViewMode::Table);
        assert_eq!(parsed.roster, Some(PathBuf::from("/tmp/roster.json")));
        assert!(parsed.quiet);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let parsed: StaffdirConfig = toml::from_str("quiet = true").unwrap();
        assert!(parsed.quiet);
        assert_eq!(parsed.debounce_ms, 600);
        assert_eq!(parsed.min_query_chars, 3);
    }
}
