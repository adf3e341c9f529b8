//! Application configuration loaded from TOML.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tictactoe_engine::Mode;
use tracing::{debug, info, instrument};

use crate::history::DEFAULT_HISTORY_FILE;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Keys the screens already use for navigation.
const RESERVED_KEYS: [char; 3] = ['q', 'b', ' '];

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON file holding finished games.
    history_path: PathBuf,

    /// File the tracing subscriber writes to.
    log_path: PathBuf,

    /// Key that restarts the game from any screen.
    reset_key: char,

    /// Mode used when reset is pressed before any mode was picked.
    default_mode: Mode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_path: PathBuf::from(DEFAULT_HISTORY_FILE),
            log_path: PathBuf::from("tictactoe.log"),
            reset_key: 'r',
            default_mode: Mode::PvP,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, parsed, or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(history = %config.history_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path`, or defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but is invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Replaces the history file location.
    pub fn with_history_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_path = path.into();
        self
    }

    /// Checks value constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an empty history path or a reset key that
    /// collides with navigation keys.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_path.as_os_str().is_empty() {
            return Err(ConfigError::new("history_path must not be empty"));
        }
        let key = self.reset_key.to_ascii_lowercase();
        if RESERVED_KEYS.contains(&key) || key.is_ascii_digit() || key.is_control() {
            return Err(ConfigError::new(format!(
                "reset_key '{}' is reserved for navigation",
                self.reset_key
            )));
        }
        Ok(())
    }

    /// Renders the defaults as TOML, for writing an example config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if serialization fails.
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&Self::default())
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.history_path(), Path::new("tic_tac_toe_games.json"));
        assert_eq!(*config.reset_key(), 'r');
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("reset_key = \"n\"").unwrap();
        assert_eq!(*config.reset_key(), 'n');
        assert_eq!(*config.default_mode(), Mode::PvP);
        assert_eq!(config.log_path(), Path::new("tictactoe.log"));
    }

    #[test]
    fn test_mode_parses() {
        let config: AppConfig = toml::from_str("default_mode = \"PvAI\"").unwrap();
        assert_eq!(*config.default_mode(), Mode::PvAI);
    }

    #[test]
    fn test_validation_rejects_reserved_reset_key() {
        for key in ['q', 'Q', 'b', '5'] {
            let config: AppConfig = toml::from_str(&format!("reset_key = \"{}\"", key)).unwrap();
            assert!(config.validate().is_err(), "{} should be rejected", key);
        }
    }

    #[test]
    fn test_validation_rejects_empty_history_path() {
        let config = AppConfig::default().with_history_path("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tictactoe.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "history_path = \"games.json\"\ndefault_mode = \"PvAI\"").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.history_path(), Path::new("games.json"));
        assert_eq!(*config.default_mode(), Mode::PvAI);
        assert_eq!(*config.reset_key(), 'r');
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "reset_key = 3").unwrap();
        assert!(AppConfig::load_or_default(&path).is_err());
    }

    #[test]
    fn test_default_toml_round_trips() {
        let text = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
