//! User-configurable settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "timeline_games.toml";

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// File the terminal UI writes its log to.
    file: PathBuf,
    /// Default `EnvFilter` directive; `RUST_LOG` overrides it.
    filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from("timeline_games.log"),
            filter: "info".to_string(),
        }
    }
}

/// Display settings for the terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Show the 1-9 key for empty cells.
    show_hints: bool,
    /// Show the move history pane.
    show_history: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_hints: true,
            show_history: true,
        }
    }
}

/// All settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Logging section.
    log: LogSettings,
    /// Display section.
    display: DisplaySettings,
}

impl Settings {
    /// Parses settings from TOML text. Missing keys take their defaults.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let settings = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(settings)
    }

    /// Resolves settings for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present, and defaults are used otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns a copy with the history pane toggled.
    pub fn with_history_shown(mut self, shown: bool) -> Self {
        self.display.show_history = shown;
        self
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

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_sections() {
        let settings = Settings::from_toml(
            r#"
            [display]
            show_hints = false
            "#,
        )
        .unwrap();
        assert!(!*settings.display().show_hints());
        assert!(*settings.display().show_history());
        assert_eq!(settings.log().filter(), "info");
    }

    #[test]
    fn test_bad_toml_reports_location() {
        let err = Settings::from_toml("[log\nfile = 3").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("settings.rs"));
    }
}
