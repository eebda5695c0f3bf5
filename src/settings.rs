//! Optional TOML settings.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Top-level settings. Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Diagnostic log settings.
    logging: LoggingSettings,

    /// Connect-four presentation settings.
    connect_four: ConnectFourSettings,
}

/// Diagnostic log settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

/// Connect-four presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectFourSettings {
    /// List the open positions in every move prompt.
    show_available_positions: bool,
}

impl Default for ConnectFourSettings {
    fn default() -> Self {
        Self {
            show_available_positions: true,
        }
    }
}

fn default_filter() -> String {
    "warn".to_string()
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Loads from `path` if one is given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
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
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
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
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.logging().filter(), "warn");
        assert!(*settings.connect_four().show_available_positions());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[connect_four]
show_available_positions = false
"#,
        )
        .unwrap();
        assert!(!*settings.connect_four().show_available_positions());
        assert_eq!(settings.logging().filter(), "warn");
    }

    #[test]
    fn test_load_without_path_is_default() {
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid_games.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "[logging]\nfilter = \"grid_games=debug\"").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.logging().filter(), "grid_games=debug");
        assert!(*settings.connect_four().show_available_positions());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.starts_with("Failed to read"));
        assert!(err.to_string().contains("settings.rs"));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[connect_four]\nshow_available_positions = \"sometimes\"").unwrap();
        let err = Settings::from_file(&path).unwrap_err();
        assert!(err.message.starts_with("Failed to parse settings"));
    }
}
