//! Configuration file support for vibe-cc
//!
//! Configuration is stored in TOML format at:
//! - Linux: `~/.config/vibe-cc/config.toml`
//! - macOS: `~/Library/Application Support/vibe-cc/config.toml`
//! - Windows: `%APPDATA%\vibe-cc\config.toml`
//!
//! The file holds labels for device-specific controllers. Labels are for
//! display only and never change the General MIDI name of a controller.

use crate::controller::Controller;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// User labels for controllers
    pub labels: Vec<ControllerLabel>,
}

/// A user-defined label for one controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerLabel {
    /// Controller number (0-127)
    pub controller: Controller,
    /// Display name
    pub name: String,
}

impl Config {
    /// Load configuration from the default config file location
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Err(Error::Config(format!("Config file not found at {:?}", path)))
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        log::debug!("Loaded {} controller labels from {}", config.labels.len(), path.display());
        config.warn_duplicates();
        Ok(config)
    }

    /// Load configuration, or the default if the config file does not exist
    ///
    /// A file that exists but fails to read or parse is an error.
    pub fn load_or_default() -> Result<Self> {
        Self::load_or_default_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, or the default if it does not exist
    pub fn load_or_default_from(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path
    pub fn config_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "vibe-cc") {
            Ok(proj_dirs.config_dir().join("config.toml"))
        } else {
            Err(Error::Config("Could not determine config directory".to_string()))
        }
    }

    /// Create a default config file with comments
    pub fn create_default_config_file() -> Result<PathBuf> {
        let path = Self::config_path()?;
        Self::write_default_config(&path)?;
        Ok(path)
    }

    fn write_default_config(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = r#"# vibe-cc configuration file
# https://github.com/trusch/vibelang

# Labels for controllers your devices use outside General MIDI.
# They are shown next to the General MIDI name, never instead of it.
#
# [[labels]]
# controller = 74
# name = "Filter cutoff"
#
# [[labels]]
# controller = 2
# name = "Breath"
"#;

        fs::write(path, content)?;
        Ok(())
    }

    /// The user label for a controller; the first entry wins
    pub fn label(&self, controller: Controller) -> Option<&str> {
        self.labels
            .iter()
            .find(|l| l.controller == controller)
            .map(|l| l.name.as_str())
    }

    /// User label if present, otherwise the resolved controller name
    pub fn describe(&self, controller: Controller) -> &str {
        self.label(controller).unwrap_or_else(|| controller.name())
    }

    fn warn_duplicates(&self) {
        let mut seen = HashSet::new();
        for label in &self.labels {
            if !seen.insert(label.controller) {
                log::warn!("Duplicate label for {}, keeping the first one", label.controller);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::{name, OTHER_CONTROL};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.labels.is_empty());
        assert_eq!(config.describe(Controller::SUSTAIN_PEDAL), "Sustain pedal");
    }

    #[test]
    fn test_parse_labels() {
        let config: Config = toml::from_str(
            r#"
[[labels]]
controller = 74
name = "Filter cutoff"

[[labels]]
controller = 2
name = "Breath"
"#,
        )
        .unwrap();
        assert_eq!(config.label(Controller::cc(74)), Some("Filter cutoff"));
        assert_eq!(config.describe(Controller::cc(2)), "Breath");
        assert_eq!(config.describe(Controller::cc(3)), OTHER_CONTROL);
    }

    #[test]
    fn test_labels_do_not_change_names() {
        let config: Config = toml::from_str("[[labels]]\ncontroller = 64\nname = \"Damper\"\n").unwrap();
        assert_eq!(config.describe(Controller::SUSTAIN_PEDAL), "Damper");
        assert_eq!(name(64), Ok("Sustain pedal"));
    }

    #[test]
    fn test_rejects_out_of_range_controller() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[[labels]]\ncontroller = 128\nname = \"Nope\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let config: Config = toml::from_str(
            "[[labels]]\ncontroller = 5\nname = \"A\"\n\n[[labels]]\ncontroller = 5\nname = \"B\"\n",
        )
        .unwrap();
        assert_eq!(config.label(Controller::cc(5)), Some("A"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            labels: vec![ControllerLabel {
                controller: Controller::cc(74),
                name: "Filter cutoff".to_string(),
            }],
        };
        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.labels, config.labels);
    }

    #[test]
    fn test_default_file_parses_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config::write_default_config(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.labels.is_empty());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default_from(&dir.path().join("config.toml")).unwrap();
        assert!(config.labels.is_empty());
    }

    #[test]
    fn test_load_or_default_reports_bad_controller() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[[labels]]\ncontroller = 74\nname = \"Cutoff\"\n\n[[labels]]\ncontroller = 200\nname = \"Bad\"\n",
        )
        .unwrap();
        let err = Config::load_or_default_from(&path).unwrap_err();
        assert!(matches!(err, Error::TomlParse(_)));
        assert!(err.to_string().contains("controller number 200 out of range"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
