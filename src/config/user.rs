//! User-configurable settings stored in ~/.config/imprint/config.toml

use crate::ui::dialogs::{ButtonLabels, DialogError};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub dialog: DialogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DialogConfig {
    /// Label of the button that dismisses the dialog
    pub cancel_label: String,
    /// Label of the button that accepts the selected file
    pub open_label: String,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            cancel_label: "_Cancel".to_string(),
            open_label: "_Open".to_string(),
        }
    }
}

impl DialogConfig {
    /// Check both labels can be handed to the toolkit.
    pub fn labels(&self) -> Result<ButtonLabels, DialogError> {
        ButtonLabels::new(self.cancel_label.as_str(), self.open_label.as_str())
    }
}

/// Location of the config file, or `None` when neither the XDG config
/// directory nor the home directory is known.
pub fn config_path() -> Option<PathBuf> {
    resolve_config_path(dirs::config_dir(), dirs::home_dir())
}

fn resolve_config_path(config_dir: Option<PathBuf>, home_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .map(|dir| dir.join("imprint").join("config.toml"))
}

impl Config {
    /// Load config from the default location.
    pub fn load() -> Self {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("No config directory found, using defaults");
                Self::default()
            }
        }
    }

    /// Load config from `path`, returning defaults for any missing keys or
    /// if the file does not exist yet.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Self::default();
            }
            Err(e) => {
                warn!("Could not read config {} ({e}), using defaults", path.display());
                return Self::default();
            }
        };

        match toml::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Config parse error in {} ({e}), using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Atomically write config to `path`.
    /// Labels the dialog would reject are never written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.dialog.labels().map_err(ConfigError::InvalidLabels)?;

        // Ensure parent directory exists
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(ConfigError::Io)?;
        }

        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;

        // Write to a temp file alongside the real one
        let tmp_path = path.with_extension("tmp");
        std::fs::write(&tmp_path, &content).map_err(ConfigError::Io)?;

        // Atomic rename
        std::fs::rename(&tmp_path, path).map_err(ConfigError::Io)?;

        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Serialize(toml::ser::Error),
    InvalidLabels(DialogError),
    NoConfigDir,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Serialize(e) => write!(f, "Serialize error: {e}"),
            Self::InvalidLabels(e) => write!(f, "Refusing to save labels: {e}"),
            Self::NoConfigDir => f.write_str("No config directory available"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Serialize(e) => Some(e),
            Self::InvalidLabels(e) => Some(e),
            Self::NoConfigDir => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dialogs::LabelKind;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg: Config = toml::from_str("[dialog]\nopen_label = \"Read\"\n").unwrap();
        assert_eq!(cfg.dialog.open_label, "Read");
        assert_eq!(cfg.dialog.cancel_label, "_Cancel");
    }

    #[test]
    fn empty_document_is_default() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert_eq!(Config::load_from(&dir.path().join("config.toml")), Config::default());
    }

    #[test]
    fn malformed_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[dialog\ncancel_label = ").unwrap();

        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn saved_labels_are_loaded_back() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("config.toml");
        let cfg = Config {
            dialog: DialogConfig {
                cancel_label: "Abbrechen".to_string(),
                open_label: "Öffnen".to_string(),
            },
        };

        cfg.save_to(&path).unwrap();
        assert!(!path.with_extension("tmp").exists());
        assert_eq!(Config::load_from(&path), cfg);
    }

    #[test]
    fn labels_with_nul_are_not_saved() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.dialog.cancel_label = "Can\0cel".to_string();

        let err = cfg.save_to(&path).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidLabels(DialogError::InvalidLabel {
                which: LabelKind::Cancel,
                ..
            })
        ));
        assert!(!path.exists());
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn config_path_falls_back_to_home_dot_config() {
        let home = PathBuf::from("/home/reader");
        assert_eq!(
            resolve_config_path(None, Some(home)),
            Some(PathBuf::from("/home/reader/.config/imprint/config.toml"))
        );
        assert_eq!(
            resolve_config_path(Some(PathBuf::from("/xdg")), Some(PathBuf::from("/home/reader"))),
            Some(PathBuf::from("/xdg/imprint/config.toml"))
        );
        assert_eq!(resolve_config_path(None, None), None);
    }
}
