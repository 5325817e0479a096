//! Persisted app settings (TOML). Only ambient preferences live here; the
//! document corpus itself is never written to disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app settings.
pub const SETTINGS_FILE_NAME: &str = "config.toml";

/// Errors that can occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to resolve the application directory.
    #[error(transparent)]
    AppDir(#[from] app_dirs::AppDirError),
    /// Failed to read the settings file.
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the settings file.
    #[error("Failed to write settings file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The settings file is not valid TOML.
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Settings could not be serialized to TOML.
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// App settings stored in `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Email pre-filled in the landing-page login card.
    #[serde(default)]
    pub remembered_email: Option<String>,
    #[serde(default)]
    pub ui: UiPreferences,
}

/// Cosmetic preferences surfaced in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Show the demo-accounts helper card on the landing page.
    #[serde(default = "default_true")]
    pub show_demo_accounts: bool,
    /// Expand audit history rows in the expert table by default.
    #[serde(default)]
    pub expand_expert_audit: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            show_demo_accounts: true,
            expand_expert_audit: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Resolve the settings file path inside the app directory.
pub fn settings_path() -> Result<PathBuf, SettingsError> {
    Ok(app_dirs::app_root_dir()?.join(SETTINGS_FILE_NAME))
}

/// Load settings from disk, returning defaults if the file is missing.
pub fn load_or_default() -> Result<AppSettings, SettingsError> {
    load_from(&settings_path()?)
}

/// Load settings from a specific path; a missing file yields defaults.
pub fn load_from(path: &Path) -> Result<AppSettings, SettingsError> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Persist settings to disk, overwriting any previous contents.
pub fn save(settings: &AppSettings) -> Result<(), SettingsError> {
    save_to_path(settings, &settings_path()?)
}

/// Save settings to a specific path, creating parent directories as needed.
pub fn save_to_path(settings: &AppSettings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(settings)?;
    std::fs::write(path, text).map_err(|source| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let loaded = load_from(&dir.path().join(SETTINGS_FILE_NAME)).unwrap();
        assert_eq!(loaded, AppSettings::default());
        assert!(loaded.ui.show_demo_accounts);
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE_NAME);
        let settings = AppSettings {
            remembered_email: Some("marie@company.com".into()),
            ui: UiPreferences {
                show_demo_accounts: false,
                expand_expert_audit: true,
            },
        };
        save_to_path(&settings, &path).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn unknown_email_field_is_absent_by_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, "[ui]\nshow_demo_accounts = false\n").unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.remembered_email, None);
        assert!(!loaded.ui.show_demo_accounts);
        assert!(!loaded.ui.expand_expert_audit);
    }

    #[test]
    fn invalid_toml_is_reported_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, "not toml = = =").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }
}
