//! User preference persistence for Opn Docs.
//!
//! A tiny JSON-backed store that records the reader's preferred theme.
//! Portal selections (page, language, API version, rating) are session state
//! and never land here. The file lives in the standard
//! configuration directory (`~/.config/opn-docs/preferences.json` on most
//! platforms) and is safe to read/write from multiple threads thanks to the
//! internal `Mutex`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::path_processing::{app_config_dir, path_from_env};

/// Environment variable allowing callers to override the preferences file path.
pub const PREFERENCES_PATH_ENV: &str = "OPN_DOCS_PREFERENCES_PATH";

/// Default filename for the JSON payload.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Error surfaced when reading or writing preferences fails.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("preferences I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("preferences serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted preference values.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesPayload {
    /// Canonical identifier of the theme selected via the TUI.
    #[serde(default)]
    pub preferred_theme: Option<String>,
}

/// Thread-safe preferences store backed by a JSON file.
#[derive(Debug, Default)]
pub struct UserPreferences {
    path: PathBuf,
    payload: Mutex<PreferencesPayload>,
    persist_to_disk: bool,
}

impl UserPreferences {
    /// Opens the store at `$OPN_DOCS_PREFERENCES_PATH`, or the default config
    /// directory path when the variable is unset.
    pub fn new() -> Result<Self, PreferencesError> {
        Self::with_path(default_preferences_path())
    }

    /// Opens the store at an explicit path. A missing file yields defaults.
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self, PreferencesError> {
        let path = path.into();
        let payload = load_payload(&path)?;
        Ok(Self {
            path,
            payload: Mutex::new(payload),
            persist_to_disk: true,
        })
    }

    /// Build an in-memory store used as a fallback when the config directory cannot be accessed.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            payload: Mutex::new(PreferencesPayload::default()),
            persist_to_disk: false,
        }
    }

    /// Path to the underlying JSON file. Empty for ephemeral stores.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the canonical identifier of the preferred theme, if one was saved.
    pub fn preferred_theme(&self) -> Option<String> {
        self.lock().preferred_theme.clone()
    }

    /// Persist a new preferred theme identifier.
    pub fn set_preferred_theme(&self, theme_id: Option<String>) -> Result<(), PreferencesError> {
        self.update(|payload| payload.preferred_theme = theme_id)
    }

    /// Copy of the current payload.
    pub fn snapshot(&self) -> PreferencesPayload {
        self.lock().clone()
    }

    fn update(&self, apply: impl FnOnce(&mut PreferencesPayload)) -> Result<(), PreferencesError> {
        let mut payload = self.lock();
        apply(&mut payload);
        if self.persist_to_disk {
            self.save_locked(&payload)?;
        }
        Ok(())
    }

    // A writer that panicked mid-update leaves a payload that is still valid
    // JSON-wise, so keep using it.
    fn lock(&self) -> MutexGuard<'_, PreferencesPayload> {
        self.payload.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn save_locked(&self, payload: &PreferencesPayload) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(payload)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

fn default_preferences_path() -> PathBuf {
    path_from_env(PREFERENCES_PATH_ENV).unwrap_or_else(|| app_config_dir().join(PREFERENCES_FILE_NAME))
}

fn load_payload(path: &Path) -> Result<PreferencesPayload, PreferencesError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse preferences file; using defaults"
                );
                Ok(PreferencesPayload::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(PreferencesPayload::default()),
        Err(error) => Err(PreferencesError::Io(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let preferences = UserPreferences::with_path(dir.path().join("nested").join(PREFERENCES_FILE_NAME)).unwrap();
        assert_eq!(preferences.snapshot(), PreferencesPayload::default());
    }

    #[test]
    fn setters_persist_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(PREFERENCES_FILE_NAME);
        let preferences = UserPreferences::with_path(&path).unwrap();
        preferences.set_preferred_theme(Some("nord".into())).unwrap();
        assert!(path.exists());

        let reloaded = UserPreferences::with_path(&path).unwrap();
        assert_eq!(reloaded.preferred_theme().as_deref(), Some("nord"));
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();
        let preferences = UserPreferences::with_path(&path).unwrap();
        assert_eq!(preferences.preferred_theme(), None);
    }

    #[test]
    fn stale_selection_fields_are_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE_NAME);
        fs::write(&path, r#"{"preferred_theme":"dracula","language":"Japanese","api_version":"v3.0"}"#).unwrap();
        let preferences = UserPreferences::with_path(&path).unwrap();
        assert_eq!(preferences.preferred_theme().as_deref(), Some("dracula"));

        preferences.set_preferred_theme(Some("nord".into())).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("language"));
        assert!(!written.contains("api_version"));
    }

    #[test]
    fn ephemeral_store_never_touches_disk() {
        let preferences = UserPreferences::ephemeral();
        preferences.set_preferred_theme(Some("dracula".into())).unwrap();
        assert_eq!(preferences.preferred_theme().as_deref(), Some("dracula"));
        assert_eq!(preferences.path(), Path::new(""));
    }

    #[test]
    fn env_override_selects_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.json");
        temp_env::with_var(PREFERENCES_PATH_ENV, Some(path.to_str().unwrap()), || {
            let preferences = UserPreferences::new().unwrap();
            assert_eq!(preferences.path(), path.as_path());
        });
    }
}
