//! Viewer preferences persisted between runs.
//!
//! A single JSON file under the platform data directory holds the
//! explicitly chosen theme. No file (or no value) means the OS color
//! scheme decides at startup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use folio_ui::Theme;

/// Preferences file name inside the data directory.
const PREFS_FILE: &str = "prefs.json";

/// Errors from writing or clearing the preferences file.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("preferences io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preferences encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// On-disk preferences document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerPrefs {
    /// Explicitly chosen theme, stored as its data-theme value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl ViewerPrefs {
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme: Some(theme.css_value().to_string()),
        }
    }

    /// Parses the stored theme. Unknown values count as no preference.
    pub fn stored_theme(&self) -> Option<Theme> {
        let value = self.theme.as_deref()?;
        let parsed = Theme::from_css_value(value);
        if parsed.is_none() {
            warn!("ignoring unknown stored theme {value:?}");
        }
        parsed
    }
}

/// Default data directory for the viewer.
///
/// `FOLIO_DATA_DIR` overrides the platform location when set.
pub fn default_data_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("FOLIO_DATA_DIR") {
        return Some(PathBuf::from(dir));
    }
    dirs::data_dir().map(|base| base.join("folio-viewer"))
}

/// Path of the preferences file inside `data_dir`.
pub fn prefs_path(data_dir: &Path) -> PathBuf {
    data_dir.join(PREFS_FILE)
}

/// Loads preferences from `data_dir`.
///
/// A missing file yields defaults silently. Any other read failure or
/// a malformed file also yields defaults, with a warning, so a bad
/// write never wedges startup.
pub fn load_prefs(data_dir: &Path) -> ViewerPrefs {
    let path = prefs_path(data_dir);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!("failed to read preferences at {}: {err}", path.display());
            }
            return ViewerPrefs::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(prefs) => prefs,
        Err(err) => {
            warn!("ignoring malformed preferences at {}: {err}", path.display());
            ViewerPrefs::default()
        }
    }
}

/// Saves preferences into `data_dir`, creating the directory if needed.
pub fn save_prefs(data_dir: &Path, prefs: &ViewerPrefs) -> Result<(), PrefsError> {
    fs::create_dir_all(data_dir)?;
    let raw = serde_json::to_string_pretty(prefs)?;
    fs::write(prefs_path(data_dir), raw)?;
    Ok(())
}

/// Removes the preferences file. A missing file is not an error.
pub fn clear_prefs(data_dir: &Path) -> Result<(), PrefsError> {
    match fs::remove_file(prefs_path(data_dir)) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

// Helper module for directory resolution
mod dirs {
    use std::path::PathBuf;

    pub fn data_dir() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join("Library/Application Support"))
        }

        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|home| PathBuf::from(home).join(".local/share"))
                })
        }

        #[cfg(target_os = "windows")]
        {
            std::env::var("APPDATA").ok().map(PathBuf::from)
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = ViewerPrefs::with_theme(Theme::Dark);
        save_prefs(dir.path(), &prefs).unwrap();

        let loaded = load_prefs(dir.path());
        assert_eq!(loaded, prefs);
        assert_eq!(loaded.stored_theme(), Some(Theme::Dark));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_prefs(dir.path()), ViewerPrefs::default());
    }

    #[test]
    fn test_malformed_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(prefs_path(dir.path()), "{not json").unwrap();
        assert_eq!(load_prefs(dir.path()), ViewerPrefs::default());
    }

    #[test]
    fn test_unreadable_prefs_degrade_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the file path fails the read with something
        // other than NotFound.
        fs::create_dir_all(prefs_path(dir.path())).unwrap();
        assert_eq!(load_prefs(dir.path()), ViewerPrefs::default());
    }

    #[test]
    fn test_unknown_theme_counts_as_no_preference() {
        let prefs = ViewerPrefs {
            theme: Some("solarized".to_string()),
        };
        assert_eq!(prefs.stored_theme(), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        clear_prefs(dir.path()).unwrap();

        save_prefs(dir.path(), &ViewerPrefs::with_theme(Theme::Light)).unwrap();
        clear_prefs(dir.path()).unwrap();
        assert_eq!(load_prefs(dir.path()).stored_theme(), None);
    }

    #[test]
    fn test_save_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("prefs-dir");
        save_prefs(&nested, &ViewerPrefs::with_theme(Theme::Dark)).unwrap();
        assert_eq!(load_prefs(&nested).stored_theme(), Some(Theme::Dark));
    }
}
