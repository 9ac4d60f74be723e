//! Editor settings, stored as JSON in the user's config directory.
//!
//! Missing fields take their defaults, so a partial file is valid. A missing
//! or unreadable file falls back to [`EditorSettings::default`].

use crate::constants::{
    CANVAS_CLASS, COMPONENT_CLASS, DEFAULT_API_BASE_URL, DROP_ZONE_CLASS,
    NOTIFICATION_DURATION_SECS, SELECTED_CLASS,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Class names the editor looks for in the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorClasses {
    /// Marker class of the selected element
    pub selected: String,
    pub drop_zone: String,
    pub component: String,
    pub canvas: String,
}

impl Default for EditorClasses {
    fn default() -> Self {
        Self {
            selected: SELECTED_CLASS.to_string(),
            drop_zone: DROP_ZONE_CLASS.to_string(),
            component: COMPONENT_CLASS.to_string(),
            canvas: CANVAS_CLASS.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Base URL of the project REST API
    pub api_base_url: String,
    pub classes: EditorClasses,
    pub notification_duration_secs: u64,
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            classes: EditorClasses::default(),
            notification_duration_secs: NOTIFICATION_DURATION_SECS,
            log_filter: "info".to_string(),
        }
    }
}

impl EditorSettings {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write pretty JSON, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.notification_duration_secs)
    }
}

/// `<config dir>/pageforge/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pageforge").join("settings.json"))
}
