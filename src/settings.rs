use crate::store::PINNED_NOTES_FILE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Folder holding the notes. Pinned paths are relative to it.
    #[serde(default = "default_vault_dir")]
    pub vault_dir: String,
    /// File the pinned notes document is stored in.
    #[serde(default = "default_data_file")]
    pub data_file: String,
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Enable toast notifications in the UI.
    #[serde(default = "default_toasts")]
    pub enable_toasts: bool,
    /// Duration of toast notifications in seconds.
    #[serde(default = "default_toast_duration")]
    pub toast_duration: f32,
    /// Width of the launcher ribbon in points.
    #[serde(default = "default_ribbon_width")]
    pub ribbon_width: f32,
}

fn default_vault_dir() -> String {
    dirs_next::document_dir()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(std::env::temp_dir)
        .to_string_lossy()
        .to_string()
}

fn default_data_file() -> String {
    PINNED_NOTES_FILE.into()
}

fn default_toasts() -> bool {
    true
}

fn default_toast_duration() -> f32 {
    3.0
}

fn default_ribbon_width() -> f32 {
    44.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_dir: default_vault_dir(),
            data_file: default_data_file(),
            debug_logging: false,
            enable_toasts: true,
            toast_duration: default_toast_duration(),
            ribbon_width: default_ribbon_width(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn vault_path(&self) -> PathBuf {
        PathBuf::from(&self.vault_dir)
    }
}
