//! Assistant configuration persistence
//!
//! Stores user preferences in `~/.config/teny/config.yaml`

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistConfig {
    /// Base URL of the language service
    #[serde(default = "default_service_url")]
    pub service_url: String,

    /// Whether autocomplete starts enabled
    #[serde(default = "default_true")]
    pub autocomplete_enabled: bool,

    /// Quiet period after the last edit before suggestions are requested
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// How long a notification stays visible
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,

    /// Minimum trimmed document length (in characters) that asks for suggestions
    #[serde(default = "default_min_context_chars")]
    pub min_context_chars: usize,

    /// Per-request timeout; `None` leaves it to the HTTP client defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_ms: Option<u64>,

    /// Directory exports are written to
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// Fixed file name of the exported text
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
}

fn default_service_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_true() -> bool {
    true
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_notification_ms() -> u64 {
    3000
}

fn default_min_context_chars() -> usize {
    2
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_export_file_name() -> String {
    "texte_malagasy.txt".to_string()
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            autocomplete_enabled: true,
            debounce_ms: default_debounce_ms(),
            notification_ms: default_notification_ms(),
            min_context_chars: default_min_context_chars(),
            request_timeout_ms: None,
            export_dir: default_export_dir(),
            export_file_name: default_export_file_name(),
        }
    }
}

impl AssistConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from an explicit path, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    /// Where the export action writes the document
    pub fn export_path(&self) -> PathBuf {
        self.export_dir.join(&self.export_file_name)
    }
}
