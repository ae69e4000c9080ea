//! Command-line argument parsing for the assistant
//!
//! Supports:
//! - Opening a text file, or the built-in Malagasy sample
//! - Overriding the service URL and request timeout
//! - Starting with autocomplete disabled

use clap::Parser;
use std::path::PathBuf;

use crate::config::AssistConfig;

/// Malagasy writing assistant
#[derive(Parser, Debug)]
#[command(name = "teny", version, about = "Malagasy writing assistant")]
pub struct CliArgs {
    /// Text file to load into the editor
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Base URL of the language service
    #[arg(long, value_name = "URL")]
    pub service_url: Option<String>,

    /// Start with autocomplete disabled
    #[arg(long)]
    pub no_autocomplete: bool,

    /// Directory the export command writes to
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Per-request timeout in milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Start with the built-in sample text
    #[arg(short = 'e', long)]
    pub example: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// What the editor starts with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupText {
    Empty,
    File(PathBuf),
    Example,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub text: StartupText,
    pub config_path: Option<PathBuf>,
    pub service_url: Option<String>,
    pub autocomplete_enabled: Option<bool>,
    pub export_dir: Option<PathBuf>,
    pub request_timeout_ms: Option<u64>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let text = match (self.file, self.example) {
            (Some(_), true) => return Err("FILE cannot be combined with --example".to_string()),
            (Some(path), false) => StartupText::File(path),
            (None, true) => StartupText::Example,
            (None, false) => StartupText::Empty,
        };

        if self.timeout_ms == Some(0) {
            return Err("--timeout-ms must be greater than 0".to_string());
        }

        Ok(StartupConfig {
            text,
            config_path: self.config,
            service_url: self.service_url,
            autocomplete_enabled: self.no_autocomplete.then_some(false),
            export_dir: self.export_dir,
            request_timeout_ms: self.timeout_ms,
        })
    }
}

impl StartupConfig {
    /// Layer the command-line overrides on top of the persisted config
    pub fn apply(&self, config: &mut AssistConfig) {
        if let Some(url) = &self.service_url {
            config.service_url = url.clone();
        }
        if let Some(enabled) = self.autocomplete_enabled {
            config.autocomplete_enabled = enabled;
        }
        if let Some(dir) = &self.export_dir {
            config.export_dir = dir.clone();
        }
        if let Some(ms) = self.request_timeout_ms {
            config.request_timeout_ms = Some(ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            file: None,
            service_url: None,
            no_autocomplete: false,
            export_dir: None,
            timeout_ms: None,
            example: false,
            config: None,
        }
    }

    #[test]
    fn test_empty_args_gives_empty_text() {
        let config = args().into_config().unwrap();
        assert_eq!(config.text, StartupText::Empty);
    }

    #[test]
    fn test_single_file() {
        let config = CliArgs {
            file: Some(PathBuf::from("lahatsoratra.txt")),
            ..args()
        }
        .into_config()
        .unwrap();
        assert_eq!(
            config.text,
            StartupText::File(PathBuf::from("lahatsoratra.txt"))
        );
    }

    #[test]
    fn test_file_with_example_is_rejected() {
        let result = CliArgs {
            file: Some(PathBuf::from("a.txt")),
            example: true,
            ..args()
        }
        .into_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = CliArgs {
            timeout_ms: Some(0),
            ..args()
        }
        .into_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_apply_over_defaults() {
        let startup = CliArgs {
            service_url: Some("http://nlp.local:8080".to_string()),
            no_autocomplete: true,
            timeout_ms: Some(250),
            ..args()
        }
        .into_config()
        .unwrap();

        let mut config = AssistConfig::default();
        startup.apply(&mut config);

        assert_eq!(config.service_url, "http://nlp.local:8080");
        assert!(!config.autocomplete_enabled);
        assert_eq!(config.request_timeout_ms, Some(250));
        assert_eq!(config.debounce_ms, 500);
    }

    #[test]
    fn test_absent_flags_keep_persisted_values() {
        let startup = args().into_config().unwrap();
        let mut config = AssistConfig {
            autocomplete_enabled: false,
            ..AssistConfig::default()
        };
        startup.apply(&mut config);
        assert!(!config.autocomplete_enabled);
    }

    #[test]
    fn test_clap_parses_flags() {
        let parsed = CliArgs::try_parse_from([
            "teny",
            "--service-url",
            "http://x:1",
            "--no-autocomplete",
            "-e",
        ])
        .unwrap();
        assert!(parsed.example);
        assert!(parsed.no_autocomplete);
        assert_eq!(parsed.service_url.as_deref(), Some("http://x:1"));
    }
}
