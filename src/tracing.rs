//! Tracing infrastructure for development diagnostics
//!
//! Configure the console via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=pipeline=debug` - only pipeline state transitions
//! - `RUST_LOG=teny::entities=info` - extracted entities
//!
//! # Log Files
//!
//! Logs are written to `<config_dir>/teny/logs/teny.log` with daily rotation.
//! File logging uses debug level regardless of RUST_LOG.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{AppModel, SuggestionPhase};

/// Initialize tracing subscriber with console and file logging
///
/// The console writes to stderr so it never interleaves with the rendered
/// view on stdout.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "teny.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of pipeline state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSnapshot {
    pub revision: u64,
    pub generation: u64,
    pub phase: SuggestionPhase,
    pub suggestions_visible: bool,
    pub notification: Option<u64>,
    pub validation_running: bool,
}

impl PipelineSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            revision: model.document.revision,
            generation: model.suggestions.generation(),
            phase: model.suggestions.phase,
            suggestions_visible: model.suggestions.is_visible(),
            notification: model.notification.current().map(|n| n.id.0),
            validation_running: model.validation_running,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &PipelineSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.revision != other.revision {
            changes.push(format!("revision: {} → {}", self.revision, other.revision));
        }
        if self.generation != other.generation {
            changes.push(format!(
                "generation: {} → {}",
                self.generation, other.generation
            ));
        }
        if self.phase != other.phase {
            changes.push(format!("phase: {:?} → {:?}", self.phase, other.phase));
        }
        if self.suggestions_visible != other.suggestions_visible {
            let status = if other.suggestions_visible {
                "shown"
            } else {
                "hidden"
            };
            changes.push(format!("suggestions {}", status));
        }
        if self.notification != other.notification {
            changes.push(match other.notification {
                Some(id) => format!("notification #{}", id),
                None => "notification dismissed".to_string(),
            });
        }
        if self.validation_running != other.validation_running {
            let status = if other.validation_running {
                "started"
            } else {
                "finished"
            };
            changes.push(format!("spelling check {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
