//! Application model - the complete state of the assistant
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod notification;
pub mod outputs;
pub mod stats;
pub mod suggestions;

pub use document::{Document, EditingSurface, Selection};
pub use notification::{Notification, NotificationId, NotificationSlot, Severity};
pub use outputs::OutputPanel;
pub use stats::DocumentStats;
pub use suggestions::{SuggestionPhase, SuggestionState};

use crate::commands::Cmd;
use crate::config::AssistConfig;

/// Sample text offered by the "load example" action
pub const EXAMPLE_TEXT: &str = "Salama e!

Malagasy aho ary faly aho manoatra amin'ity fanaovan-javatra ity. Ny fihavanana no maha-Malagasy. Ny razana dia lehilahy mahay sy hendry.

Ny tanana Antananarivo dia tanana lehibe indrindra eto Madagasikara. Misy olona maro any Antsirabe sy Toamasina koa.

Misaotra betsaka amin'ny fanahy tsara! Tonga soa amin'ny fanabeazana malagasy.";

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Text and selection of the editing surface
    pub document: Document,
    /// Counts derived from `document`, refreshed on every mutation
    pub stats: DocumentStats,
    /// The single visible notification
    pub notification: NotificationSlot,
    /// Autocomplete pipeline state
    pub suggestions: SuggestionState,
    /// Whether a spelling check is running
    pub validation_running: bool,
    /// Rendered action results
    pub outputs: OutputPanel,
    pub config: AssistConfig,
}

impl AppModel {
    pub fn new(config: AssistConfig) -> Self {
        Self::with_text(config, "")
    }

    pub fn with_text(config: AssistConfig, text: &str) -> Self {
        let document = Document::with_text(text);
        let stats = DocumentStats::from_text(&document.buffer.to_string());
        Self {
            document,
            stats,
            notification: NotificationSlot::new(),
            suggestions: SuggestionState::new(config.autocomplete_enabled),
            validation_running: false,
            outputs: OutputPanel::default(),
            config,
        }
    }

    /// Full document text, final boundary included
    pub fn text(&self) -> String {
        self.document.buffer.to_string()
    }

    /// Show a notification and schedule its dismissal
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> Cmd {
        let message = message.into();
        tracing::debug!(?severity, "notify: {}", message);
        let id = self
            .notification
            .show(message, severity, self.config.notification_duration());
        Cmd::ScheduleDismissal {
            id,
            delay_ms: self.config.notification_ms,
        }
    }

    pub fn notify_info(&mut self, message: impl Into<String>) -> Cmd {
        self.notify(message, Severity::Info)
    }

    pub fn notify_error(&mut self, message: impl Into<String>) -> Cmd {
        self.notify(message, Severity::Error)
    }

    /// Recompute stats from the current text
    pub fn refresh_stats(&mut self) {
        self.stats = DocumentStats::from_text(&self.text());
    }
}
