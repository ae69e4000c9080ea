//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The runtime executes them and feeds results back as messages.

use std::path::PathBuf;

use crate::model::NotificationId;

/// Side effects requested by `update`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Model changed in a way the front end should show
    Redraw,
    /// Execute multiple commands
    Batch(Vec<Cmd>),

    // === Notifications ===
    /// Arm the dismissal timer, replacing any armed one
    /// After delay_ms, sends Msg::Ui(NotificationExpired(id))
    ScheduleDismissal { id: NotificationId, delay_ms: u64 },

    // === Autocomplete ===
    /// Arm the debounce timer, replacing any armed one
    /// After delay_ms, sends Msg::Suggest(TimerElapsed)
    ScheduleSuggestions { generation: u64, delay_ms: u64 },
    /// Disarm the debounce timer
    CancelSuggestions,
    /// Ask the service for next-word suggestions
    /// Sends Msg::Suggest(Received) when done
    RequestSuggestions { generation: u64, context: String },

    // === Service calls ===
    /// Check words one at a time, in order
    /// Sends Msg::Validation(Completed) once every word was tried
    CheckSpelling { words: Vec<String> },
    Translate { text: String },
    AnalyzeSentiment { text: String },
    Lemmatize { word: String },
    ExtractEntities { text: String },
    ValidatePhonetics { word: String },
    SynthesizeSpeech { text: String },

    // === Platform ===
    /// Hand an audio locator to the player
    PlayAudio { url: String },
    /// Write text to disk
    /// Sends Msg::App(ExportCompleted) when done
    SaveFile { path: PathBuf, content: String },
}

impl Cmd {
    /// Create a batch of commands, flattening away `None`s
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            // A notification just became visible
            Cmd::ScheduleDismissal { .. } => true,
            // Timers and requests redraw when their result message arrives
            Cmd::ScheduleSuggestions { .. }
            | Cmd::CancelSuggestions
            | Cmd::RequestSuggestions { .. }
            | Cmd::CheckSpelling { .. }
            | Cmd::Translate { .. }
            | Cmd::AnalyzeSentiment { .. }
            | Cmd::Lemmatize { .. }
            | Cmd::ExtractEntities { .. }
            | Cmd::ValidatePhonetics { .. }
            | Cmd::SynthesizeSpeech { .. }
            | Cmd::PlayAudio { .. }
            | Cmd::SaveFile { .. } => false,
        }
    }

    /// Iterate over this command and nested batch members, depth-first
    pub fn flatten(&self) -> Vec<&Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.iter().flat_map(|c| c.flatten()).collect(),
            Cmd::None => Vec::new(),
            other => vec![other],
        }
    }
}
