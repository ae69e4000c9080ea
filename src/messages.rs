//! Message types for the Elm-style architecture
//!
//! Messages describe events that can update the application state.

use std::path::PathBuf;

use crate::model::{NotificationId, Severity};
use crate::service::endpoint::{
    Entity, Lemma, PhoneticsReport, SentimentReport, SpeechResponse,
};
use crate::service::ServiceError;

/// Editing-surface messages (text edits, selection)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Insert text at a character offset
    Insert { index: usize, text: String },
    /// Insert text right before the final boundary
    Append(String),
    /// Delete `len` characters at `index`
    Delete { index: usize, len: usize },
    /// Move the selection
    Select { index: usize, length: usize },
    /// Replace the full text
    SetText(String),
    /// Empty the editor
    Clear,
    /// Replace the text with the built-in sample
    LoadExample,
}

/// Autocomplete pipeline messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestMsg {
    /// Toggle the feature
    SetEnabled(bool),
    /// Debounce timer fired
    TimerElapsed { generation: u64 },
    /// Service answered (async result)
    Received {
        generation: u64,
        result: Result<Vec<String>, ServiceError>,
    },
    /// User picked the suggestion at this position of the live list
    Accept(usize),
    /// Hide the list without disabling the feature
    Dismiss,
}

/// Outcome of one spelling-check run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Words sent to the service
    pub checked: usize,
    /// Words the service flagged as incorrect
    pub errors: usize,
    /// Words whose check failed and was skipped
    pub failed: usize,
}

/// Spelling-check pipeline messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationMsg {
    /// Check the whole document
    Run,
    /// Every word was tried (async result)
    Completed(ValidationReport),
}

/// One-shot action messages
#[derive(Debug, Clone)]
pub enum ActionMsg {
    /// Secondary pointer interaction over the editor
    ContextMenu,
    TranslateCompleted {
        source: String,
        result: Result<Option<String>, ServiceError>,
    },
    AnalyzeSentiment,
    SentimentCompleted(Result<SentimentReport, ServiceError>),
    /// Lemmatize the word typed into the lemma field
    Lemmatize(String),
    LemmaCompleted(Result<Lemma, ServiceError>),
    ExtractEntities,
    EntitiesCompleted(Result<Vec<Entity>, ServiceError>),
    ValidatePhonetics(String),
    PhoneticsCompleted {
        word: String,
        result: Result<PhoneticsReport, ServiceError>,
    },
    /// Read the selection, or the whole text, aloud
    Speak,
    SpeechCompleted(Result<SpeechResponse, ServiceError>),
}

/// UI messages (notifications)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
    /// Show a notification
    Notify { message: String, severity: Severity },
    /// Dismissal timer fired
    NotificationExpired(NotificationId),
}

/// Application-level messages (export)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Save the text as a plain-text file
    Export,
    /// File save completed (async result)
    ExportCompleted(Result<PathBuf, String>),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Document(DocumentMsg),
    Suggest(SuggestMsg),
    Validation(ValidationMsg),
    Action(ActionMsg),
    Ui(UiMsg),
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn append(text: impl Into<String>) -> Self {
        Msg::Document(DocumentMsg::Append(text.into()))
    }

    pub fn set_text(text: impl Into<String>) -> Self {
        Msg::Document(DocumentMsg::SetText(text.into()))
    }

    pub fn select(index: usize, length: usize) -> Self {
        Msg::Document(DocumentMsg::Select { index, length })
    }

    pub fn notify(message: impl Into<String>, severity: Severity) -> Self {
        Msg::Ui(UiMsg::Notify {
            message: message.into(),
            severity,
        })
    }
}
