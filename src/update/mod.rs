//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod actions;
mod app;
mod document;
mod suggest;
mod ui;
mod validation;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::PipelineSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use actions::update_action;
pub use app::update_app;
pub use document::{on_text_change, update_document};
pub use suggest::{schedule_suggestions, update_suggest};
pub use ui::update_ui;
pub use validation::update_validation;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Document(m) => document::update_document(model, m),
        Msg::Suggest(m) => suggest::update_suggest(model, m),
        Msg::Validation(m) => validation::update_validation(model, m),
        Msg::Action(m) => actions::update_action(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after pipeline state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = PipelineSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = PipelineSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "pipeline", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Long payloads (document text, results) are cut to keep log lines short.
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    let name = match msg {
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Suggest(m) => format!("Suggest::{:?}", m),
        Msg::Validation(m) => format!("Validation::{:?}", m),
        Msg::Action(m) => format!("Action::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    };
    crate::util::text::truncate_chars(&name, 120)
}
