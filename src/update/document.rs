//! Document edit handlers

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::{AppModel, EXAMPLE_TEXT};

use super::suggest::schedule_suggestions;

/// Handle editing-surface messages
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    let revision_before = model.document.revision;

    let notice = match msg {
        DocumentMsg::Insert { index, text } => {
            model.document.insert(index, &text);
            Cmd::None
        }
        DocumentMsg::Append(text) => {
            model.document.append(&text);
            Cmd::None
        }
        DocumentMsg::Delete { index, len } => {
            model.document.delete(index, len);
            Cmd::None
        }
        DocumentMsg::Select { index, length } => {
            model.document.select(index, length);
            return Some(Cmd::Redraw);
        }
        DocumentMsg::SetText(text) => {
            model.document.replace_all(&text);
            Cmd::None
        }
        DocumentMsg::Clear => {
            model.document.replace_all("");
            model.notify_info("Editor cleared")
        }
        DocumentMsg::LoadExample => {
            model.document.replace_all(EXAMPLE_TEXT);
            model.notify_info("Example loaded!")
        }
    };

    if model.document.revision == revision_before {
        return match notice {
            Cmd::None => None,
            notice => Some(notice),
        };
    }

    Some(Cmd::batch(vec![on_text_change(model), notice, Cmd::Redraw]))
}

/// Observers of a text change: stats and the suggestion debounce
///
/// Every path that mutates the document must end here.
pub fn on_text_change(model: &mut AppModel) -> Cmd {
    model.refresh_stats();
    schedule_suggestions(model)
}
