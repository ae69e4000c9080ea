//! UI update handlers (notifications)

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::AppModel;

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::Notify { message, severity } => Some(model.notify(message, severity)),

        UiMsg::NotificationExpired(id) => {
            if model.notification.dismiss(id) {
                Some(Cmd::Redraw)
            } else {
                tracing::debug!("Ignoring expiry of replaced notification {:?}", id);
                None
            }
        }
    }
}
