//! App message handlers (export)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Export => {
            let path = model.config.export_path();
            let content = model.text();
            tracing::info!("Exporting {} chars to {}", model.stats.chars, path.display());
            Some(Cmd::SaveFile { path, content })
        }

        AppMsg::ExportCompleted(result) => Some(match result {
            Ok(path) => model.notify_info(format!("Text saved to {}", path.display())),
            Err(e) => {
                tracing::warn!("Export failed: {}", e);
                model.notify_error(format!("Error: {}", e))
            }
        }),
    }
}
