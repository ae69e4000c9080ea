//! Spelling check update handlers

use crate::commands::Cmd;
use crate::messages::{ValidationMsg, ValidationReport};
use crate::model::AppModel;
use crate::util::text::words;

/// Handle spelling-check messages
pub fn update_validation(model: &mut AppModel, msg: ValidationMsg) -> Option<Cmd> {
    match msg {
        ValidationMsg::Run => {
            let words = words(&model.text());
            if words.is_empty() {
                return Some(model.notify_error("Please write some text first"));
            }

            // One run at a time keeps the service at one spelling request in flight
            if model.validation_running {
                return Some(model.notify_info("A spelling check is already running"));
            }

            model.validation_running = true;
            tracing::info!("Checking spelling of {} words", words.len());
            Some(Cmd::batch(vec![
                model.notify_info("Checking spelling..."),
                Cmd::CheckSpelling { words },
            ]))
        }

        ValidationMsg::Completed(report) => {
            model.validation_running = false;
            Some(report_outcome(model, &report))
        }
    }
}

fn report_outcome(model: &mut AppModel, report: &ValidationReport) -> Cmd {
    tracing::info!(
        checked = report.checked,
        errors = report.errors,
        failed = report.failed,
        "Spelling check finished"
    );
    if report.failed > 0 {
        tracing::warn!("{} of {} words could not be checked", report.failed, report.checked);
    }

    if report.errors == 0 {
        model.notify_info("✓ No errors found!")
    } else {
        model.notify_error(format!("⚠ {} spelling error(s) found", report.errors))
    }
}
