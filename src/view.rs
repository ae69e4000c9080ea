//! Terminal rendering of the model
//!
//! Produces the whole screen as a string; the front end prints it after any
//! command that asked for a redraw.

use std::fmt::Write;

use crate::model::{AppModel, Severity};

pub fn render(model: &AppModel) -> String {
    let mut out = String::new();

    let stats = &model.stats;
    let _ = writeln!(
        out,
        "Words: {} | Characters: {} | Lines: {}",
        stats.words, stats.chars, stats.lines
    );
    let autocomplete = if model.suggestions.enabled { "on" } else { "off" };
    let _ = writeln!(out, "Autocomplete: {}", autocomplete);

    let _ = writeln!(out, "────────");
    out.push_str(&model.text());
    let selection = model.document.selection;
    if !selection.is_empty() {
        let _ = writeln!(
            out,
            "[selected {}..{}: {:?}]",
            selection.index,
            selection.end(),
            model.document.selected_text()
        );
    }
    let _ = writeln!(out, "────────");

    if let Some(suggestions) = model.suggestions.live() {
        let _ = writeln!(out, "Suggestions:");
        for (i, word) in suggestions.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, word);
        }
    }

    let outputs = &model.outputs;
    for (title, region) in [
        ("Translation", &outputs.translation),
        ("Sentiment", &outputs.sentiment),
        ("Lemma", &outputs.lemma),
        ("Phonetics", &outputs.phonetics),
    ] {
        if let Some(text) = region {
            let _ = writeln!(out, "[{}]\n{}", title, text);
        }
    }

    if let Some(notification) = model.notification.current().filter(|n| !n.is_expired()) {
        let marker = match notification.severity {
            Severity::Info => "ℹ",
            Severity::Error => "✗",
        };
        let _ = writeln!(out, "{} {}", marker, notification.message);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AssistConfig;

    #[test]
    fn test_render_shows_stats_and_text() {
        let model = AppModel::with_text(AssistConfig::default(), "Salama e!");
        let screen = render(&model);
        assert!(screen.starts_with("Words: 2 | Characters: 10 | Lines: 2\n"));
        assert!(screen.contains("Salama e!\n"));
    }

    #[test]
    fn test_render_numbers_suggestions_from_one() {
        let mut model = AppModel::new(AssistConfig::default());
        model.suggestions.show(vec!["tsara".to_string(), "be".to_string()]);
        let screen = render(&model);
        assert!(screen.contains("  1. tsara\n  2. be\n"));
    }

    #[test]
    fn test_render_includes_notification() {
        let mut model = AppModel::new(AssistConfig::default());
        model.notify_error("Please write some text first");
        assert!(render(&model).contains("✗ Please write some text first"));
    }

    #[test]
    fn test_render_skips_expired_notification() {
        let mut model = AppModel::new(AssistConfig::default());
        model
            .notification
            .show("Editor cleared", Severity::Info, std::time::Duration::ZERO);
        assert!(!render(&model).contains("Editor cleared"));
    }
}
