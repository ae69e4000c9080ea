//! Autocomplete update handlers
//!
//! Text change → Cmd::ScheduleSuggestions → (debounce timer)
//!   → SuggestMsg::TimerElapsed → Cmd::RequestSuggestions → SuggestMsg::Received
//!
//! Each step carries the generation it was created for. A newer edit or a
//! toggle advances the generation, so late timers and late responses are
//! recognised as stale and dropped.

use crate::commands::Cmd;
use crate::messages::SuggestMsg;
use crate::model::{AppModel, SuggestionPhase};

use super::document::on_text_change;

/// Handle autocomplete messages
pub fn update_suggest(model: &mut AppModel, msg: SuggestMsg) -> Option<Cmd> {
    match msg {
        SuggestMsg::SetEnabled(enabled) => {
            model.suggestions.enabled = enabled;
            if enabled {
                return Some(Cmd::Redraw);
            }
            // Anything scheduled or in flight belongs to an older generation now
            model.suggestions.hide();
            model.suggestions.advance();
            Some(Cmd::batch(vec![Cmd::CancelSuggestions, Cmd::Redraw]))
        }

        SuggestMsg::TimerElapsed { generation } => {
            if !model.suggestions.enabled || !model.suggestions.is_current(generation) {
                tracing::debug!(
                    "Skipping stale suggestion timer: generation {} != current {}",
                    generation,
                    model.suggestions.generation()
                );
                return None;
            }

            let context = model.document.trimmed_text();
            if context.chars().count() < model.config.min_context_chars {
                model.suggestions.phase = SuggestionPhase::Idle;
                return None;
            }

            model.suggestions.phase = SuggestionPhase::InFlight;
            Some(Cmd::RequestSuggestions {
                generation,
                context,
            })
        }

        SuggestMsg::Received { generation, result } => {
            if !model.suggestions.enabled || !model.suggestions.is_current(generation) {
                tracing::debug!(
                    "Discarding stale suggestions: generation {} (current {}, enabled {})",
                    generation,
                    model.suggestions.generation(),
                    model.suggestions.enabled
                );
                return None;
            }

            model.suggestions.phase = SuggestionPhase::Idle;
            match result {
                Ok(suggestions) if !suggestions.is_empty() => {
                    tracing::debug!("Showing {} suggestions", suggestions.len());
                    model.suggestions.show(suggestions);
                    Some(Cmd::Redraw)
                }
                Ok(_) => None,
                Err(e) => {
                    tracing::warn!("Autocomplete request failed: {}", e);
                    None
                }
            }
        }

        SuggestMsg::Accept(position) => {
            let word = model.suggestions.live()?.get(position)?.clone();
            model.suggestions.hide();
            model.document.append(&format!(" {}", word));
            Some(Cmd::batch(vec![on_text_change(model), Cmd::Redraw]))
        }

        SuggestMsg::Dismiss => {
            if !model.suggestions.is_visible() {
                return None;
            }
            model.suggestions.hide();
            Some(Cmd::Redraw)
        }
    }
}

/// Restart the debounce after a text change
///
/// This returns a `Cmd::ScheduleSuggestions` when the edit qualifies, and a
/// `Cmd::CancelSuggestions` otherwise so no older timer can fire.
pub fn schedule_suggestions(model: &mut AppModel) -> Cmd {
    let generation = model.suggestions.advance();

    if !model.suggestions.enabled {
        return Cmd::CancelSuggestions;
    }

    let context_len = model.document.trimmed_text().chars().count();
    if context_len < model.config.min_context_chars {
        return Cmd::CancelSuggestions;
    }

    model.suggestions.phase = SuggestionPhase::Scheduled;
    Cmd::ScheduleSuggestions {
        generation,
        delay_ms: model.config.debounce_ms,
    }
}
