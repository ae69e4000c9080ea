//! One-shot action handlers
//!
//! Every action validates its input, issues one service command and renders
//! the result when it comes back. Translation failures are only logged, the
//! other actions notify the user.

use crate::commands::Cmd;
use crate::messages::ActionMsg;
use crate::model::outputs::{render_lemma, render_phonetics, render_sentiment, render_translation};
use crate::model::AppModel;
use crate::service::endpoint::{Entity, SpeechResponse};
use crate::service::{resolve_locator, ServiceError};

/// Handle one-shot action messages
pub fn update_action(model: &mut AppModel, msg: ActionMsg) -> Option<Cmd> {
    match msg {
        // === Translation ===
        ActionMsg::ContextMenu => {
            if model.document.selection.is_empty() {
                return None;
            }
            let text = model.document.selected_text();
            if text.is_empty() {
                return None;
            }
            Some(Cmd::Translate { text })
        }

        ActionMsg::TranslateCompleted { source, result } => match result {
            Ok(translation) => {
                model.outputs.translation =
                    Some(render_translation(&source, translation.as_deref()));
                Some(Cmd::Redraw)
            }
            Err(e) => {
                tracing::warn!("Translation of {:?} failed: {}", source, e);
                None
            }
        },

        // === Sentiment ===
        ActionMsg::AnalyzeSentiment => {
            let text = model.document.trimmed_text();
            if text.is_empty() {
                return Some(model.notify_error("Please write some text first"));
            }
            Some(Cmd::AnalyzeSentiment { text })
        }

        ActionMsg::SentimentCompleted(result) => Some(match result {
            Ok(report) => {
                model.outputs.sentiment = Some(render_sentiment(&report));
                model.notify_info("Analysis complete!")
            }
            Err(e) => failure(model, "Sentiment analysis", &e, "Error during analysis"),
        }),

        // === Lemmatization ===
        ActionMsg::Lemmatize(word) => {
            let word = word.trim();
            if word.is_empty() {
                return Some(model.notify_error("Please enter a word"));
            }
            Some(Cmd::Lemmatize {
                word: word.to_string(),
            })
        }

        ActionMsg::LemmaCompleted(result) => Some(match result {
            Ok(lemma) => {
                model.outputs.lemma = Some(render_lemma(&lemma));
                model.notify_info("Lemmatization done!")
            }
            Err(e) => failure(model, "Lemmatization", &e, "Error during lemmatization"),
        }),

        // === Entity extraction ===
        ActionMsg::ExtractEntities => {
            let text = model.document.trimmed_text();
            if text.is_empty() {
                return Some(model.notify_error("Please write some text first"));
            }
            Some(Cmd::ExtractEntities { text })
        }

        ActionMsg::EntitiesCompleted(result) => Some(match result {
            Ok(entities) => report_entities(model, &entities),
            Err(e) => failure(model, "Entity extraction", &e, "Error during extraction"),
        }),

        // === Phonetics ===
        ActionMsg::ValidatePhonetics(word) => {
            let word = word.trim();
            if word.is_empty() {
                return Some(model.notify_error("Please enter a word"));
            }
            Some(Cmd::ValidatePhonetics {
                word: word.to_string(),
            })
        }

        ActionMsg::PhoneticsCompleted { word, result } => Some(match result {
            Ok(report) => {
                model.outputs.phonetics = Some(render_phonetics(&word, &report));
                if report.is_valid {
                    model.notify_info("Phonetic rules satisfied")
                } else {
                    model.notify_error(format!(
                        "{} phonotactic issue(s) found",
                        report.errors.len()
                    ))
                }
            }
            Err(e) => failure(
                model,
                "Phonetic validation",
                &e,
                "Error during phonetic validation",
            ),
        }),

        // === Speech ===
        ActionMsg::Speak => {
            let text = if model.document.selection.is_empty() {
                model.document.trimmed_text()
            } else {
                model.document.selected_text()
            };
            if text.is_empty() {
                return Some(model.notify_error("Please write or select some text"));
            }
            Some(Cmd::batch(vec![
                model.notify_info("Generating audio..."),
                Cmd::SynthesizeSpeech { text },
            ]))
        }

        ActionMsg::SpeechCompleted(result) => Some(match result {
            Ok(response) => start_playback(model, response),
            Err(e) => failure(model, "Speech synthesis", &e, "Error during audio generation"),
        }),
    }
}

/// Log a service failure and tell the user
fn failure(model: &mut AppModel, action: &str, error: &ServiceError, message: &str) -> Cmd {
    tracing::warn!(endpoint = ?error.endpoint(), "{} failed: {}", action, error);
    model.notify_error(message)
}

/// Entities go to the diagnostic log, only the count reaches the UI
fn report_entities(model: &mut AppModel, entities: &[Entity]) -> Cmd {
    if entities.is_empty() {
        return model.notify_info("No entities found");
    }

    for entity in entities {
        tracing::info!(
            target: "teny::entities",
            kind = %entity.kind,
            text = %entity.text,
            info = %entity.info,
            "entity"
        );
    }

    let noun = if entities.len() == 1 { "entity" } else { "entities" };
    model.notify_info(format!("{} {} found!", entities.len(), noun))
}

fn start_playback(model: &mut AppModel, response: SpeechResponse) -> Cmd {
    let Some(locator) = response.audio_url else {
        return model.notify_error("Audio generation failed");
    };

    match resolve_locator(&model.config.service_url, &locator) {
        Ok(url) => Cmd::batch(vec![
            Cmd::PlayAudio {
                url: url.to_string(),
            },
            model.notify_info("Audio playback started!"),
        ]),
        Err(e) => {
            tracing::warn!("Unplayable audio locator: {}", e);
            model.notify_error("Audio generation failed")
        }
    }
}
