//! Service tasks run off the update loop
//!
//! Each function performs the gateway calls behind one command and reduces
//! the responses to what the matching result message carries.

use crate::messages::ValidationReport;
use crate::service::endpoint::{
    AnalyzeSentiment, Autocomplete, CheckSpelling, ContextRequest, Entity, ExtractEntities, Lemma,
    LemmatizeWord, PhoneticsReport, SentimentReport, SpeechResponse, TextRequest, TextToSpeech,
    Translate, ValidatePhonetics, WordRequest,
};
use crate::service::{Gateway, ServiceError, Transport};

pub async fn fetch_suggestions<T: Transport>(
    gateway: &Gateway<T>,
    context: String,
) -> Result<Vec<String>, ServiceError> {
    let response = gateway
        .call::<Autocomplete>(&ContextRequest { context })
        .await?;
    Ok(response.suggestions)
}

/// Check `words` one at a time, in order
///
/// The next request starts only after the previous one settled. A failed
/// word is counted and skipped; it never aborts the run.
pub async fn check_words<T: Transport>(gateway: &Gateway<T>, words: Vec<String>) -> ValidationReport {
    let mut report = ValidationReport::default();

    for word in words {
        report.checked += 1;
        match gateway.call::<CheckSpelling>(&WordRequest::new(&word)).await {
            Ok(result) if result.correct => {}
            Ok(result) => {
                report.errors += 1;
                tracing::info!(
                    word = %word,
                    suggestions = ?result.suggestions,
                    phonetic_errors = ?result.phonetic_errors,
                    "misspelled word"
                );
            }
            Err(e) => {
                report.failed += 1;
                tracing::warn!("Spelling check of {:?} failed: {}", word, e);
            }
        }
    }

    report
}

pub async fn translate<T: Transport>(
    gateway: &Gateway<T>,
    text: String,
) -> Result<Option<String>, ServiceError> {
    let response = gateway.call::<Translate>(&WordRequest::new(text)).await?;
    Ok(response.translation)
}

pub async fn analyze_sentiment<T: Transport>(
    gateway: &Gateway<T>,
    text: String,
) -> Result<SentimentReport, ServiceError> {
    gateway.call::<AnalyzeSentiment>(&TextRequest::new(text)).await
}

pub async fn lemmatize<T: Transport>(
    gateway: &Gateway<T>,
    word: String,
) -> Result<Lemma, ServiceError> {
    let response = gateway.call::<LemmatizeWord>(&WordRequest::new(word)).await?;
    Ok(response.lemma)
}

pub async fn extract_entities<T: Transport>(
    gateway: &Gateway<T>,
    text: String,
) -> Result<Vec<Entity>, ServiceError> {
    let response = gateway.call::<ExtractEntities>(&TextRequest::new(text)).await?;
    Ok(response.entities)
}

pub async fn validate_phonetics<T: Transport>(
    gateway: &Gateway<T>,
    word: String,
) -> Result<PhoneticsReport, ServiceError> {
    gateway.call::<ValidatePhonetics>(&WordRequest::new(word)).await
}

pub async fn synthesize_speech<T: Transport>(
    gateway: &Gateway<T>,
    text: String,
) -> Result<SpeechResponse, ServiceError> {
    gateway.call::<TextToSpeech>(&TextRequest::new(text)).await
}
