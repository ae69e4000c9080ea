//! Endpoint catalogue of the language service
//!
//! Each endpoint is a unit type binding a request path to its payload and
//! response shapes, so [`super::Gateway::call`] is checked at compile time.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A POST endpoint of the language service
pub trait Endpoint {
    /// Path relative to the service base URL
    const PATH: &'static str;
    type Request: Serialize + Send + Sync;
    type Response: DeserializeOwned + Send;
}

// ============================================================================
// Request payloads
// ============================================================================

/// `{word}` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRequest {
    pub word: String,
}

impl WordRequest {
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }
}

/// `{text}` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRequest {
    pub text: String,
}

impl TextRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// `{context}` payload for next-word prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextRequest {
    pub context: String,
}

// ============================================================================
// Response shapes
// ============================================================================

/// Result of checking a single word
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpellingResult {
    pub correct: bool,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub phonetic_errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestionsResponse {
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TranslationResponse {
    #[serde(default)]
    pub translation: Option<String>,
}

/// Closed set of sentiment classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SentimentLabel {
    #[serde(rename = "positif", alias = "positive")]
    Positive,
    #[serde(rename = "négatif", alias = "negatif", alias = "negative")]
    Negative,
    #[serde(rename = "neutre", alias = "neutral")]
    Neutral,
}

impl SentimentLabel {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Positive => "😊",
            Self::Negative => "😞",
            Self::Neutral => "😐",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SentimentReport {
    pub sentiment: SentimentLabel,
    pub score: f64,
    /// Fraction in `0.0..=1.0`
    pub confidence: f64,
    pub positive_count: u32,
    pub negative_count: u32,
}

/// Morphological breakdown of one word
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Lemma {
    pub original: String,
    pub lemma: String,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LemmaResponse {
    pub lemma: Lemma,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    #[serde(default)]
    pub info: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntitiesResponse {
    #[serde(default)]
    pub entities: Vec<Entity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpeechResponse {
    #[serde(default)]
    pub audio_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhoneticsReport {
    pub is_valid: bool,
    #[serde(default)]
    pub errors: Vec<String>,
}

// ============================================================================
// Endpoints
// ============================================================================

macro_rules! endpoint {
    ($(#[$meta:meta])* $name:ident, $path:literal, $req:ty => $resp:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl Endpoint for $name {
            const PATH: &'static str = $path;
            type Request = $req;
            type Response = $resp;
        }
    };
}

endpoint!(
    /// Dictionary lookup of a single word
    CheckSpelling, "/api/check-spelling", WordRequest => SpellingResult
);
endpoint!(
    /// Next-word prediction from the document context
    Autocomplete, "/api/autocomplete", ContextRequest => SuggestionsResponse
);
endpoint!(Translate, "/api/translate", WordRequest => TranslationResponse);
endpoint!(AnalyzeSentiment, "/api/analyze-sentiment", TextRequest => SentimentReport);
endpoint!(LemmatizeWord, "/api/lemmatize", WordRequest => LemmaResponse);
endpoint!(ExtractEntities, "/api/extract-entities", TextRequest => EntitiesResponse);
endpoint!(
    /// Speech synthesis; the response locates a playable audio resource
    TextToSpeech, "/api/text-to-speech", TextRequest => SpeechResponse
);
endpoint!(
    /// Phonotactic rule check (forbidden consonant clusters)
    ValidatePhonetics, "/api/validate-phonetics", WordRequest => PhoneticsReport
);
