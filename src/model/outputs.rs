//! Output regions filled by the one-shot actions

use crate::service::endpoint::{Lemma, PhoneticsReport, SentimentReport};

/// Rendered results, one region per action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPanel {
    pub translation: Option<String>,
    pub sentiment: Option<String>,
    pub lemma: Option<String>,
    pub phonetics: Option<String>,
}

/// `"source → translation"`, or a not-found line when the service has none
pub fn render_translation(source: &str, translation: Option<&str>) -> String {
    match translation {
        Some(translation) => format!("{} → {}", source, translation),
        None => format!("Translation not found for \"{}\"", source),
    }
}

pub fn render_sentiment(report: &SentimentReport) -> String {
    format!(
        "{} {}\nScore: {} | Confidence: {}%\nPositive: {} | Negative: {}",
        report.sentiment.icon(),
        report.sentiment.display_name(),
        report.score,
        (report.confidence * 100.0).round(),
        report.positive_count,
        report.negative_count,
    )
}

/// Prefix and suffix lines appear only when the service found them
pub fn render_lemma(lemma: &Lemma) -> String {
    let mut lines = vec![
        format!("Word: {}", lemma.original),
        format!("Root: {}", lemma.lemma),
    ];
    if let Some(prefix) = lemma.prefix.as_deref().filter(|p| !p.is_empty()) {
        lines.push(format!("Prefix: {}", prefix));
    }
    if let Some(suffix) = lemma.suffix.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("Suffix: {}", suffix));
    }
    lines.push(format!("Type: {}", lemma.kind));
    lines.join("\n")
}

pub fn render_phonetics(word: &str, report: &PhoneticsReport) -> String {
    if report.is_valid {
        return format!("{}: follows the phonotactic rules", word);
    }
    let mut lines = vec![format!("{}: breaks the phonotactic rules", word)];
    lines.extend(report.errors.iter().map(|e| format!("- {}", e)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::endpoint::SentimentLabel;

    #[test]
    fn test_render_translation_found() {
        assert_eq!(
            render_translation("Madagasikara", Some("Madagascar")),
            "Madagasikara → Madagascar"
        );
    }

    #[test]
    fn test_render_translation_not_found() {
        assert_eq!(
            render_translation("xyz", None),
            "Translation not found for \"xyz\""
        );
    }

    #[test]
    fn test_render_sentiment_shows_confidence_as_percentage() {
        let report = SentimentReport {
            sentiment: SentimentLabel::Positive,
            score: 0.5,
            confidence: 0.67,
            positive_count: 3,
            negative_count: 1,
        };
        assert_eq!(
            render_sentiment(&report),
            "😊 POSITIVE\nScore: 0.5 | Confidence: 67%\nPositive: 3 | Negative: 1"
        );
    }

    #[test]
    fn test_render_lemma_skips_missing_affixes() {
        let lemma = Lemma {
            original: "mihinana".into(),
            lemma: "hinana".into(),
            prefix: Some("mi".into()),
            suffix: None,
            kind: "derived".into(),
        };
        assert_eq!(
            render_lemma(&lemma),
            "Word: mihinana\nRoot: hinana\nPrefix: mi\nType: derived"
        );
    }

    #[test]
    fn test_render_phonetics_lists_errors() {
        let report = PhoneticsReport {
            is_valid: false,
            errors: vec!["forbidden combination: nb".into()],
        };
        assert_eq!(
            render_phonetics("anbo", &report),
            "anbo: breaks the phonotactic rules\n- forbidden combination: nb"
        );
    }
}
