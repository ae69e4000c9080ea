//! Text helpers shared by the pipelines

/// Split text into whitespace-separated tokens, in document order
///
/// Punctuation stays attached to its token. The spelling service decides
/// what a trailing comma means.
pub fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Shorten `s` to at most `max` chars, marking the cut with an ellipsis
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_splits_on_any_whitespace() {
        assert_eq!(
            words("Salama  e!\nMalagasy\taho"),
            vec!["Salama", "e!", "Malagasy", "aho"]
        );
    }

    #[test]
    fn test_words_of_blank_text_is_empty() {
        assert!(words("").is_empty());
        assert!(words(" \n\t\n").is_empty());
    }

    #[test]
    fn test_truncate_chars_keeps_short_strings() {
        assert_eq!(truncate_chars("aho", 3), "aho");
        assert_eq!(truncate_chars("", 0), "");
    }

    #[test]
    fn test_truncate_chars_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("négatif", 4), "nég…");
        assert_eq!(truncate_chars("négatif", 4).chars().count(), 4);
    }
}
