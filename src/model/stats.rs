//! Document statistics shown next to the editor

/// Word, character and line counts of the full document text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    /// Maximal runs of non-whitespace characters
    pub words: usize,
    /// Characters, in the same unit the document uses for offsets
    pub chars: usize,
    /// Newline-separated segments; a trailing newline opens one more line
    pub lines: usize,
}

impl DocumentStats {
    /// Recompute from the full text, final boundary included
    ///
    /// The empty trailing segment after a final `'\n'` counts as a line, so
    /// an empty document reports 2 lines.
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().count(),
            chars: text.chars().count(),
            lines: text.split('\n').count(),
        }
    }
}
