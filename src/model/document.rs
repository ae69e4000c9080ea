//! Document model - the text buffer behind the editing surface
//!
//! Mirrors the indexing of the rich-text widget it stands in for: offsets are
//! character indices and the text always ends with one implicit newline, the
//! *final boundary*. An empty document is `"\n"` with length 1.

use ropey::Rope;

/// A `(index, length)` range in characters
///
/// Only meaningful at the instant it is read; pipelines snapshot the selected
/// text instead of holding on to the range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub length: usize,
}

impl Selection {
    pub fn new(index: usize, length: usize) -> Self {
        Self { index, length }
    }

    /// Collapsed selection (a caret) at `index`
    pub fn caret(index: usize) -> Self {
        Self { index, length: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn end(&self) -> usize {
        self.index + self.length
    }
}

/// Operations the orchestration layer needs from an editing surface
pub trait EditingSurface {
    /// Full text, including the final boundary
    fn text(&self) -> String;
    fn selection(&self) -> Selection;
    /// Length in characters, including the final boundary
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() <= 1
    }
    fn text_in(&self, range: Selection) -> String;
    fn insert_text(&mut self, index: usize, text: &str);
    fn set_text(&mut self, text: &str);
    fn clear(&mut self) {
        self.set_text("");
    }
}

/// Document state - the text buffer and its revision marker
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer; always ends with `'\n'`
    pub buffer: Rope,
    /// Current selection, kept inside `0..len_chars`
    pub selection: Selection,
    /// Incremented on every mutation
    pub revision: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from_str(&with_final_boundary(text)),
            selection: Selection::default(),
            revision: 0,
        }
    }

    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    /// Offset of the final boundary: the last position text can be inserted at
    pub fn end_offset(&self) -> usize {
        self.len_chars().saturating_sub(1)
    }

    /// Full text trimmed of surrounding whitespace
    pub fn trimmed_text(&self) -> String {
        self.buffer.to_string().trim().to_string()
    }

    /// Text under the current selection, trimmed
    pub fn selected_text(&self) -> String {
        self.text_in(self.selection).trim().to_string()
    }

    /// Insert `text` at `index`, clamped to the final boundary
    ///
    /// Returns the offset the text was actually inserted at.
    pub fn insert(&mut self, index: usize, text: &str) -> usize {
        let at = index.min(self.end_offset());
        if text.is_empty() {
            return at;
        }
        self.buffer.insert(at, text);
        let inserted = text.chars().count();
        if at <= self.selection.index {
            self.selection.index += inserted;
        } else if at < self.selection.end() {
            self.selection.length += inserted;
        }
        self.bump();
        at
    }

    /// Insert right before the final boundary
    pub fn append(&mut self, text: &str) -> usize {
        self.insert(self.end_offset(), text)
    }

    /// Delete up to `len` characters at `index`; the final boundary survives
    ///
    /// Returns the number of characters removed.
    pub fn delete(&mut self, index: usize, len: usize) -> usize {
        let start = index.min(self.end_offset());
        let end = index.saturating_add(len).min(self.end_offset());
        if start >= end {
            return 0;
        }
        self.buffer.remove(start..end);
        let Selection { index: sel_start, length } = self.selection;
        let sel_end = sel_start + length;
        let before = end.min(sel_start).saturating_sub(start.min(sel_start));
        let inside = end.min(sel_end).saturating_sub(start.max(sel_start));
        self.selection = Selection::new(sel_start - before, length - inside);
        self.clamp_selection();
        self.bump();
        end - start
    }

    /// Replace the whole text, resetting the selection
    pub fn replace_all(&mut self, text: &str) {
        self.buffer = Rope::from_str(&with_final_boundary(text));
        self.selection = Selection::default();
        self.bump();
    }

    /// Set the selection, clamped so it never covers the final boundary
    pub fn select(&mut self, index: usize, length: usize) {
        self.selection = Selection::new(index, length);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let end = self.end_offset();
        let index = self.selection.index.min(end);
        let length = self.selection.length.min(end - index);
        self.selection = Selection::new(index, length);
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl EditingSurface for Document {
    fn text(&self) -> String {
        self.buffer.to_string()
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn len(&self) -> usize {
        self.len_chars()
    }

    fn text_in(&self, range: Selection) -> String {
        let len = self.len_chars();
        let start = range.index.min(len);
        let end = range.end().min(len);
        self.buffer.slice(start..end).to_string()
    }

    fn insert_text(&mut self, index: usize, text: &str) {
        self.insert(index, text);
    }

    fn set_text(&mut self, text: &str) {
        self.replace_all(text);
    }
}

fn with_final_boundary(text: &str) -> String {
    let mut owned = text.to_string();
    if !owned.ends_with('\n') {
        owned.push('\n');
    }
    owned
}
