// tui-console — an embeddable console widget for ratatui
// Copyright (C) 2026  tui-console developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The paragraph-addressable styled-text document the console edits.
//!
//! Positions are `(major, minor)`: paragraph index and zero-based character
//! column. Every mutation records a [`TextChange`]; the console drains the
//! pending changes after each operation and feeds them to the mask engine,
//! which is how the engine observes edits it did not itself perform.

/// A contiguous range of one paragraph carrying style tags.
/// `start`/`end` are character columns, `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSpan {
    pub start: usize,
    pub end: usize,
    pub tags: Vec<String>,
}

#[derive(Debug, Default)]
pub struct Paragraph {
    text: String,
    spans: Vec<StyleSpan>,
}

impl Paragraph {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn spans(&self) -> &[StyleSpan] {
        &self.spans
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// One atomic document change: `removed` was deleted at `(major, from)` and
/// `inserted` took its place. Pure insertions have an empty `removed`, pure
/// deletions an empty `inserted`; a change with both is a replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChange {
    pub major: usize,
    pub from: usize,
    pub inserted: String,
    pub removed: String,
}

#[derive(Debug)]
pub struct Document {
    paragraphs: Vec<Paragraph>,
    caret_major: usize,
    caret_minor: usize,
    pending: Vec<TextChange>,
    follow_bottom: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self {
            paragraphs: vec![Paragraph::default()],
            caret_major: 0,
            caret_minor: 0,
            pending: Vec::new(),
            follow_bottom: true,
        }
    }

    #[must_use]
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    #[must_use]
    pub fn paragraph(&self, major: usize) -> Option<&Paragraph> {
        self.paragraphs.get(major)
    }

    #[must_use]
    pub fn paragraph_text(&self, major: usize) -> &str {
        self.paragraphs.get(major).map_or("", |p| p.text.as_str())
    }

    #[must_use]
    pub fn paragraph_len(&self, major: usize) -> usize {
        self.paragraphs.get(major).map_or(0, Paragraph::len)
    }

    /// Caret position as `(major, minor)`.
    #[must_use]
    pub fn caret(&self) -> (usize, usize) {
        (self.caret_major, self.caret_minor)
    }

    /// Move the caret, clamping to valid paragraph/column bounds.
    pub fn move_to(&mut self, major: usize, minor: usize) {
        self.caret_major = major.min(self.paragraphs.len().saturating_sub(1));
        self.caret_minor = minor.min(self.paragraph_len(self.caret_major));
    }

    /// Insert single-line text at the caret, advancing it past the insertion.
    pub fn insert_at_caret(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let major = self.caret_major;
        let col = self.caret_minor;
        self.splice(major, col, col, text);
        self.caret_minor = col + text.chars().count();
    }

    /// Append single-line text at the end of the last paragraph and place the
    /// caret after it.
    pub fn append_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let major = self.paragraphs.len() - 1;
        let col = self.paragraph_len(major);
        self.splice(major, col, col, text);
        self.caret_major = major;
        self.caret_minor = col + text.chars().count();
    }

    /// Delete `[from, to)` of a paragraph.
    pub fn delete_range(&mut self, major: usize, from: usize, to: usize) {
        if from >= to {
            return;
        }
        self.splice(major, from, to, "");
        if self.caret_major == major && self.caret_minor > from {
            self.caret_minor = self.caret_minor.saturating_sub(to - from).max(from);
        }
    }

    /// Delete the character left of the caret, if any.
    pub fn delete_prev_char(&mut self) {
        if self.caret_minor == 0 {
            return;
        }
        let (major, minor) = (self.caret_major, self.caret_minor);
        self.splice(major, minor - 1, minor, "");
        self.caret_minor = minor - 1;
    }

    /// Replace `[from, to)` of a paragraph with `text`, recording a single
    /// replace-type change. The caret lands after the inserted text.
    pub fn replace_range(&mut self, major: usize, from: usize, to: usize, text: &str) {
        self.splice(major, from, to, text);
        self.caret_major = major.min(self.paragraphs.len() - 1);
        self.caret_minor = from + text.chars().count();
    }

    /// Start a fresh paragraph at the end of the document and move the caret
    /// to its first column.
    pub fn new_paragraph(&mut self) {
        let major = self.paragraphs.len() - 1;
        let col = self.paragraph_len(major);
        self.pending.push(TextChange {
            major,
            from: col,
            inserted: "\n".to_string(),
            removed: String::new(),
        });
        self.paragraphs.push(Paragraph::default());
        self.caret_major = self.paragraphs.len() - 1;
        self.caret_minor = 0;
    }

    /// Tag `[from, to)` of a paragraph with style tags, replacing any styles
    /// previously covering that range.
    pub fn set_style(&mut self, major: usize, from: usize, to: usize, tags: &[String]) {
        if from >= to {
            return;
        }
        self.clear_style(major, from, to);
        if let Some(p) = self.paragraphs.get_mut(major) {
            p.spans.push(StyleSpan { start: from, end: to, tags: tags.to_vec() });
            p.spans.sort_by_key(|s| s.start);
        }
    }

    /// Remove styles from `[from, to)` of a paragraph, trimming spans that
    /// straddle the range boundaries.
    pub fn clear_style(&mut self, major: usize, from: usize, to: usize) {
        let Some(p) = self.paragraphs.get_mut(major) else { return };
        let mut kept = Vec::with_capacity(p.spans.len());
        for span in p.spans.drain(..) {
            if span.end <= from || span.start >= to {
                kept.push(span);
                continue;
            }
            if span.start < from {
                kept.push(StyleSpan { start: span.start, end: from, tags: span.tags.clone() });
            }
            if span.end > to {
                kept.push(StyleSpan { start: to, end: span.end, tags: span.tags });
            }
        }
        p.spans = kept;
    }

    /// Discard all content, leaving a single empty paragraph.
    pub fn clear(&mut self) {
        let removed: String = self
            .paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        if !removed.is_empty() {
            self.pending.push(TextChange {
                major: 0,
                from: 0,
                inserted: String::new(),
                removed,
            });
        }
        self.paragraphs = vec![Paragraph::default()];
        self.caret_major = 0;
        self.caret_minor = 0;
    }

    /// Drain the pending change records.
    pub fn take_changes(&mut self) -> Vec<TextChange> {
        std::mem::take(&mut self.pending)
    }

    /// Ask the renderer to keep the view pinned to the last paragraph.
    pub fn scroll_to_bottom(&mut self) {
        self.follow_bottom = true;
    }

    pub fn set_follow_bottom(&mut self, follow: bool) {
        self.follow_bottom = follow;
    }

    #[must_use]
    pub fn follow_bottom(&self) -> bool {
        self.follow_bottom
    }

    /// Core single-paragraph edit: replace chars `[from, to)` with `text`,
    /// shift style spans, and record the change.
    fn splice(&mut self, major: usize, from: usize, to: usize, text: &str) {
        let Some(p) = self.paragraphs.get_mut(major) else { return };
        let from = from.min(p.len());
        let to = to.clamp(from, p.len());
        let byte_from = char_to_byte_index(&p.text, from);
        let byte_to = char_to_byte_index(&p.text, to);
        let removed = p.text[byte_from..byte_to].to_string();
        p.text.replace_range(byte_from..byte_to, text);

        let deleted = to - from;
        let inserted = text.chars().count();
        let mut kept = Vec::with_capacity(p.spans.len());
        for span in p.spans.drain(..) {
            let start = shift_col(span.start, from, to, deleted, inserted);
            let end = shift_col(span.end, from, to, deleted, inserted);
            if start < end {
                kept.push(StyleSpan { start, end, tags: span.tags });
            }
        }
        p.spans = kept;

        self.pending.push(TextChange {
            major,
            from,
            inserted: text.to_string(),
            removed,
        });
    }
}

/// Shift a span boundary column across an edit that replaced `[from, to)`
/// (`deleted` chars) with `inserted` chars.
fn shift_col(col: usize, from: usize, to: usize, deleted: usize, inserted: usize) -> usize {
    if col <= from {
        col
    } else if col >= to {
        col - deleted + inserted
    } else {
        from + inserted
    }
}

/// Convert a character index to a byte index within a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}
