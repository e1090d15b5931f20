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

//! Prompt boundary arithmetic.
//!
//! The boundary ("min minor") is the minimum character column the caret,
//! backspace, or a history replace may reach on the current paragraph. It is
//! re-derived from the live paragraph text on every use rather than cached:
//! right after a programmatic `clear` the prompt has not been reprinted yet,
//! and the boundary must be 0 until it is.

use crate::text::StyledText;

/// Minimum editable column for a paragraph under an optional prompt.
///
/// Returns the character length of the prompt's last line iff the paragraph
/// text starts with exactly that string; otherwise 0.
#[must_use]
pub fn min_editable_column(paragraph_text: &str, prefix: Option<&StyledText>) -> usize {
    let Some(prefix) = prefix else { return 0 };
    let last = prefix.last_line();
    if paragraph_text.starts_with(last.as_str()) {
        last.chars().count()
    } else {
        0
    }
}

/// Strip the prompt's last line off the front of a paragraph, if present.
#[must_use]
pub fn strip_prefix<'a>(paragraph_text: &'a str, prefix: Option<&StyledText>) -> &'a str {
    let Some(prefix) = prefix else { return paragraph_text };
    let last = prefix.last_line();
    paragraph_text.strip_prefix(last.as_str()).unwrap_or(paragraph_text)
}
