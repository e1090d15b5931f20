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

//! String helpers shared by the text and console modules.

pub const LINE_SEPARATOR_WINDOWS: &str = "\r\n";
pub const LINE_SEPARATOR_UNIX: &str = "\n";

/// Replace `\r\n` with `\n`.
#[must_use]
pub fn normalize_line_separators(s: &str) -> String {
    s.replace(LINE_SEPARATOR_WINDOWS, LINE_SEPARATOR_UNIX)
}

/// Remove every `\r\n` and `\n`. Pasted clipboard text is flattened to a
/// single line with this before insertion.
#[must_use]
pub fn remove_line_separators(s: &str) -> String {
    s.replace(LINE_SEPARATOR_WINDOWS, "").replace(LINE_SEPARATOR_UNIX, "")
}

/// One piece of a print payload after splitting at embedded newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Text(String),
    Newline,
}

/// Split `s` into text pieces and newline markers, preserving order.
///
/// `"a\nb"` becomes `[Text("a"), Newline, Text("b")]`; empty text pieces are
/// dropped, so `"\n\n"` is two `Newline`s with nothing in between.
#[must_use]
pub fn split_pieces(s: &str) -> Vec<Piece> {
    let normalized = normalize_line_separators(s);
    let mut pieces = Vec::new();
    let mut start = 0;
    for (i, ch) in normalized.char_indices() {
        if ch == '\n' {
            if start < i {
                pieces.push(Piece::Text(normalized[start..i].to_string()));
            }
            pieces.push(Piece::Newline);
            start = i + 1;
        }
    }
    if start < normalized.len() {
        pieces.push(Piece::Text(normalized[start..].to_string()));
    }
    pieces
}

/// Replace the last uninterrupted run of `c` in `s` with `replacement`.
///
/// This is the mask-reconciliation primitive: the visible document holds a run
/// of mask characters where the secret was typed, and on submit that run is
/// swapped for the hidden buffer contents. If `s` consists only of `c` (or is
/// empty), the whole string is replaced.
#[must_use]
pub fn replace_trailing_run(s: &str, replacement: &str, c: char) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut matched = false;
    for i in (0..chars.len()).rev() {
        if chars[i] == c {
            matched = true;
        } else if matched {
            let head: String = chars[..=i].iter().collect();
            return head + replacement;
        }
    }
    replacement.to_string()
}
