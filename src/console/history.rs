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

//! Command history ring with up/down traversal.
//!
//! A single trailing empty-string sentinel always follows the real entries: it
//! is the slot "after the last submission", so navigating down past history
//! lands on an empty editable line instead of running off the end. Out-of-range
//! traversal is silently absorbed — a terminal's history scroll never errors.

#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
    pointer: usize,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submitted line and reposition the pointer at the sentinel.
    ///
    /// Empty lines are ignored. The sentinel is removed and re-appended so
    /// only one trailing blank slot ever exists, regardless of how many times
    /// lines are pushed.
    pub fn push(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        self.entries.retain(|e| !e.is_empty());
        self.entries.push(line.to_string());
        self.entries.push(String::new());
        self.pointer = self.entries.len() - 1;
    }

    /// Move the pointer one entry back, returning the recalled line.
    /// Saturates at the oldest entry.
    pub fn up(&mut self) -> Option<&str> {
        if self.pointer == 0 {
            return None;
        }
        self.pointer -= 1;
        self.entries.get(self.pointer).map(String::as_str)
    }

    /// Move the pointer one entry forward, returning the recalled line.
    /// Saturates at the trailing sentinel.
    pub fn down(&mut self) -> Option<&str> {
        if self.pointer + 1 >= self.entries.len() {
            return None;
        }
        self.pointer += 1;
        self.entries.get(self.pointer).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.pointer = 0;
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn pointer(&self) -> usize {
        self.pointer
    }
}
