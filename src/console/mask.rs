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

//! Masked (secret) input engine.
//!
//! The user arms masking by typing the trigger token at the end of the input
//! line. A debounced scan (edit-idle, like a paste-burst detector) spots the
//! token once typing settles, deletes it from the document, and engages the
//! engine. While engaged, each inserted character is pushed onto a hidden
//! buffer and replaced in the visible document with [`MASK_CHAR`]; each
//! deletion pops the buffer tail. The buffer length therefore always equals
//! the number of visible mask characters.

use std::time::{Duration, Instant};

/// Character shown in place of real keystrokes during masked input.
pub const MASK_CHAR: char = '*';

/// In-band token typed at the end of the line to engage masking. The token is
/// deleted from the document before the first masked character is read. There
/// is no escape mechanism for typing the literal token unmasked.
pub const MASK_TRIGGER: &str = ":msk";

/// Edit-idle interval after which the trigger scan runs. Keystrokes arriving
/// faster than this postpone the scan, so the token is only matched against a
/// settled line tail.
const SCAN_DEBOUNCE: Duration = Duration::from_millis(10);

#[derive(Debug)]
pub struct MaskEngine {
    armed: bool,
    buffer: Vec<char>,
    last_edit: Option<Instant>,
    scan_dirty: bool,
}

impl Default for MaskEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MaskEngine {
    #[must_use]
    pub fn new() -> Self {
        Self { armed: false, buffer: Vec::new(), last_edit: None, scan_dirty: false }
    }

    /// Whether masking is currently engaged.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn engage(&mut self) {
        tracing::debug!("Mask engaged");
        self.armed = true;
    }

    /// Disengage masking and discard whatever is buffered.
    pub fn disarm(&mut self) {
        if self.armed {
            tracing::debug!("Mask disarmed");
        }
        self.armed = false;
        self.buffer.clear();
    }

    /// Record that a document change happened; postpones the trigger scan.
    pub fn note_edit(&mut self) {
        self.last_edit = Some(Instant::now());
        self.scan_dirty = true;
    }

    /// Whether the trigger scan should run now: there are unscanned edits and
    /// the line has been idle past the debounce interval.
    #[must_use]
    pub fn scan_due(&self) -> bool {
        self.scan_dirty
            && self.last_edit.is_some_and(|last| last.elapsed() >= SCAN_DEBOUNCE)
    }

    /// Mark the pending edits as scanned.
    pub fn scan_done(&mut self) {
        self.scan_dirty = false;
    }

    /// Push the characters of an inserted span onto the hidden buffer.
    pub fn push_str(&mut self, inserted: &str) {
        self.buffer.extend(inserted.chars());
    }

    /// Pop `n` characters off the buffer tail. Deletions that outrun the
    /// buffer (e.g. erasing text typed before masking engaged) are absorbed.
    pub fn pop(&mut self, n: usize) {
        for _ in 0..n {
            if self.buffer.pop().is_none() {
                break;
            }
        }
    }

    #[must_use]
    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Drain the buffer into the secret string it spells.
    pub fn take_buffer(&mut self) -> String {
        self.buffer.drain(..).collect()
    }

    #[cfg(test)]
    pub(crate) fn backdate_last_edit(&mut self, by: Duration) {
        self.last_edit = Instant::now().checked_sub(by);
    }
}
