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

//! Cross-thread output: fire-and-forget operations marshalled onto the
//! console's owner thread.
//!
//! The document is single-thread affine, so worker threads (typically the
//! submit callback running on a background thread) never touch it directly.
//! They enqueue [`ConsoleOp`]s through a [`ConsoleHandle`]; the owner thread
//! applies them in [`crate::Console::tick`]. Callers do not block and receive
//! no completion signal — failures past the channel cannot surface to the
//! original caller, they are only logged.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::mpsc::UnboundedSender;

use crate::text::StyledText;

#[derive(Debug, Clone)]
pub enum ConsoleOp {
    Print { text: String, tags: Vec<String> },
    Println { text: String, tags: Vec<String> },
    PrintErr(String),
    PrintStyled(StyledText),
    Newline,
    Ready,
    Clear,
    Lock,
    Unlock,
}

/// Cloneable, `Send` capability for driving console output from any thread.
///
/// A coarse mutex serializes each call's enqueue sequence, so two worker
/// threads printing concurrently cannot interleave the sub-operations of a
/// single logical write (a styled multi-run print, a print-then-newline).
#[derive(Clone)]
pub struct ConsoleHandle {
    tx: UnboundedSender<ConsoleOp>,
    lock: Arc<Mutex<()>>,
}

impl ConsoleHandle {
    pub(crate) fn new(tx: UnboundedSender<ConsoleOp>, lock: Arc<Mutex<()>>) -> Self {
        Self { tx, lock }
    }

    pub fn print(&self, text: &str) {
        self.send_locked(&[ConsoleOp::Print { text: text.to_string(), tags: Vec::new() }]);
    }

    pub fn print_tagged(&self, text: &str, tags: &[&str]) {
        self.send_locked(&[ConsoleOp::Print {
            text: text.to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
        }]);
    }

    pub fn println(&self, text: &str) {
        self.send_locked(&[ConsoleOp::Println { text: text.to_string(), tags: Vec::new() }]);
    }

    pub fn println_tagged(&self, text: &str, tags: &[&str]) {
        self.send_locked(&[ConsoleOp::Println {
            text: text.to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
        }]);
    }

    pub fn printerr(&self, text: &str) {
        self.send_locked(&[ConsoleOp::PrintErr(text.to_string())]);
    }

    pub fn print_styled(&self, styled: StyledText) {
        self.send_locked(&[ConsoleOp::PrintStyled(styled)]);
    }

    pub fn newline(&self) {
        self.send_locked(&[ConsoleOp::Newline]);
    }

    /// Reprint the prompt and unlock — the usual last call of a submit
    /// callback.
    pub fn ready(&self) {
        self.send_locked(&[ConsoleOp::Ready]);
    }

    pub fn clear(&self) {
        self.send_locked(&[ConsoleOp::Clear]);
    }

    pub fn lock(&self) {
        self.send_locked(&[ConsoleOp::Lock]);
    }

    pub fn unlock(&self) {
        self.send_locked(&[ConsoleOp::Unlock]);
    }

    /// Writer facade with no default style.
    #[must_use]
    pub fn out(&self) -> Printer {
        Printer { handle: self.clone(), tags: Vec::new() }
    }

    /// Writer facade that applies the fixed error style to everything.
    #[must_use]
    pub fn err(&self) -> Printer {
        Printer { handle: self.clone(), tags: vec![crate::console::ERROR_TAG.to_string()] }
    }

    fn send_locked(&self, ops: &[ConsoleOp]) {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        for op in ops {
            if self.tx.send(op.clone()).is_err() {
                tracing::error!("Console dropped; output discarded");
                return;
            }
        }
    }
}

/// A narrow writer capability over a [`ConsoleHandle`] with a fixed set of
/// default tags.
///
/// Deliberately not an implementation of `std::io::Write`: the console is a
/// text surface, not a byte sink, and keeping the surface this small makes
/// misuse unrepresentable instead of a runtime error.
#[derive(Clone)]
pub struct Printer {
    handle: ConsoleHandle,
    tags: Vec<String>,
}

impl Printer {
    pub fn write(&self, text: &str) {
        let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        self.handle.print_tagged(text, &tags);
    }

    pub fn write_line(&self, text: &str) {
        let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        self.handle.println_tagged(text, &tags);
    }

    /// Write with explicit tags, overriding the printer's defaults.
    pub fn write_tagged(&self, text: &str, tags: &[&str]) {
        self.handle.print_tagged(text, tags);
    }
}
