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

//! The console line editor: a prompt-aware, history-navigable, maskable input
//! surface layered on a paragraph document it does not fully control.

pub mod boundary;
pub mod document;
pub mod handle;
pub mod history;
pub mod keys;
pub mod mask;

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::error::ConsoleError;
use crate::text::strings::{self, Piece};
use crate::text::{StyledText, StyledTextBuilder};
use crate::ui::theme::Skin;
use document::Document;
use handle::{ConsoleHandle, ConsoleOp};
use history::History;
use mask::{MASK_CHAR, MASK_TRIGGER, MaskEngine};

/// Style tag applied by [`Console::printerr`].
pub const ERROR_TAG: &str = "error";

/// What happens after a submission.
///
/// The default reprints the prompt only when the submitted line was empty
/// (the host's callback is expected to call `ready()` once it is done
/// producing output). `AfterEverySubmit` reprints unconditionally, for hosts
/// whose callbacks never touch the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadyPolicy {
    #[default]
    OnEmptySubmit,
    AfterEverySubmit,
}

/// Vertical scrollbar visibility, mirroring the scroll-pane policies of
/// conventional GUI toolkits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollbarPolicy {
    #[default]
    Always,
    AsNeeded,
    Never,
}

/// A context menu shown on secondary click. Presentation only — activation is
/// the host's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextMenu {
    pub items: Vec<String>,
}

/// The console widget state machine.
///
/// Single-thread affine: all methods must run on the thread that owns the
/// host event loop. Worker threads print through a [`ConsoleHandle`], whose
/// queued operations are applied by [`Console::tick`].
pub struct Console {
    doc: Document,
    history: History,
    mask: MaskEngine,
    prefix: Option<StyledText>,
    callback: Option<Box<dyn FnMut(String)>>,
    locked: bool,
    ready_policy: ReadyPolicy,
    wrap: bool,
    scrollbar: ScrollbarPolicy,
    context_menu: Option<ContextMenu>,
    menu_at: Option<(u16, u16)>,
    skin: Skin,
    op_tx: UnboundedSender<ConsoleOp>,
    op_rx: UnboundedReceiver<ConsoleOp>,
    print_lock: Arc<Mutex<()>>,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    #[must_use]
    pub fn new() -> Self {
        Self::with_skin(Skin::default())
    }

    #[must_use]
    pub fn with_skin(skin: Skin) -> Self {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        Self {
            doc: Document::new(),
            history: History::new(),
            mask: MaskEngine::new(),
            prefix: None,
            callback: None,
            locked: false,
            ready_policy: ReadyPolicy::default(),
            wrap: true,
            scrollbar: ScrollbarPolicy::default(),
            context_menu: None,
            menu_at: None,
            skin,
            op_tx,
            op_rx,
            print_lock: Arc::new(Mutex::new(())),
        }
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Set the callback invoked with each submitted line.
    ///
    /// The callback runs synchronously on the thread that triggered the
    /// submission; hosts that must not block their event loop should hand the
    /// line to a worker and print results through a [`ConsoleHandle`].
    pub fn set_callback(&mut self, callback: impl FnMut(String) + 'static) {
        self.callback = Some(Box::new(callback));
    }

    /// Set the prompt printed at the start of each input line.
    ///
    /// The prompt's last line must end in whitespace so the boundary tracker
    /// can split prompt from input by prefix comparison; a single space run is
    /// appended if it does not.
    pub fn set_prefix(&mut self, prefix: StyledText) -> Result<(), ConsoleError> {
        if prefix.is_empty() {
            return Err(ConsoleError::EmptyPrefix);
        }
        if prefix.join().is_empty() {
            return Err(ConsoleError::BlankPrefix);
        }
        self.prefix = Some(if prefix.last_line().ends_with(' ') {
            prefix
        } else {
            StyledTextBuilder::from(prefix).whitespace().build()
        });
        Ok(())
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&StyledText> {
        self.prefix.as_ref()
    }

    pub fn set_ready_policy(&mut self, policy: ReadyPolicy) {
        self.ready_policy = policy;
    }

    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    #[must_use]
    pub fn is_wrap(&self) -> bool {
        self.wrap
    }

    pub fn set_scrollbar_policy(&mut self, policy: ScrollbarPolicy) {
        self.scrollbar = policy;
    }

    #[must_use]
    pub fn scrollbar_policy(&self) -> ScrollbarPolicy {
        self.scrollbar
    }

    pub fn set_context_menu(&mut self, menu: Option<ContextMenu>) {
        self.context_menu = menu;
    }

    #[must_use]
    pub fn context_menu(&self) -> Option<&ContextMenu> {
        self.context_menu.as_ref()
    }

    #[must_use]
    pub fn skin(&self) -> Skin {
        self.skin
    }

    // ------------------------------------------------------------------
    // Lock state
    // ------------------------------------------------------------------

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    // ------------------------------------------------------------------
    // Editing operations (bounded by the prompt boundary)
    // ------------------------------------------------------------------

    /// Minimum editable column on the current paragraph. Re-derived on every
    /// call — the prompt may not have been printed yet on this line.
    #[must_use]
    pub fn min_minor(&self) -> usize {
        let (major, _) = self.doc.caret();
        boundary::min_editable_column(self.doc.paragraph_text(major), self.prefix.as_ref())
    }

    /// Insert a typed character at the caret.
    pub fn insert_char(&mut self, c: char) {
        if self.locked {
            return;
        }
        self.doc.insert_at_caret(&c.to_string());
        self.pump_changes();
    }

    /// Delete one character left of the caret, refusing to erase into the
    /// prompt.
    pub fn backspace(&mut self) {
        if self.locked {
            return;
        }
        self.doc.scroll_to_bottom();
        let (_, minor) = self.doc.caret();
        if self.min_minor() < minor {
            self.doc.delete_prev_char();
            self.pump_changes();
        }
    }

    /// Move the caret one column left, clamped at the prompt boundary.
    pub fn move_left(&mut self) {
        if self.locked {
            return;
        }
        self.doc.scroll_to_bottom();
        let (major, minor) = self.doc.caret();
        if self.min_minor() < minor {
            self.doc.move_to(major, minor - 1);
        }
    }

    /// Move the caret one column right, clamped at the paragraph end.
    pub fn move_right(&mut self) {
        if self.locked {
            return;
        }
        self.doc.scroll_to_bottom();
        let (major, minor) = self.doc.caret();
        if minor != self.doc.paragraph_len(major) {
            self.doc.move_to(major, minor + 1);
        }
    }

    /// Replace the editable region with the previous history entry.
    pub fn history_up(&mut self) {
        if self.locked {
            return;
        }
        self.doc.scroll_to_bottom();
        let Some(entry) = self.history.up().map(str::to_string) else { return };
        self.replace_editable_region(&entry);
    }

    /// Replace the editable region with the next history entry.
    pub fn history_down(&mut self) {
        if self.locked {
            return;
        }
        self.doc.scroll_to_bottom();
        let Some(entry) = self.history.down().map(str::to_string) else { return };
        self.replace_editable_region(&entry);
    }

    fn replace_editable_region(&mut self, entry: &str) {
        let (major, _) = self.doc.caret();
        let min = self.min_minor();
        let len = self.doc.paragraph_len(major);
        tracing::debug!(pointer = self.history.pointer(), "History recall");
        self.doc.replace_range(major, min, len, entry);
        self.pump_changes();
    }

    /// Insert clipboard-style text at the caret, flattened to a single line.
    /// Multi-line paste is explicitly disallowed; all line separators are
    /// stripped.
    pub fn paste_text(&mut self, text: &str) {
        if self.locked {
            return;
        }
        let flat = strings::remove_line_separators(text);
        if flat.is_empty() {
            return;
        }
        self.doc.insert_at_caret(&flat);
        self.pump_changes();
    }

    /// Read the system clipboard and paste its text contents.
    pub fn paste_from_clipboard(&mut self) {
        if let Ok(mut clipboard) = arboard::Clipboard::new()
            && let Ok(text) = clipboard.get_text()
        {
            self.paste_text(&text);
        }
    }

    /// Submit the current line: strip the prompt, reconcile the mask buffer,
    /// record history, emit a newline, and invoke the callback.
    ///
    /// A masked submission (non-empty mask buffer) has the visible mask run
    /// replaced by the buffered secret and is never pushed to history.
    pub fn submit(&mut self) {
        if self.locked {
            return;
        }
        let (major, _) = self.doc.caret();
        let raw = self.doc.paragraph_text(major).to_string();
        let stripped = boundary::strip_prefix(&raw, self.prefix.as_ref()).to_string();

        let buffered = self.mask.buffer_len() > 0;
        let text = if buffered {
            let secret = self.mask.take_buffer();
            strings::replace_trailing_run(&stripped, &secret, MASK_CHAR)
        } else {
            stripped
        };
        self.mask.disarm();

        self.newline();
        self.locked = true;

        if text.is_empty() {
            self.ready();
        } else {
            if !buffered {
                self.history.push(&text);
            }
            tracing::debug!(masked = buffered, "Line submitted");
            if let Some(mut cb) = self.callback.take() {
                cb(text);
                self.callback = Some(cb);
            }
            if self.ready_policy == ReadyPolicy::AfterEverySubmit {
                self.ready();
            }
        }
        self.pump_changes();
    }

    /// Current editable line, with the prompt stripped.
    #[must_use]
    pub fn text(&self) -> String {
        let (major, _) = self.doc.caret();
        boundary::strip_prefix(self.doc.paragraph_text(major), self.prefix.as_ref()).to_string()
    }

    // ------------------------------------------------------------------
    // Mouse
    // ------------------------------------------------------------------

    /// Primary click: dismiss an open context menu.
    pub fn primary_click(&mut self) {
        self.menu_at = None;
    }

    /// Secondary click: open the configured context menu at the click
    /// position.
    pub fn secondary_click(&mut self, column: u16, row: u16) {
        if self.context_menu.is_some() {
            self.menu_at = Some((column, row));
        }
    }

    /// Where the context menu is currently open, if anywhere.
    #[must_use]
    pub fn menu_position(&self) -> Option<(u16, u16)> {
        self.menu_at
    }

    // ------------------------------------------------------------------
    // Programmatic output
    // ------------------------------------------------------------------

    /// Print unstyled text at the current caret position. Embedded newlines
    /// start fresh paragraphs.
    pub fn print(&mut self, text: &str) {
        self.print_runs(text, &[]);
    }

    /// Print text carrying the given style tags.
    pub fn print_tagged(&mut self, text: &str, tags: &[&str]) {
        let tags: Vec<String> = tags.iter().map(ToString::to_string).collect();
        self.print_runs(text, &tags);
    }

    /// Print each run of a [`StyledText`] in order.
    pub fn print_styled(&mut self, styled: &StyledText) {
        for run in styled.runs() {
            self.print_runs(run.text(), run.tags());
        }
    }

    /// Print text followed by a newline.
    pub fn println(&mut self, text: &str) {
        self.print(text);
        self.newline();
    }

    /// Print tagged text followed by a newline.
    pub fn println_tagged(&mut self, text: &str, tags: &[&str]) {
        self.print_tagged(text, tags);
        self.newline();
    }

    /// Print text in the fixed error style, followed by a newline.
    pub fn printerr(&mut self, text: &str) {
        self.print_tagged(text, &[ERROR_TAG]);
        self.newline();
    }

    /// Start a fresh paragraph.
    pub fn newline(&mut self) {
        self.doc.new_paragraph();
        self.doc.scroll_to_bottom();
        self.pump_changes();
    }

    /// Print the prompt (if configured) and unlock the console.
    ///
    /// If the current line already has content past the boundary, a newline
    /// is emitted first so the prompt always starts a line of its own.
    pub fn ready(&mut self) {
        if let Some(prefix) = self.prefix.clone() {
            let (_, minor) = self.doc.caret();
            if self.min_minor() < minor {
                self.newline();
            }
            self.print_styled(&prefix);
        }
        self.unlock();
        self.doc.scroll_to_bottom();
        self.pump_changes();
    }

    /// Discard all document content. History is unaffected.
    pub fn clear(&mut self) {
        self.doc.clear();
        self.pump_changes();
    }

    /// Forget all recorded history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn print_runs(&mut self, text: &str, tags: &[String]) {
        for piece in strings::split_pieces(text) {
            match piece {
                Piece::Newline => self.newline(),
                Piece::Text(t) => {
                    let major = self.doc.paragraph_count() - 1;
                    let from = self.doc.paragraph_len(major);
                    self.doc.append_text(&t);
                    let to = self.doc.paragraph_len(major);
                    if tags.is_empty() {
                        self.doc.clear_style(major, from, to);
                    } else {
                        self.doc.set_style(major, from, to, tags);
                    }
                }
            }
        }
        self.doc.scroll_to_bottom();
        self.pump_changes();
    }

    // ------------------------------------------------------------------
    // Event-loop integration
    // ------------------------------------------------------------------

    /// A cloneable, `Send` capability for printing from worker threads.
    /// Operations are fire-and-forget; they are applied on the owner thread
    /// by [`Self::tick`].
    #[must_use]
    pub fn handle(&self) -> ConsoleHandle {
        ConsoleHandle::new(self.op_tx.clone(), Arc::clone(&self.print_lock))
    }

    /// Apply queued handle operations and run the debounced mask trigger
    /// scan. Call once per host event-loop iteration.
    pub fn tick(&mut self) {
        self.drain_handle_ops();
        if self.mask.scan_due() {
            self.mask.scan_done();
            self.scan_for_trigger();
        }
    }

    fn drain_handle_ops(&mut self) {
        while let Ok(op) = self.op_rx.try_recv() {
            match op {
                ConsoleOp::Print { text, tags } => self.print_runs(&text, &tags),
                ConsoleOp::Println { text, tags } => {
                    self.print_runs(&text, &tags);
                    self.newline();
                }
                ConsoleOp::PrintErr(text) => self.printerr(&text),
                ConsoleOp::PrintStyled(styled) => self.print_styled(&styled),
                ConsoleOp::Newline => self.newline(),
                ConsoleOp::Ready => self.ready(),
                ConsoleOp::Clear => self.clear(),
                ConsoleOp::Lock => self.lock(),
                ConsoleOp::Unlock => self.unlock(),
            }
        }
    }

    /// Inspect the settled tail of the current line for the mask trigger
    /// token; on a match, delete the token (never below the boundary) and
    /// engage masking.
    fn scan_for_trigger(&mut self) {
        let (major, _) = self.doc.caret();
        if !self.doc.paragraph_text(major).ends_with(MASK_TRIGGER) {
            return;
        }
        let len = self.doc.paragraph_len(major);
        let trigger_len = MASK_TRIGGER.chars().count();
        let from = self.min_minor().max(len.saturating_sub(trigger_len));
        self.mask.engage();
        self.doc.delete_range(major, from, len);
        self.pump_changes();
    }

    /// Drain pending document changes into the mask engine, looping until the
    /// engine's own substitutions stop producing new changes.
    ///
    /// Replace-type changes (insert and delete in one edit) are skipped:
    /// they are either the engine's own substitutions or history replaces,
    /// neither of which is masked input.
    fn pump_changes(&mut self) {
        loop {
            let changes = self.doc.take_changes();
            if changes.is_empty() {
                break;
            }
            for change in changes {
                self.mask.note_edit();
                if !self.mask.is_armed() {
                    continue;
                }
                let inserted = !change.inserted.is_empty();
                let removed = !change.removed.is_empty();
                if inserted && removed {
                    continue;
                }
                if inserted {
                    // Paragraph breaks are not maskable input.
                    if change.inserted == "\n" {
                        continue;
                    }
                    self.mask.push_str(&change.inserted);
                    let n = change.inserted.chars().count();
                    let masked = MASK_CHAR.to_string().repeat(n);
                    self.doc.replace_range(change.major, change.from, change.from + n, &masked);
                } else if removed && self.mask.buffer_len() > 0 {
                    self.mask.pop(change.removed.chars().count());
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Introspection (used by the renderer and by tests)
    // ------------------------------------------------------------------

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether masked input is currently engaged.
    #[must_use]
    pub fn is_masking(&self) -> bool {
        self.mask.is_armed()
    }

    /// Number of secret characters currently buffered.
    #[must_use]
    pub fn mask_buffer_len(&self) -> usize {
        self.mask.buffer_len()
    }

    /// Force the debounced trigger scan to run now, regardless of idle time.
    /// Intended for hosts that drain events in discrete batches (and tests).
    pub fn settle_scan(&mut self) {
        self.mask.scan_done();
        self.scan_for_trigger();
    }
}
