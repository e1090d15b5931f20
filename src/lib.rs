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

//! An embeddable, skinnable console widget for [`ratatui`].
//!
//! The widget simulates a terminal/REPL session inside a scrollable styled-text
//! area: a prompt is printed at the start of every input line, caret movement
//! and deletion are clamped so they never erase into the prompt, submitted
//! lines are recorded in a navigable history ring, and an in-band trigger
//! token switches the line into masked (secret) input where the real
//! keystrokes are buffered out of the visible document.
//!
//! The host application owns the event loop: it feeds crossterm events into
//! [`console::keys::handle_event`], calls [`Console::tick`] once per loop
//! iteration, and renders with [`ui::render`].

pub mod console;
pub mod error;
pub mod text;
pub mod ui;

pub use console::handle::{ConsoleHandle, Printer};
pub use console::{Console, ContextMenu, ERROR_TAG, ReadyPolicy, ScrollbarPolicy};
pub use error::ConsoleError;
pub use text::{StyledRun, StyledText, StyledTextBuilder};
pub use ui::theme::Skin;
