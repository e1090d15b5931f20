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

/// Configuration errors raised synchronously at the call site.
///
/// Runtime interaction failures (backspacing into the prompt, navigating past
/// either end of history) are deliberately *not* errors — they are absorbed as
/// no-ops so fast typing and key-repeat never interrupt the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsoleError {
    #[error("prompt prefix must consist of at least one styled run")]
    EmptyPrefix,
    #[error("prompt prefix text must not be empty")]
    BlankPrefix,
}

impl ConsoleError {
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyPrefix => {
                "The prefix, if specified, must consist of at least one styled run."
            }
            Self::BlankPrefix => "The prefix, if specified, must contain visible text.",
        }
    }
}
