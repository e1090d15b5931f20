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

//! Styled text runs — the value type used for prompts and programmatic output.

mod builder;
pub mod strings;

pub use builder::StyledTextBuilder;

/// One run of text with a set of named style tags.
///
/// Tags are resolved to concrete [`ratatui::style::Style`]s by the active
/// [`crate::ui::theme::Skin`] at render time; the run itself stays
/// presentation-agnostic. Windows-style line breaks are normalized to `\n`
/// at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    text: String,
    tags: Vec<String>,
}

impl StyledRun {
    pub fn new(text: &str, tags: &[&str]) -> Self {
        Self {
            text: strings::normalize_line_separators(text),
            tags: tags.iter().map(ToString::to_string).collect(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// An ordered sequence of [`StyledRun`]s (insertion order = display order).
///
/// The concatenation of all run texts, split on `\n`, yields the line view
/// used by the prompt boundary arithmetic: [`Self::last_line`] is the string
/// the current paragraph is prefix-compared against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    runs: Vec<StyledRun>,
}

impl StyledText {
    pub(crate) fn new(runs: Vec<StyledRun>) -> Self {
        Self { runs }
    }

    #[must_use]
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Concatenation of all run texts.
    #[must_use]
    pub fn join(&self) -> String {
        self.runs.iter().map(StyledRun::text).collect()
    }

    #[must_use]
    pub fn first_line(&self) -> String {
        self.join().split('\n').next().unwrap_or_default().to_string()
    }

    #[must_use]
    pub fn last_line(&self) -> String {
        self.join().split('\n').next_back().unwrap_or_default().to_string()
    }
}
