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

use super::{StyledRun, StyledText};

/// Incremental builder for [`StyledText`].
///
/// Adjacent runs are never merged; each call appends a fresh run so the
/// original call order survives into the line/segment derivation.
#[derive(Debug, Default)]
pub struct StyledTextBuilder {
    runs: Vec<StyledRun>,
}

impl StyledTextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run of `text` carrying the given style tags.
    #[must_use]
    pub fn append(mut self, text: &str, tags: &[&str]) -> Self {
        self.runs.push(StyledRun::new(text, tags));
        self
    }

    /// Append an untagged run consisting of a single newline.
    #[must_use]
    pub fn newline(mut self) -> Self {
        self.runs.push(StyledRun::new("\n", &[]));
        self
    }

    /// Append an untagged run consisting of a single space.
    #[must_use]
    pub fn whitespace(mut self) -> Self {
        self.runs.push(StyledRun::new(" ", &[]));
        self
    }

    #[must_use]
    pub fn build(self) -> StyledText {
        StyledText::new(self.runs)
    }
}

impl From<StyledText> for StyledTextBuilder {
    /// Seed a builder with the runs of an existing `StyledText`, so more runs
    /// can be appended (used by the prompt whitespace normalization).
    fn from(styled: StyledText) -> Self {
        Self { runs: styled.runs().to_vec() }
    }
}
