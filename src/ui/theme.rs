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

//! Skins: the Rust-native replacement for the stylesheet variants.
//!
//! Style tags on printed runs stay symbolic (`"green"`, `"error"`, ...); the
//! active skin resolves them to concrete colors at render time.

use ratatui::style::{Color, Modifier, Style};

// Win skin palette (cmd-like)
const WIN_BG: Color = Color::Rgb(12, 12, 12);
const WIN_FG: Color = Color::Rgb(204, 204, 204);

// Linux skin palette (gnome-terminal-like)
const LINUX_BG: Color = Color::Rgb(48, 10, 36);
const LINUX_FG: Color = Color::Rgb(238, 238, 236);

const ERROR_FG: Color = Color::Rgb(222, 56, 43);

/// Predefined console skins, mirroring the two stylesheet variants shipped
/// with the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Skin {
    #[default]
    Win,
    Linux,
}

impl Skin {
    #[must_use]
    pub fn background(self) -> Color {
        match self {
            Self::Win => WIN_BG,
            Self::Linux => LINUX_BG,
        }
    }

    #[must_use]
    pub fn foreground(self) -> Color {
        match self {
            Self::Win => WIN_FG,
            Self::Linux => LINUX_FG,
        }
    }

    /// Default style for untagged text.
    #[must_use]
    pub fn base_style(self) -> Style {
        Style::default().fg(self.foreground()).bg(self.background())
    }

    /// Resolve a single style tag. Unknown tags fall back to the base
    /// foreground, so stray tags degrade gracefully instead of erroring.
    #[must_use]
    pub fn color_for_tag(self, tag: &str) -> Color {
        match tag {
            "error" => ERROR_FG,
            "green" => Color::Rgb(57, 181, 74),
            "purple" => Color::Rgb(180, 142, 255),
            "blue" => Color::Rgb(0, 111, 184),
            "yellow" => Color::Rgb(255, 199, 6),
            "cyan" => Color::Rgb(44, 181, 233),
            _ => self.foreground(),
        }
    }

    /// Resolve a run's tag set. The last color-bearing tag wins; the `bold`
    /// tag stacks as a modifier.
    #[must_use]
    pub fn style_for(self, tags: &[String]) -> Style {
        let mut style = self.base_style();
        for tag in tags {
            if tag == "bold" {
                style = style.add_modifier(Modifier::BOLD);
            } else {
                style = style.fg(self.color_for_tag(tag));
            }
        }
        style
    }
}
