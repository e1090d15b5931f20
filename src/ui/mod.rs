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

//! Rendering glue: draws the console's document into a ratatui frame.
//!
//! Everything behavioral lives in [`crate::console`]; this module only maps
//! paragraphs and style spans to [`Line`]s, places the terminal cursor at the
//! caret, keeps the view pinned to the bottom, and draws the optional
//! scrollbar and context-menu popover.

pub mod theme;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Clear, List, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
};
use unicode_width::UnicodeWidthStr;

use crate::console::document::Paragraph as DocParagraph;
use crate::console::{Console, ScrollbarPolicy};

pub fn render(frame: &mut Frame, area: Rect, console: &Console) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let total = visual_line_count(console, area.width);
    let show_scrollbar = match console.scrollbar_policy() {
        ScrollbarPolicy::Always => true,
        ScrollbarPolicy::AsNeeded => total > area.height,
        ScrollbarPolicy::Never => false,
    };
    let text_area = if show_scrollbar {
        Rect { width: area.width.saturating_sub(1), ..area }
    } else {
        area
    };

    let skin = console.skin();
    let lines: Vec<Line> = (0..console.document().paragraph_count())
        .filter_map(|i| console.document().paragraph(i))
        .map(|p| paragraph_line(p, skin))
        .collect();

    let wrapped_total = visual_line_count(console, text_area.width);
    let offset = if console.document().follow_bottom() {
        wrapped_total.saturating_sub(text_area.height)
    } else {
        0
    };

    let mut paragraph = Paragraph::new(lines)
        .style(skin.base_style())
        .scroll((offset, 0));
    if console.is_wrap() {
        paragraph = paragraph.wrap(Wrap { trim: false });
    }
    frame.render_widget(paragraph, text_area);

    if show_scrollbar {
        let mut state = ScrollbarState::new(wrapped_total as usize).position(offset as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut state,
        );
    }

    if !console.is_locked() {
        place_cursor(frame, text_area, console, offset);
    }

    render_context_menu(frame, area, console);
}

/// Build one display line from a document paragraph, slicing the text at
/// style-span boundaries. Unstyled gaps get the skin's base style.
fn paragraph_line(p: &DocParagraph, skin: theme::Skin) -> Line<'static> {
    let chars: Vec<char> = p.text().chars().collect();
    let mut spans: Vec<Span> = Vec::new();
    let mut col = 0;
    for style_span in p.spans() {
        if style_span.start > col {
            let gap: String = chars[col..style_span.start].iter().collect();
            spans.push(Span::styled(gap, skin.base_style()));
        }
        let end = style_span.end.min(chars.len());
        if style_span.start < end {
            let text: String = chars[style_span.start..end].iter().collect();
            spans.push(Span::styled(text, skin.style_for(&style_span.tags)));
        }
        col = end.max(col);
    }
    if col < chars.len() {
        let tail: String = chars[col..].iter().collect();
        spans.push(Span::styled(tail, skin.base_style()));
    }
    Line::from(spans)
}

/// Number of visual lines the document occupies at the given width,
/// accounting for wrapping. Measured in display cells, so wide characters
/// count double.
#[must_use]
pub fn visual_line_count(console: &Console, width: u16) -> u16 {
    let doc = console.document();
    if !console.is_wrap() || width == 0 {
        return doc.paragraph_count() as u16;
    }
    let w = width as usize;
    let mut total: u16 = 0;
    for i in 0..doc.paragraph_count() {
        total = total.saturating_add(wrapped_rows(doc.paragraph_text(i).width(), w));
    }
    total
}

/// Rows a paragraph of the given display width occupies when wrapped, at
/// least 1. Cell-count estimation: word wrap moving a whole word down can
/// still differ by a row on pathological input.
fn wrapped_rows(display_width: usize, w: usize) -> u16 {
    (display_width.div_ceil(w)).max(1) as u16
}

fn place_cursor(frame: &mut Frame, area: Rect, console: &Console, offset: u16) {
    let doc = console.document();
    let (caret_major, caret_minor) = doc.caret();
    let w = area.width as usize;
    if w == 0 {
        return;
    }

    let mut visual_row: u16 = 0;
    for major in 0..doc.paragraph_count() {
        let text = doc.paragraph_text(major);
        let rows = if console.is_wrap() { wrapped_rows(text.width(), w) } else { 1 };

        if major == caret_major {
            // Cells left of the caret, measured in display width so the
            // caret and the wrap math agree on wide characters.
            let prefix_width: usize =
                text.chars().take(caret_minor).collect::<String>().width();
            let (wrap_row, wrap_col) = if console.is_wrap() {
                ((prefix_width / w) as u16, (prefix_width % w) as u16)
            } else {
                (0, prefix_width as u16)
            };
            let x = area.x + wrap_col;
            let y = (visual_row + wrap_row).checked_sub(offset).map(|row| area.y + row);
            if let Some(y) = y
                && x < area.right()
                && y < area.bottom()
            {
                frame.set_cursor_position((x, y));
            }
            return;
        }
        visual_row = visual_row.saturating_add(rows);
    }
}

fn render_context_menu(frame: &mut Frame, area: Rect, console: &Console) {
    let Some((col, row)) = console.menu_position() else { return };
    let Some(menu) = console.context_menu() else { return };
    if menu.items.is_empty() {
        return;
    }

    let width = menu
        .items
        .iter()
        .map(|item| item.width() as u16)
        .max()
        .unwrap_or(0)
        .saturating_add(2);
    let height = (menu.items.len() as u16).saturating_add(2);
    let x = col.min(area.right().saturating_sub(width)).max(area.x);
    let y = row.min(area.bottom().saturating_sub(height)).max(area.y);
    let popup = Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    };

    let skin = console.skin();
    let list = List::new(menu.items.iter().map(String::as_str))
        .style(skin.base_style())
        .block(Block::bordered());
    frame.render_widget(Clear, popup);
    frame.render_widget(list, popup);
}
