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

//! Input dispatch: maps crossterm events onto console operations.
//!
//! The table mirrors a consume-vs-ignore input map: handled patterns consume
//! the event, chords that would trigger conflicting native behavior
//! (select-all, undo) are swallowed, everything else falls through untouched.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::Console;

/// Feed a terminal event into the console.
pub fn handle_event(console: &mut Console, event: &Event) {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(console, *key),
        Event::Mouse(mouse) => handle_mouse(console, *mouse),
        // Bracketed paste delivers the payload directly.
        Event::Paste(text) => console.paste_text(text),
        _ => {}
    }
}

#[inline]
fn is_printable_text_modifiers(modifiers: KeyModifiers) -> bool {
    let ctrl_alt =
        modifiers.contains(KeyModifiers::CONTROL) && modifiers.contains(KeyModifiers::ALT);
    !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) || ctrl_alt
}

pub fn handle_key(console: &mut Console, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Char(c), m)
            if m.contains(KeyModifiers::CONTROL) && c.eq_ignore_ascii_case(&'v') =>
        {
            console.paste_from_clipboard();
        }
        // Select-all and undo conflict with the console's own editing model.
        (KeyCode::Char(c), m)
            if m.contains(KeyModifiers::CONTROL)
                && (c.eq_ignore_ascii_case(&'a') || c.eq_ignore_ascii_case(&'z')) => {}
        (KeyCode::Enter, _) => console.submit(),
        (KeyCode::Backspace, _) => console.backspace(),
        (KeyCode::Left, _) => console.move_left(),
        (KeyCode::Right, _) => console.move_right(),
        (KeyCode::Up, _) => console.history_up(),
        (KeyCode::Down, _) => console.history_down(),
        (KeyCode::Char(c), m) if is_printable_text_modifiers(m) => console.insert_char(c),
        _ => {}
    }
}

fn handle_mouse(console: &mut Console, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => console.primary_click(),
        MouseEventKind::Down(MouseButton::Right) => {
            console.secondary_click(mouse.column, mouse.row);
        }
        // Scrolling up unpins the view from the bottom; scrolling down
        // re-pins it. Output arriving while unpinned does not move the view.
        MouseEventKind::ScrollUp => console.document_mut().set_follow_bottom(false),
        MouseEventKind::ScrollDown => console.document_mut().scroll_to_bottom(),
        // Drags and releases are not part of the widget's surface.
        _ => {}
    }
}
