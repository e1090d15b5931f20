use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_console::console::keys;
use tui_console::{Console, StyledText, StyledTextBuilder};

/// Build a console with a `"> "` prompt, already readied.
/// No terminal, no event loop -- just state.
pub fn ready_console() -> Console {
    let mut console = Console::new();
    console.set_prefix(prompt()).unwrap();
    console.ready();
    console
}

pub fn prompt() -> StyledText {
    StyledTextBuilder::new().append("> ", &["text"]).build()
}

/// Simulate typing each character as its own key press.
pub fn type_str(console: &mut Console, s: &str) {
    for ch in s.chars() {
        keys::handle_key(console, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
    }
}

pub fn press(console: &mut Console, code: KeyCode) {
    keys::handle_key(console, KeyEvent::new(code, KeyModifiers::NONE));
}

/// Install a callback that records every submitted line.
pub fn capture_submissions(console: &mut Console) -> Rc<RefCell<Vec<String>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    console.set_callback(move |line| sink.borrow_mut().push(line));
    seen
}

/// Full text of the paragraph the caret is on (prompt included).
pub fn current_paragraph(console: &Console) -> String {
    let (major, _) = console.document().caret();
    console.document().paragraph_text(major).to_string()
}
