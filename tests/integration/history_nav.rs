// =====
// TESTS: 7
// =====
//
// History navigation integration tests.
// Up/Down replace only the editable region; the prompt is never touched.

use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;

use crate::helpers::{capture_submissions, current_paragraph, press, ready_console, type_str};

/// Submit `line` and reprint the prompt, as a host callback would.
fn submit_line(console: &mut tui_console::Console, line: &str) {
    type_str(console, line);
    press(console, KeyCode::Enter);
    console.ready();
}

#[test]
fn up_recalls_previous_submission() {
    let mut console = ready_console();
    capture_submissions(&mut console);
    submit_line(&mut console, "first");

    press(&mut console, KeyCode::Up);
    assert_eq!(current_paragraph(&console), "> first");
}

#[test]
fn up_walks_backwards_through_entries() {
    let mut console = ready_console();
    capture_submissions(&mut console);
    submit_line(&mut console, "first");
    submit_line(&mut console, "second");

    press(&mut console, KeyCode::Up);
    assert_eq!(current_paragraph(&console), "> second");
    press(&mut console, KeyCode::Up);
    assert_eq!(current_paragraph(&console), "> first");
}

#[test]
fn down_returns_to_empty_editable_line() {
    let mut console = ready_console();
    capture_submissions(&mut console);
    submit_line(&mut console, "first");

    press(&mut console, KeyCode::Up);
    press(&mut console, KeyCode::Down);
    assert_eq!(current_paragraph(&console), "> ");
}

#[test]
fn navigation_past_either_end_is_absorbed() {
    let mut console = ready_console();
    capture_submissions(&mut console);
    submit_line(&mut console, "only");

    press(&mut console, KeyCode::Down);
    assert_eq!(current_paragraph(&console), "> ");

    press(&mut console, KeyCode::Up);
    press(&mut console, KeyCode::Up);
    press(&mut console, KeyCode::Up);
    assert_eq!(current_paragraph(&console), "> only");
}

#[test]
fn recall_replaces_partially_typed_input() {
    let mut console = ready_console();
    capture_submissions(&mut console);
    submit_line(&mut console, "first");

    type_str(&mut console, "partial");
    press(&mut console, KeyCode::Up);
    assert_eq!(current_paragraph(&console), "> first");
}

#[test]
fn recall_preserves_the_prompt() {
    let mut console = ready_console();
    capture_submissions(&mut console);
    submit_line(&mut console, "x");

    press(&mut console, KeyCode::Up);
    press(&mut console, KeyCode::Backspace);
    press(&mut console, KeyCode::Backspace);
    // Second backspace hits the boundary and is refused.
    assert_eq!(current_paragraph(&console), "> ");
}

#[test]
fn clear_history_forgets_entries_but_not_document() {
    let mut console = ready_console();
    capture_submissions(&mut console);
    submit_line(&mut console, "remembered");

    console.clear_history();
    press(&mut console, KeyCode::Up);

    assert!(console.history().entries().is_empty());
    assert_eq!(current_paragraph(&console), "> ");
}
