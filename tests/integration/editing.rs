// =====
// TESTS: 11
// =====
//
// Line-editing, paste, prompt and printing integration tests.

use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;
use tui_console::{Console, ConsoleError, StyledTextBuilder, ERROR_TAG};

use crate::helpers::{capture_submissions, current_paragraph, press, ready_console, type_str};

#[test]
fn backspace_is_refused_at_the_boundary() {
    let mut console = ready_console();
    type_str(&mut console, "ab");

    press(&mut console, KeyCode::Backspace);
    press(&mut console, KeyCode::Backspace);
    press(&mut console, KeyCode::Backspace);

    assert_eq!(current_paragraph(&console), "> ");
}

#[test]
fn caret_is_clamped_between_boundary_and_line_end() {
    let mut console = ready_console();
    type_str(&mut console, "ab");

    press(&mut console, KeyCode::Left);
    press(&mut console, KeyCode::Left);
    press(&mut console, KeyCode::Left);
    assert_eq!(console.document().caret(), (0, 2));

    press(&mut console, KeyCode::Right);
    press(&mut console, KeyCode::Right);
    press(&mut console, KeyCode::Right);
    assert_eq!(console.document().caret(), (0, 4));
}

#[test]
fn mid_line_insertion_lands_at_the_caret() {
    let mut console = ready_console();
    type_str(&mut console, "ac");

    press(&mut console, KeyCode::Left);
    type_str(&mut console, "b");

    assert_eq!(current_paragraph(&console), "> abc");
    assert_eq!(console.text(), "abc");
}

#[test]
fn paste_flattens_line_separators() {
    let mut console = ready_console();
    console.paste_text("line1\r\nline2\nline3");

    assert_eq!(current_paragraph(&console), "> line1line2line3");
    assert_eq!(console.document().paragraph_count(), 1);
}

#[test]
fn prefix_gets_a_trailing_space_when_missing() {
    let mut console = Console::new();
    let bare = StyledTextBuilder::new().append("$", &["text"]).build();
    console.set_prefix(bare).unwrap();

    assert_eq!(console.prefix().unwrap().last_line(), "$ ");
}

#[test]
fn prefix_already_ending_in_space_is_kept() {
    let mut console = Console::new();
    let spaced = StyledTextBuilder::new().append("$ ", &["text"]).build();
    console.set_prefix(spaced).unwrap();

    assert_eq!(console.prefix().unwrap().last_line(), "$ ");
}

#[test]
fn degenerate_prefixes_are_rejected() {
    let mut console = Console::new();

    let empty = StyledTextBuilder::new().build();
    assert_eq!(console.set_prefix(empty), Err(ConsoleError::EmptyPrefix));

    let blank = StyledTextBuilder::new().append("", &["text"]).build();
    assert_eq!(console.set_prefix(blank), Err(ConsoleError::BlankPrefix));

    assert!(console.prefix().is_none());
}

#[test]
fn println_and_print_lay_out_paragraphs() {
    let mut console = Console::new();
    console.println("first");
    console.print("second");

    let doc = console.document();
    assert_eq!(doc.paragraph_count(), 2);
    assert_eq!(doc.paragraph_text(0), "first");
    assert_eq!(doc.paragraph_text(1), "second");
}

#[test]
fn printerr_tags_the_whole_run_as_error() {
    let mut console = Console::new();
    console.printerr("boom");

    let doc = console.document();
    let spans = doc.paragraph(0).unwrap().spans();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].start, 0);
    assert_eq!(spans[0].end, 4);
    assert_eq!(spans[0].tags, vec![ERROR_TAG.to_string()]);
}

#[test]
fn clear_wipes_document_but_keeps_history() {
    let mut console = ready_console();
    capture_submissions(&mut console);

    type_str(&mut console, "kept");
    press(&mut console, KeyCode::Enter);
    console.ready();
    console.clear();

    assert_eq!(console.document().paragraph_count(), 1);
    assert_eq!(console.document().paragraph_text(0), "");
    assert_eq!(console.history().entries(), &["kept".to_string(), String::new()]);
}

#[test]
fn locked_console_absorbs_all_editing() {
    let mut console = ready_console();
    console.lock();

    type_str(&mut console, "nope");
    press(&mut console, KeyCode::Backspace);
    console.paste_text("nor this");
    press(&mut console, KeyCode::Up);

    assert_eq!(current_paragraph(&console), "> ");
}
