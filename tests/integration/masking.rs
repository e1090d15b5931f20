// =====
// TESTS: 10
// =====
//
// Masked (secret) input integration tests.
// The trigger token is typed in-band, the scan settles, and real keystrokes
// are buffered while the document shows only mask characters.

use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;

use crate::helpers::{capture_submissions, current_paragraph, press, ready_console, type_str};

/// Type the trigger token and force the debounced scan to settle.
fn engage_mask(console: &mut tui_console::Console) {
    type_str(console, ":msk");
    console.settle_scan();
}

#[test]
fn trigger_token_is_deleted_and_masking_engages() {
    let mut console = ready_console();
    engage_mask(&mut console);

    assert!(console.is_masking());
    assert_eq!(current_paragraph(&console), "> ");
}

#[test]
fn trigger_deletion_respects_prompt_boundary() {
    let mut console = ready_console();
    type_str(&mut console, "pw ");
    engage_mask(&mut console);

    assert!(console.is_masking());
    assert_eq!(current_paragraph(&console), "> pw ");
}

#[test]
fn typed_characters_are_masked_and_buffered() {
    let mut console = ready_console();
    engage_mask(&mut console);

    type_str(&mut console, "secret");

    assert_eq!(current_paragraph(&console), "> ******");
    assert_eq!(console.mask_buffer_len(), 6);
}

#[test]
fn backspace_pops_buffer_and_mask_char_together() {
    let mut console = ready_console();
    engage_mask(&mut console);

    type_str(&mut console, "abc");
    press(&mut console, KeyCode::Backspace);

    // Buffer length always equals the visible mask-run length.
    assert_eq!(current_paragraph(&console), "> **");
    assert_eq!(console.mask_buffer_len(), 2);
}

#[test]
fn masked_submit_reconciles_buffer_into_callback_text() {
    let mut console = ready_console();
    let seen = capture_submissions(&mut console);
    engage_mask(&mut console);

    type_str(&mut console, "secret");
    press(&mut console, KeyCode::Enter);

    assert_eq!(seen.borrow().as_slice(), &["secret".to_string()]);
    assert_eq!(console.mask_buffer_len(), 0);
    assert!(!console.is_masking());
}

#[test]
fn masked_submit_never_enters_history() {
    let mut console = ready_console();
    capture_submissions(&mut console);
    engage_mask(&mut console);

    type_str(&mut console, "hunter2");
    press(&mut console, KeyCode::Enter);

    assert!(console.history().entries().is_empty());
}

#[test]
fn text_before_mask_run_survives_reconciliation() {
    let mut console = ready_console();
    let seen = capture_submissions(&mut console);

    type_str(&mut console, "login ");
    engage_mask(&mut console);
    type_str(&mut console, "pw");
    press(&mut console, KeyCode::Enter);

    assert_eq!(seen.borrow().as_slice(), &["login pw".to_string()]);
}

#[test]
fn paste_while_masked_keeps_buffer_and_mask_run_equal() {
    let mut console = ready_console();
    engage_mask(&mut console);

    console.paste_text("secret");

    assert_eq!(current_paragraph(&console), "> ******");
    assert_eq!(console.mask_buffer_len(), 6);
}

#[test]
fn pasted_secret_reconciles_on_submit() {
    let mut console = ready_console();
    let seen = capture_submissions(&mut console);
    engage_mask(&mut console);

    console.paste_text("sec");
    type_str(&mut console, "ret");
    press(&mut console, KeyCode::Enter);

    assert_eq!(seen.borrow().as_slice(), &["secret".to_string()]);
    assert!(console.history().entries().is_empty());
}

#[test]
fn plain_input_without_trigger_is_never_masked() {
    let mut console = ready_console();
    type_str(&mut console, "visible");
    console.settle_scan();

    assert!(!console.is_masking());
    assert_eq!(current_paragraph(&console), "> visible");
    assert_eq!(console.mask_buffer_len(), 0);
}
