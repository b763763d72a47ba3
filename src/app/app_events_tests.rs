//! Tests for app_events

use super::*;
use crate::test_utils::test_helpers::{app_with_history, key, key_with_mods, test_app};
use proptest::prelude::*;

#[test]
fn test_ctrl_c_quits_from_any_focus() {
    let mut app = test_app();
    app.focus = Focus::CountInput;

    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));

    assert!(app.should_quit());
}

#[test]
fn test_q_quits_from_controls() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_esc_quits_from_controls() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.should_quit());
}

#[test]
fn test_tab_switches_focus() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::CountInput);

    app.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(app.focus, Focus::Controls);
}

#[test]
fn test_enter_on_controls_starts_fetch() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Enter));

    // No worker attached, so the fetch settles right away with an error
    assert_eq!(app.advice.last_error(), Some("advice worker unavailable"));
    assert!(app.advice.is_cooling_down());
}

#[test]
fn test_g_on_controls_starts_fetch() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('g')));
    assert!(app.advice.last_error().is_some());
}

#[test]
fn test_h_toggles_history() {
    let mut app = app_with_history(&["a", "b", "c"]);

    app.handle_key_event(key(KeyCode::Char('h')));
    assert!(app.history_visible);
    assert_eq!(app.revealed.len(), 3);

    app.handle_key_event(key(KeyCode::Char('h')));
    assert!(!app.history_visible);
}

#[test]
fn test_typing_in_count_input_edits_text() {
    let mut app = test_app();
    app.focus = Focus::CountInput;

    app.handle_key_event(key(KeyCode::Backspace));
    app.handle_key_event(key(KeyCode::Char('7')));

    assert_eq!(app.count_text(), "7");
}

#[test]
fn test_letters_in_count_input_do_not_trigger_actions() {
    let mut app = test_app();
    app.focus = Focus::CountInput;

    app.handle_key_event(key(KeyCode::Char('q')));
    app.handle_key_event(key(KeyCode::Char('h')));
    app.handle_key_event(key(KeyCode::Char('g')));

    assert!(!app.should_quit());
    assert!(!app.history_visible);
    assert!(app.advice.last_error().is_none());
    assert_eq!(app.count_text(), "3qhg");
}

#[test]
fn test_enter_in_count_input_reveals_history() {
    let mut app = app_with_history(&["a", "b"]);
    app.focus = Focus::CountInput;

    app.handle_key_event(key(KeyCode::Enter));

    assert!(app.history_visible);
    assert_eq!(app.count_text(), "3");
    assert_eq!(
        app.warning.as_deref(),
        Some("Only 2 item(s) available, showing the available ones.")
    );
}

#[test]
fn test_enter_in_count_input_with_invalid_text_warns() {
    let mut app = app_with_history(&["a", "b"]);
    app.focus = Focus::CountInput;
    app.set_count_text("abc");

    app.handle_key_event(key(KeyCode::Enter));

    assert!(!app.history_visible);
    assert_eq!(app.warning.as_deref(), Some("Please enter a valid number."));
}

#[test]
fn test_esc_in_count_input_returns_to_controls() {
    let mut app = test_app();
    app.focus = Focus::CountInput;

    app.handle_key_event(key(KeyCode::Esc));

    assert_eq!(app.focus, Focus::Controls);
    assert!(!app.should_quit());
}

#[test]
fn test_paste_into_count_input_strips_newlines() {
    let mut app = test_app();
    app.focus = Focus::CountInput;
    app.set_count_text("");

    app.handle_paste_event("1\n2".to_string());

    assert_eq!(app.count_text(), "12");
}

#[test]
fn test_paste_on_controls_is_ignored() {
    let mut app = test_app();

    app.handle_paste_event("99".to_string());

    assert_eq!(app.count_text(), "3");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_typed_digits_land_in_count_input(digits in "[0-9]{1,6}") {
        let mut app = test_app();
        app.focus = Focus::CountInput;
        app.set_count_text("");

        for ch in digits.chars() {
            app.handle_key_event(key(KeyCode::Char(ch)));
        }

        prop_assert_eq!(app.count_text(), digits.as_str());
    }
}
