//! Suggestion dropdown: keyboard, mouse and the selection hand-off.

use super::common::season;
use fairway::{Commit, DropdownState, Key, KeyOutcome, SearchSession};

fn session() -> SearchSession {
    SearchSession::new(season())
}

#[test]
fn test_typing_opens_unselected() {
    let mut session = session();
    session.input("tex");
    assert_eq!(
        session.suggestions().state(),
        DropdownState::Open { selected: None }
    );
    assert_eq!(session.suggestions().suggestions().len(), 3);
}

#[test]
fn test_short_input_closes() {
    let mut session = session();
    session.input("tex");
    session.input("t");
    assert_eq!(session.suggestions().state(), DropdownState::Closed);
}

#[test]
fn test_arrow_keys_cycle() {
    let mut session = session();
    session.input("tex");
    let expected = [Some(0), Some(1), Some(2), Some(0)];
    for want in expected {
        assert_eq!(session.key_down(Key::ArrowDown), KeyOutcome::Handled);
        assert_eq!(session.suggestions().selected(), want);
    }
    session.key_down(Key::ArrowUp);
    assert_eq!(session.suggestions().selected(), Some(2));
}

#[test]
fn test_enter_navigates_and_hands_off_id() {
    let mut session = session();
    session.input("tex");
    session.key_down(Key::ArrowDown);
    assert_eq!(
        session.key_down(Key::Enter),
        KeyOutcome::Committed(Commit::Navigate { id: 7 })
    );
    assert_eq!(session.suggestions().state(), DropdownState::Closed);
    assert_eq!(session.take_selection(), Some(7));
    assert_eq!(session.take_selection(), None);
}

#[test]
fn test_enter_unselected_falls_through() {
    let mut session = session();
    session.input("tex");
    assert_eq!(session.key_down(Key::Enter), KeyOutcome::Ignored);
    assert!(session.suggestions().is_open());
}

#[test]
fn test_click_ignores_highlight() {
    let mut session = session();
    session.input("tex");
    session.key_down(Key::ArrowDown);
    // Row 1 is Worlds (id 1), not the highlighted Texas State (id 7).
    assert_eq!(session.click(1), Some(Commit::Navigate { id: 1 }));
    assert_eq!(session.take_selection(), Some(1));
}

#[test]
fn test_click_event_without_id_submits_search() {
    let mut session = session();
    session.input("swedish");
    assert_eq!(
        session.click(0),
        Some(Commit::Submit {
            query: "Swedish Open".to_string()
        })
    );
    assert_eq!(session.take_selection(), None);
}

#[test]
fn test_escape_and_blur_close_without_commit() {
    let mut session = session();
    session.input("tex");
    session.key_down(Key::ArrowDown);
    assert_eq!(session.key_down(Key::Escape), KeyOutcome::Handled);
    assert!(!session.suggestions().is_open());
    assert_eq!(session.click(0), None);

    session.focus("tex");
    assert!(session.suggestions().is_open());
    session.blur();
    assert!(!session.suggestions().is_open());
    assert_eq!(session.take_selection(), None);
}

#[test]
fn test_closed_dropdown_ignores_keys() {
    let mut session = session();
    assert_eq!(session.key_down(Key::ArrowDown), KeyOutcome::Ignored);
    assert_eq!(session.key_down(Key::Enter), KeyOutcome::Ignored);
}

#[test]
fn test_rows_carry_highlight_and_meta() {
    let mut session = session();
    session.input("tex");
    session.key_down(Key::ArrowDown);
    let rows = session.suggestions().rows();
    assert_eq!(
        rows[0].label_html,
        "<span class=\"suggestion-match\">Tex</span>as State Championships"
    );
    assert_eq!(rows[0].meta, "2023-03-04 • Tier-A • Austin, Texas");
    assert!(rows[0].highlighted);
    assert!(!rows[1].highlighted);
}
