//! Column sorting applied to search results.

use super::common::{names, season};
use fairway::{Error, ResultPage, SearchSession, SortColumn, SortDirection};

fn noop(_: &ResultPage<'_>) {}

fn open_session() -> SearchSession {
    let mut session = SearchSession::new(season());
    session.search("open", &mut noop);
    session
}

#[test]
fn test_tier_ascending_then_descending() {
    let mut session = open_session();
    session.sort_by(SortColumn::Tier, &mut noop);
    assert_eq!(
        names(session.results()),
        [
            "European Open",
            "Ledgestone Insurance Open",
            "US Open",
            "Portland Open",
            "Tampere Open",
            "Swedish Open"
        ]
    );

    session.sort_by(SortColumn::Tier, &mut noop);
    assert_eq!(session.sort_state().direction, SortDirection::Desc);
    assert_eq!(
        names(session.results()),
        [
            "Swedish Open",
            "Tampere Open",
            "Ledgestone Insurance Open",
            "US Open",
            "Portland Open",
            "European Open"
        ]
    );
}

#[test]
fn test_start_date_unparsable_first() {
    let mut session = open_session();
    session.sort_by(SortColumn::StartDate, &mut noop);
    assert_eq!(
        names(session.results()),
        [
            "Swedish Open",
            "Tampere Open",
            "US Open",
            "European Open",
            "Portland Open",
            "Ledgestone Insurance Open"
        ]
    );
}

#[test]
fn test_name_case_insensitive() {
    let mut session = open_session();
    session.sort_by(SortColumn::Name, &mut noop);
    assert_eq!(
        names(session.results()),
        [
            "European Open",
            "Ledgestone Insurance Open",
            "Portland Open",
            "Swedish Open",
            "Tampere Open",
            "US Open"
        ]
    );
}

#[test]
fn test_switching_column_starts_ascending() {
    let mut session = open_session();
    session.sort_by(SortColumn::Name, &mut noop);
    session.sort_by(SortColumn::Name, &mut noop);
    assert_eq!(session.sort_state().direction, SortDirection::Desc);
    session.sort_by(SortColumn::Country, &mut noop);
    assert_eq!(session.sort_state().column, Some(SortColumn::Country));
    assert_eq!(session.sort_state().direction, SortDirection::Asc);
}

#[test]
fn test_three_clicks_restore_ascending_order() {
    let mut session = open_session();
    session.sort_by(SortColumn::City, &mut noop);
    let first = names(session.results());
    session.sort_by(SortColumn::City, &mut noop);
    session.sort_by(SortColumn::City, &mut noop);
    assert_eq!(names(session.results()), first);
}

#[test]
fn test_sort_returns_to_first_page() {
    let mut session = SearchSession::new(super::common::open_corpus(25));
    session.search("open", &mut noop);
    session.set_page(3, &mut noop);
    session.sort_by(SortColumn::Name, &mut noop);
    assert_eq!(session.page_info().current_page, 1);
}

#[test]
fn test_unknown_sort_key() {
    let mut session = open_session();
    let err = session.sort_by_key("prize_money", &mut noop).unwrap_err();
    assert!(matches!(err, Error::UnknownColumn(ref key) if key == "prize_money"));
    assert_eq!(session.sort_state().column, None);
}

#[test]
fn test_corpus_order_untouched() {
    let mut session = open_session();
    session.sort_by(SortColumn::Name, &mut noop);
    assert_eq!(names(session.corpus().iter().take(2)), season_head());
}

fn season_head() -> Vec<String> {
    names(season().iter().take(2))
}
