//! A visitor's full trip: type, pick or submit, sort, page.

use super::common::{season, Rendered};
use fairway::{
    Commit, Key, KeyOutcome, ResultPage, SearchOptions, SearchSession, SortColumn,
};

#[test]
fn test_substring_ties_render_in_corpus_order() {
    let mut session = SearchSession::new(season());
    let mut seen = Vec::new();
    let count = session.search("open", &mut |page: &ResultPage<'_>| seen.push(Rendered::of(page)));

    assert_eq!(count, 6);
    assert_eq!(seen.len(), 1);
    // US Open and European Open both score 60; the corpus has European first.
    assert_eq!(&seen[0].names[..3], ["European Open", "Ledgestone Insurance Open", "US Open"]);
    assert_eq!(seen[0].filler_rows, 4);
}

#[test]
fn test_search_sort_and_page() {
    let options = SearchOptions {
        page_size: 4,
        ..SearchOptions::default()
    };
    let mut session = SearchSession::with_options(season(), options);
    let mut seen: Vec<Rendered> = Vec::new();
    let mut record = |page: &ResultPage<'_>| seen.push(Rendered::of(page));

    session.search("  open ", &mut record);
    assert_eq!(session.query(), "open");
    session.sort_by(SortColumn::StartDate, &mut record);
    session.sort_by(SortColumn::StartDate, &mut record);
    session.next_page(&mut record);
    session.next_page(&mut record);

    assert_eq!(seen.len(), 5);
    assert_eq!(
        seen[2].names,
        ["Ledgestone Insurance Open", "Portland Open", "European Open", "US Open"]
    );
    assert_eq!((seen[3].page, seen[3].total_pages), (2, 2));
    assert_eq!(seen[3].names, ["Tampere Open", "Swedish Open"]);
    assert_eq!(seen[3].filler_rows, 2);
    // Already on the last page: clamped, but still published.
    assert_eq!(seen[4], seen[3]);
}

#[test]
fn test_page_serializes_for_the_table() {
    let mut session = SearchSession::new(season());
    let mut json = serde_json::Value::Null;
    session.search("rockford", &mut |page: &ResultPage<'_>| {
        json = serde_json::to_value(page).unwrap();
    });
    assert_eq!(json["events"][0]["name"], "Rockford Ice Bowl");
    assert_eq!(json["startIndex"], 0);
    assert_eq!(json["endIndex"], 2);
    assert_eq!(json["info"]["totalPages"], 1);
    assert_eq!(json["sort"]["column"], serde_json::Value::Null);

    session.sort_by(SortColumn::Name, &mut |page: &ResultPage<'_>| {
        json = serde_json::to_value(page).unwrap();
    });
    assert_eq!(json["sort"]["column"], "name");
    assert_eq!(json["sort"]["direction"], "asc");
}

#[test]
fn test_pick_suggestion_then_land_on_event() {
    let mut session = SearchSession::new(season());
    session.input("tex");
    session.key_down(Key::ArrowDown);
    session.key_down(Key::ArrowDown);
    let outcome = session.key_down(Key::Enter);
    assert_eq!(outcome, KeyOutcome::Committed(Commit::Navigate { id: 1 }));

    let id = session.take_selection().unwrap();
    let event = session.corpus().iter().find(|e| e.id == Some(id)).unwrap();
    assert_eq!(event.city.as_deref(), Some("Dallas"));
}

#[test]
fn test_submit_commit_runs_full_search() {
    let mut session = SearchSession::new(season());
    session.input("swedish");
    let Some(Commit::Submit { query }) = session.click(0) else {
        panic!("event without an id should submit");
    };
    let mut shown = Vec::new();
    session.search(&query, &mut |page: &ResultPage<'_>| shown = Rendered::of(page).names);
    assert_eq!(shown, ["Swedish Open"]);
    assert!(!session.suggestions().is_open());
}

#[test]
fn test_commit_serializes_with_action_tag() {
    let commit = Commit::Navigate { id: 7 };
    assert_eq!(
        serde_json::to_value(&commit).unwrap(),
        serde_json::json!({"action": "navigate", "id": 7})
    );
}
