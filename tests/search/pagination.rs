//! Paging through search results, as the renderer sees it.

use super::common::{open_corpus, Rendered};
use fairway::{PaginationCursor, ResultPage, SearchOptions, SearchSession};

#[test]
fn test_twenty_five_results_three_pages() {
    let mut session = SearchSession::new(open_corpus(25));
    let mut seen: Vec<Rendered> = Vec::new();
    let mut record = |page: &ResultPage<'_>| seen.push(Rendered::of(page));

    session.search("open", &mut record);
    session.set_page(3, &mut record);
    session.set_page(99, &mut record);
    session.prev_page(&mut record);

    assert_eq!(seen.len(), 4);
    assert_eq!((seen[0].page, seen[0].total_pages, seen[0].names.len()), (1, 3, 10));
    assert_eq!(seen[1].names, ["Open 020", "Open 021", "Open 022", "Open 023", "Open 024"]);
    assert_eq!(seen[1].filler_rows, 5);
    assert_eq!(seen[2].page, 3);
    assert_eq!(seen[3].page, 2);
}

#[test]
fn test_new_search_resets_page() {
    let mut session = SearchSession::new(open_corpus(25));
    let mut last = None;
    session.search("open", &mut |_: &ResultPage<'_>| {});
    session.set_page(3, &mut |_: &ResultPage<'_>| {});
    session.search("open 01", &mut |page: &ResultPage<'_>| last = Some(Rendered::of(page)));

    let last = last.unwrap();
    assert_eq!(last.page, 1);
    assert_eq!(last.total_pages, 1);
    // "Open 010".."Open 019" share the prefix; "Open 001" does not contain "open 01".
    assert_eq!(last.names.len(), 10);
}

#[test]
fn test_custom_page_size() {
    let options = SearchOptions {
        page_size: 4,
        ..SearchOptions::default()
    };
    let mut session = SearchSession::with_options(open_corpus(10), options);
    session.search("open", &mut |_: &ResultPage<'_>| {});
    assert_eq!(session.page_info().total_pages, 3);
    assert_eq!(session.next_page(&mut |_: &ResultPage<'_>| {}), 2);
    assert_eq!(session.current_page().start_index, 4);
}

#[test]
fn test_empty_results_report_zero_pages() {
    let mut session = SearchSession::new(open_corpus(3));
    let mut seen = None;
    session.search("nothing here", &mut |page: &ResultPage<'_>| seen = Some(Rendered::of(page)));
    let seen = seen.unwrap();
    assert_eq!(seen.total_pages, 0);
    assert_eq!(seen.page, 1);
    assert!(seen.names.is_empty());
}

#[test]
fn test_cursor_over_plain_slice() {
    let rows: Vec<&str> = vec!["a", "b", "c"];
    let mut cursor = PaginationCursor::new(2);
    cursor.init(&rows, |_| {});
    let page = cursor.current_page_data(&rows);
    assert_eq!(page.items, ["a", "b"]);
    assert_eq!((page.start_index, page.end_index), (0, 2));
    cursor.set_page(2, &rows, |page| assert_eq!(page.items, ["c"]));
}
