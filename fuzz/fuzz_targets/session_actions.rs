// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the interactive session.
//!
//! Replays arbitrary sequences of typing, key presses, clicks, sorts and page
//! moves. The dropdown highlight must stay on a visible row and the current
//! page must stay in range after every step.

#![no_main]

use arbitrary::Arbitrary;
use fairway::{DropdownState, Event, Key, ResultPage, SearchSession, SortColumn};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Action {
    Input(String),
    Search(String),
    Key(u8),
    Click(u8),
    Sort(u8),
    Page(u8),
    Next,
    Prev,
    Blur,
    Take,
}

fn corpus() -> Vec<Event> {
    ["Open One", "Open Two", "Ice Bowl", "Spring Fling", "Open Three"]
        .iter()
        .cycle()
        .take(37)
        .enumerate()
        .map(|(i, name)| Event {
            id: (i % 3 != 0).then_some(i as i64),
            name: Some(format!("{} {}", name, i)),
            city: Some("Emporia".to_string()),
            start_date: Some(format!("2024-{:02}-01", 1 + i % 12)),
            tier: Some(["Major", "Elite", "Tier-A", "Tier-C"][i % 4].to_string()),
            pdga_number: Some(format!("{}", 70_000 + i)),
            ..Event::default()
        })
        .collect()
}

fuzz_target!(|actions: Vec<Action>| {
    let mut session = SearchSession::new(corpus());
    let mut render = |page: &ResultPage<'_>| {
        assert!(page.events.len() <= page.info.page_size);
        assert!(page.info.current_page >= 1);
        assert!(page.info.current_page <= page.info.total_pages.max(1));
    };

    for action in actions.into_iter().take(64) {
        match action {
            Action::Input(text) => session.input(&text),
            Action::Search(text) => {
                session.search(&text, &mut render);
            }
            Action::Key(k) => {
                let key = match k % 5 {
                    0 => Key::ArrowDown,
                    1 => Key::ArrowUp,
                    2 => Key::Enter,
                    3 => Key::Escape,
                    _ => Key::Other,
                };
                session.key_down(key);
            }
            Action::Click(i) => {
                session.click(i as usize);
            }
            Action::Sort(c) => {
                let column = SortColumn::ALL[c as usize % SortColumn::ALL.len()];
                session.sort_by(column, &mut render);
            }
            Action::Page(p) => {
                session.set_page(p as usize, &mut render);
            }
            Action::Next => {
                session.next_page(&mut render);
            }
            Action::Prev => {
                session.prev_page(&mut render);
            }
            Action::Blur => session.blur(),
            Action::Take => {
                let _ = session.take_selection();
            }
        }

        if let DropdownState::Open {
            selected: Some(row),
        } = session.suggestions().state()
        {
            assert!(row < session.suggestions().suggestions().len());
        }
        assert_eq!(session.result_count(), session.results().len());
    }
});
