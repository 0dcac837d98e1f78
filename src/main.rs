use clap::Parser;

use fairway::tiers::MISSING_TIER_LABEL;
use fairway::{
    available_countries, available_years, load_assembled, load_events, Event, ListingFilter, ResultPage, SearchOptions, SearchSession,
    SuggestionController, TierGroups,
};

mod cli;
use cli::display::{self, fit, muted, score_value, section_bot, section_top, row, themed, tier_badge};
use cli::{Cli, Commands, CorpusArgs};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> fairway::Result<()> {
    let options = match &cli.config {
        Some(path) => SearchOptions::load(path)?,
        None => SearchOptions::default(),
    };

    match cli.command {
        Commands::Search {
            query,
            corpus,
            page,
            sort,
            json,
        } => run_search(&query, &corpus, options, page, &sort, json),
        Commands::Suggest {
            query,
            corpus,
            limit,
        } => {
            let mut options = options;
            if let Some(limit) = limit {
                options.suggestion_limit = limit;
            }
            run_suggest(&query, &corpus, options)
        }
        Commands::List {
            corpus,
            year,
            country,
        } => run_list(&corpus, ListingFilter { year, country }),
    }
}

fn load_corpus(args: &CorpusArgs) -> fairway::Result<Vec<Event>> {
    match (&args.events, &args.details, &args.identities) {
        (Some(events), _, _) => load_events(events),
        (None, Some(details), Some(identities)) => load_assembled(identities, details),
        // CorpusArgs makes clap reject every other combination.
        _ => unreachable!("clap requires --events or --details with --identities"),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

fn run_search(
    query: &str,
    corpus: &CorpusArgs,
    options: SearchOptions,
    page: usize,
    sort: &[String],
    json: bool,
) -> fairway::Result<()> {
    let mut session = SearchSession::with_options(load_corpus(corpus)?, options);

    // Intermediate renders are superseded by the final page.
    let mut discard = |_: &ResultPage<'_>| {};
    session.search(query, &mut discard);
    for key in sort {
        session.sort_by_key(key, &mut discard)?;
    }
    session.set_page(page, &mut discard);

    let page = session.current_page();
    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }
    print_result_page(query, &page);
    Ok(())
}

fn print_result_page(query: &str, page: &ResultPage<'_>) {
    section_top(&format!("RESULTS FOR \"{}\"", query));
    let header = format!(
        " {} {} {} {} {} {}",
        fit("Name", 30),
        fit("Date", 11),
        fit("Tier", 8),
        fit("City", 16),
        fit("State", 12),
        fit("Country", 13)
    );
    row(&themed(display::CYAN, &[display::BOLD], &header));

    if page.info.total_items == 0 {
        row(&muted(" No results found for your search. Try different keywords."));
    } else {
        for event in &page.events {
            row(&table_row(event));
        }
        for _ in 0..page.filler_rows {
            row("");
        }
    }

    let footer = format!(
        " Page {} of {} · {} results · showing {}-{}",
        page.info.current_page,
        page.info.total_pages.max(1),
        page.info.total_items,
        if page.events.is_empty() { 0 } else { page.start_index + 1 },
        page.end_index
    );
    row(&muted(&footer));
    section_bot();
}

fn cell(value: Option<&str>, width: usize) -> String {
    match value.filter(|s| !s.is_empty()) {
        Some(text) => fit(text, width),
        None => muted(&fit("N/A", width)),
    }
}

fn table_row(event: &Event) -> String {
    format!(
        " {} {} {} {} {} {}",
        cell(event.name.as_deref(), 30),
        cell(event.start_date.as_deref(), 11),
        tier_badge(
            event.tier.as_deref().unwrap_or(MISSING_TIER_LABEL),
            event.tier_code.as_deref(),
            8
        ),
        cell(event.city.as_deref(), 16),
        cell(event.state.as_deref(), 12),
        cell(event.country.as_deref(), 13)
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// SUGGEST
// ═══════════════════════════════════════════════════════════════════════════

fn run_suggest(query: &str, corpus: &CorpusArgs, options: SearchOptions) -> fairway::Result<()> {
    let corpus = load_corpus(corpus)?;
    let mut controller = SuggestionController::new(options);
    controller.input(query, &corpus);

    section_top(&format!("SUGGESTIONS FOR \"{}\"", query.trim()));
    if !controller.is_open() {
        row(&muted(" Type at least two characters."));
    } else if controller.suggestions().is_empty() {
        row(&muted(" No suggestions found"));
    } else {
        for (m, suggestion) in controller.suggestions().iter().zip(controller.rows()) {
            row(&format!(
                " {} {}",
                score_value(m.score),
                display::terminal_highlight(&suggestion.label_html)
            ));
            row(&format!("        {}", muted(&suggestion.meta)));
        }
    }
    section_bot();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// LIST
// ═══════════════════════════════════════════════════════════════════════════

fn run_list(corpus: &CorpusArgs, filter: ListingFilter) -> fairway::Result<()> {
    let corpus = load_corpus(corpus)?;
    let groups = filter.apply(&corpus);
    print_groups(&groups);
    print_filter_values(&corpus);
    Ok(())
}

fn print_groups(groups: &TierGroups<'_>) {
    let sections = [
        ("MAJORS", &groups.major),
        ("ELITE SERIES", &groups.elite),
        ("OTHER TIERS", &groups.others),
    ];
    for (label, events) in sections {
        section_top(&format!("{} ({})", label, events.len()));
        if events.is_empty() {
            row(&muted(" No events match the current filters."));
        }
        for event in events.iter() {
            row(&table_row(event));
        }
        section_bot();
    }
}

/// Values accepted by `--year` and `--country`.
fn print_filter_values(corpus: &[Event]) {
    let years: Vec<String> = available_years(corpus).iter().map(i32::to_string).collect();
    section_top("FILTERS");
    row(&format!(" {} {}", themed(display::CYAN, &[display::BOLD], "--year   "), years.join(", ")));
    row(&format!(
        " {} {}",
        themed(display::CYAN, &[display::BOLD], "--country"),
        available_countries(corpus).join(", ")
    ));
    section_bot();
}
