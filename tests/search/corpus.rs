//! Corpus loading, assembly and the tier-grouped browse view.

use super::common::{make_detail, make_identity, names, season, SEASON_JSON};
use fairway::{
    assemble, available_countries, available_years, group_by_tier, load_assembled, load_events,
    Error, ListingFilter,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_json(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

// ============================================================================
// LOADING
// ============================================================================

#[test]
fn test_load_events_classifies_tiers() {
    let file = write_json(SEASON_JSON);
    let events = load_events(file.path()).unwrap();
    assert_eq!(events.len(), 12);
    assert_eq!(events[0].tier.as_deref(), Some("Major"));
    assert_eq!(events[9].tier.as_deref(), Some("Tier-XC"));
    assert_eq!(events[11].tier.as_deref(), Some("L"));
    assert_eq!(events[11].tier_code.as_deref(), Some("tier-other"));
}

#[test]
fn test_load_assembled_from_raw_records() {
    let identities = write_json(
        r#"[{"id": 4, "pdga_event_id": 77765, "name": "US Open"},
            {"id": 5, "pdga_event_id": "78101", "name": "Portland Open"}]"#,
    );
    let details = write_json(
        r#"[{"pdga_event_id": 78101, "event_name": "Portland Open presented by Dynamic",
             "tier": "NT", "city": "Portland", "start_date": "2024-07-25", "year": "2024"},
            {"pdga_event_id": 77765, "event_name": "United States Disc Golf Championship",
             "tier": "NT", "city": "Rockford", "start_date": "2024-06-13", "year": 2024},
            {"pdga_event_id": 99999, "event_name": "Orphan Doubles", "tier": "C",
             "start_date": "2024-09-01"}]"#,
    );
    let events = load_assembled(identities.path(), details.path()).unwrap();
    assert_eq!(
        names(&events),
        ["", "Portland Open", "US Open"],
        "newest first; the orphan has no identity name"
    );
    assert_eq!(events[0].id, None);
    assert_eq!(events[1].id, Some(5));
    assert_eq!(events[2].tier_code.as_deref(), Some("elite"));
}

#[test]
fn test_missing_file_names_path() {
    let err = load_events(std::path::Path::new("/no/such/events.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("/no/such/events.json"));
}

#[test]
fn test_assemble_first_identity_wins() {
    let identities = vec![make_identity(1, 500, "First"), make_identity(2, 500, "Second")];
    let events = assemble(&identities, vec![make_detail(500, "Edition", "A", "2024-01-01")]);
    assert_eq!(events[0].id, Some(1));
    assert_eq!(events[0].name.as_deref(), Some("First"));
}

// ============================================================================
// BROWSE VIEW
// ============================================================================

#[test]
fn test_group_by_tier_order() {
    let corpus = season();
    let groups = group_by_tier(&corpus);
    assert_eq!(
        names(groups.major.iter().copied()),
        ["European Open", "PDGA Professional Disc Golf World Championships"]
    );
    assert_eq!(
        names(groups.elite.iter().copied()),
        ["Ledgestone Insurance Open", "Portland Open", "US Open"]
    );
    assert_eq!(
        names(groups.others.iter().copied()),
        [
            "Tampere Open",
            "Texas State Championships",
            "Swedish Open",
            "Rockford Ice Bowl",
            "Spring Fling",
            "Tuesday Night Minis",
            "Mystery Doubles"
        ]
    );
}

#[test]
fn test_year_filter() {
    let corpus = season();
    let filter = ListingFilter {
        year: Some(2023),
        country: None,
    };
    let groups = filter.apply(&corpus);
    assert!(groups.major.is_empty());
    assert!(groups.elite.is_empty());
    assert_eq!(
        names(groups.others.iter().copied()),
        [
            "Tampere Open",
            "Texas State Championships",
            "Spring Fling",
            "Tuesday Night Minis"
        ]
    );
}

#[test]
fn test_country_filter() {
    let corpus = season();
    let filter = ListingFilter {
        year: None,
        country: Some("Finland".into()),
    };
    let groups = filter.apply(&corpus);
    assert_eq!(names(groups.major.iter().copied()), ["European Open"]);
    assert_eq!(names(groups.others.iter().copied()), ["Tampere Open"]);
}

#[test]
fn test_filter_values() {
    let corpus = season();
    // Undated events without a year add nothing.
    assert_eq!(available_years(&corpus), [2024, 2023]);
    assert_eq!(available_countries(&corpus), ["Finland", "Sweden", "United States"]);

    for year in available_years(&corpus) {
        let filter = ListingFilter {
            year: Some(year),
            country: None,
        };
        assert!(!filter.apply(&corpus).is_empty());
    }
}

#[test]
fn test_untiered_event_listed_with_others() {
    let file = write_json(r#"[{"id": 1, "name": "Spring Fling", "tier": null, "city": "Emporia"}]"#);
    let events = load_events(file.path()).unwrap();
    assert_eq!(events[0].tier, None);
    assert_eq!(events[0].tier_code.as_deref(), Some("tier-other"));
    assert_eq!(names(group_by_tier(&events).others.iter().copied()), ["Spring Fling"]);
}
