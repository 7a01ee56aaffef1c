use chrono::NaiveDate;

use muster::journal::{Category, LogEntry};
use muster::persist;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(3025, 1, 15).expect("date should be valid")
}

#[test]
fn journal_round_trips_through_the_persisted_format() {
    let original = vec![
        LogEntry::new(date(), Category::Service, "Promoted to Captain"),
        LogEntry::new(date(), Category::Medical, "Suffered a broken arm"),
        LogEntry::new(date(), Category::Custom, "Won the camp poker tournament"),
    ];

    let serialized = persist::write_journal(&original).expect("journal should serialize");
    let restored = persist::read_journal(&serialized).expect("journal should load");

    assert_eq!(original, restored);
}

#[test]
fn descriptions_with_markup_characters_round_trip() {
    let original = vec![LogEntry::new(
        date(),
        Category::Award,
        r#"Awarded "Gallantry" <1st class> & bar"#,
    )];

    let serialized = persist::write_journal(&original).expect("journal should serialize");

    assert!(serialized.contains("&quot;Gallantry&quot;"));
    assert!(!serialized.contains("<1st"));

    let restored = persist::read_journal(&serialized).expect("journal should load");

    assert_eq!(original, restored);
}

#[test]
fn journals_load_from_disk() {
    let path = std::env::temp_dir().join("muster-round-trip.json");
    let original = vec![LogEntry::new(date(), Category::Service, "Retired")];

    let serialized = persist::write_journal(&original).expect("journal should serialize");
    std::fs::write(&path, serialized).expect("journal file should write");

    let restored = persist::load_journal(&path).expect("journal should load");

    assert_eq!(original, restored);
}

#[test]
fn legacy_entries_without_a_category_load_as_custom() {
    let source = r#"[
        { "date": "2998-06-02", "description": "Promoted to Sergeant" }
    ]"#;

    let journal = persist::read_journal(source).expect("journal should load");

    assert_eq!(1, journal.len());
    assert_eq!(Category::Custom, journal[0].category());
    assert_eq!("Promoted to Sergeant", journal[0].description());
}
