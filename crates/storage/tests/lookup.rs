#![forbid(unsafe_code)]

use tp_core::model::EntryCategory;
use tp_storage::{CreateTripRequest, NewEntry, SqliteStore};

struct Fixture {
    store: SqliteStore,
    trip_id: String,
}

fn fixture() -> Fixture {
    let mut store = SqliteStore::open_in_memory().expect("open store");
    let trip_id = store
        .create_trip(CreateTripRequest {
            name: "Amsterdam Long Weekend".to_string(),
            ..Default::default()
        })
        .expect("create trip");
    let day2 = store.get_or_create_day(&trip_id, 2, Some("Canals".to_string())).expect("day 2").id;
    let day1 = store.get_or_create_day(&trip_id, 1, None).expect("day 1").id;

    let add = |store: &mut SqliteStore, day_id: &str, name: &str, category: Option<EntryCategory>| {
        store
            .create_entry(NewEntry {
                day_id: day_id.to_string(),
                name: name.to_string(),
                timestamp: "11:00 AM".to_string(),
                google_maps_url: "https://www.google.com/maps/place/Amsterdam".to_string(),
                category,
                ..Default::default()
            })
            .expect("create entry")
    };
    add(&mut store, &day2, "Canal Cruise", Some(EntryCategory::Activity));
    add(&mut store, &day1, "City Museum Visit", Some(EntryCategory::Museum));
    add(&mut store, &day1, "Van Gogh Museum", Some(EntryCategory::Museum));
    add(&mut store, &day2, "Museum", None);

    Fixture { store, trip_id }
}

fn names(matches: &[tp_storage::EntryMatch]) -> Vec<&str> {
    matches.iter().map(|m| m.entry.name.as_str()).collect()
}

#[test]
fn name_lookup_is_case_insensitive_substring_by_default() {
    let f = fixture();
    let found = f
        .store
        .find_entries_by_name(&f.trip_id, "museum", false)
        .expect("find");
    assert_eq!(names(&found), vec!["City Museum Visit", "Van Gogh Museum", "Museum"]);
    assert_eq!(found[0].day_number, 1);
    assert_eq!(found[0].day_title.as_deref(), Some("Day 1"));
    assert_eq!(found[2].day_title.as_deref(), Some("Canals"));
}

#[test]
fn exact_name_lookup_requires_the_whole_name() {
    let f = fixture();
    let found = f
        .store
        .find_entries_by_name(&f.trip_id, "MUSEUM", true)
        .expect("find");
    assert_eq!(names(&found), vec!["Museum"]);

    let found = f
        .store
        .find_entries_by_name(&f.trip_id, "City Museum", true)
        .expect("find");
    assert!(found.is_empty());
}

#[test]
fn category_and_day_lookups() {
    let f = fixture();
    let museums = f
        .store
        .find_entries_by_category(&f.trip_id, EntryCategory::Museum)
        .expect("by category");
    assert_eq!(names(&museums), vec!["City Museum Visit", "Van Gogh Museum"]);

    let day2 = f.store.find_entries_by_day(&f.trip_id, 2).expect("by day");
    assert_eq!(names(&day2), vec!["Canal Cruise", "Museum"]);
    assert!(f.store.find_entries_by_day(&f.trip_id, 9).expect("by day").is_empty());
}

#[test]
fn unknown_trips_yield_empty_results() {
    let f = fixture();
    assert!(f.store.find_entries_by_name("TRIP-404", "", false).expect("find").is_empty());
    assert!(
        f.store
            .find_entries_by_category("TRIP-404", EntryCategory::Museum)
            .expect("find")
            .is_empty()
    );
}

#[test]
fn trip_lookup_by_name() {
    let f = fixture();
    let found = f.store.find_trips_by_name("amsterdam").expect("find trips");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, f.trip_id);
    assert!(f.store.find_trips_by_name("lisbon").expect("find trips").is_empty());
}
