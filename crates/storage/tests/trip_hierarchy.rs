#![forbid(unsafe_code)]

use tp_core::model::TripStatus;
use tp_storage::{CreateDayRequest, CreateTripRequest, DayPatch, NewEntry, SqliteStore, StoreError, TripPatch};

fn trip(store: &mut SqliteStore, name: &str) -> String {
    store
        .create_trip(CreateTripRequest {
            name: name.to_string(),
            ..Default::default()
        })
        .expect("create trip")
}

fn entry(day_id: &str, name: &str) -> NewEntry {
    NewEntry {
        day_id: day_id.to_string(),
        name: name.to_string(),
        timestamp: "9:00 AM".to_string(),
        google_maps_url: "https://maps.google.com/maps?q=Somewhere".to_string(),
        ..Default::default()
    }
}

#[test]
fn trips_start_in_planning_and_list_newest_first() {
    let mut store = SqliteStore::open_in_memory().expect("open store");
    let first = trip(&mut store, "Tokyo");
    let second = trip(&mut store, "Lisbon");
    assert_eq!(first, "TRIP-001");
    assert_eq!(second, "TRIP-002");

    let trips = store.list_trips().expect("list trips");
    let ids = trips.iter().map(|t| t.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["TRIP-002", "TRIP-001"]);
    assert!(trips.iter().all(|t| t.status == TripStatus::Planning));
}

#[test]
fn update_trip_merges_only_supplied_fields() {
    let mut store = SqliteStore::open_in_memory().expect("open store");
    let id = store
        .create_trip(CreateTripRequest {
            name: "Rome".to_string(),
            description: Some("Food and ruins".to_string()),
            budget: Some(2500.0),
            travelers: Some(2),
            notes: None,
        })
        .expect("create trip");

    let updated = store
        .update_trip(
            &id,
            TripPatch {
                status: Some(TripStatus::Active),
                notes: Some("Book the Colosseum early".to_string()),
                ..Default::default()
            },
        )
        .expect("update trip");

    assert_eq!(updated.name, "Rome");
    assert_eq!(updated.description.as_deref(), Some("Food and ruins"));
    assert_eq!(updated.budget, Some(2500.0));
    assert_eq!(updated.travelers, Some(2));
    assert_eq!(updated.status, TripStatus::Active);
    assert_eq!(updated.notes.as_deref(), Some("Book the Colosseum early"));
    assert_eq!(store.get_trip(&id).expect("get trip"), Some(updated));
}

#[test]
fn writes_against_unknown_ids_are_not_found() {
    let mut store = SqliteStore::open_in_memory().expect("open store");

    let err = store.update_trip("TRIP-404", TripPatch::default()).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { kind: "trip", .. }));

    let err = store
        .create_day(CreateDayRequest {
            trip_id: "TRIP-404".to_string(),
            day_number: 1,
            ..Default::default()
        })
        .unwrap_err();
    assert!(err.is_not_found());

    let err = store.create_entry(entry("DAY-404", "Nowhere")).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { kind: "day", .. }));

    assert_eq!(store.get_trip("TRIP-404").expect("get trip"), None);
    assert_eq!(store.get_trip_with_hierarchy("TRIP-404").expect("hierarchy"), None);
}

#[test]
fn day_numbers_must_be_positive() {
    let mut store = SqliteStore::open_in_memory().expect("open store");
    let trip_id = trip(&mut store, "Oslo");

    let err = store
        .create_day(CreateDayRequest {
            trip_id: trip_id.clone(),
            day_number: 0,
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidInput(_)));

    let err = store.get_or_create_day(&trip_id, -1, None).unwrap_err();
    assert!(matches!(err, StoreError::InvalidInput(_)));
}

#[test]
fn get_or_create_day_is_idempotent() {
    let mut store = SqliteStore::open_in_memory().expect("open store");
    let trip_id = trip(&mut store, "Kyoto");

    let first = store.get_or_create_day(&trip_id, 2, None).expect("first call");
    let second = store
        .get_or_create_day(&trip_id, 2, Some("Temples".to_string()))
        .expect("second call");

    assert!(first.created);
    assert!(!second.created);
    assert_eq!(first.id, second.id);

    let days = store.list_days(&trip_id).expect("list days");
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].title.as_deref(), Some("Day 2"));
}

#[test]
fn hierarchy_sorts_days_by_number_and_entries_by_order() {
    let mut store = SqliteStore::open_in_memory().expect("open store");
    let trip_id = trip(&mut store, "Paris");

    let day3 = store.get_or_create_day(&trip_id, 3, None).expect("day 3").id;
    let day1 = store.get_or_create_day(&trip_id, 1, None).expect("day 1").id;
    let day2 = store.get_or_create_day(&trip_id, 2, None).expect("day 2").id;

    let mut late = entry(&day1, "Dinner");
    late.order = Some(5);
    store.create_entry(late).expect("dinner");
    let mut early = entry(&day1, "Breakfast");
    early.order = Some(1);
    store.create_entry(early).expect("breakfast");
    store.create_entry(entry(&day2, "Louvre")).expect("louvre");

    let hierarchy = store
        .get_trip_with_hierarchy(&trip_id)
        .expect("hierarchy")
        .expect("trip exists");
    let day_ids = hierarchy.days.iter().map(|d| d.day.id.clone()).collect::<Vec<_>>();
    assert_eq!(day_ids, vec![day1, day2, day3]);

    let names = hierarchy.days[0]
        .entries
        .iter()
        .map(|e| e.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Breakfast", "Dinner"]);
    assert!(hierarchy.days[2].entries.is_empty());
}

#[test]
fn update_day_patches_fields() {
    let mut store = SqliteStore::open_in_memory().expect("open store");
    let trip_id = trip(&mut store, "Berlin");
    let day_id = store
        .create_day(CreateDayRequest {
            trip_id: trip_id.clone(),
            day_number: 1,
            title: Some("Arrival".to_string()),
            ..Default::default()
        })
        .expect("create day");

    let updated = store
        .update_day(
            &day_id,
            DayPatch {
                day_number: Some(2),
                notes: Some("Late check-in".to_string()),
                ..Default::default()
            },
        )
        .expect("update day");
    assert_eq!(updated.day_number, 2);
    assert_eq!(updated.title.as_deref(), Some("Arrival"));
    assert_eq!(updated.notes.as_deref(), Some("Late check-in"));

    let with_entries = store
        .get_day_with_entries(&day_id)
        .expect("day with entries")
        .expect("day exists");
    assert_eq!(with_entries.day, updated);
    assert!(with_entries.entries.is_empty());

    let err = store.update_day("DAY-404", DayPatch::default()).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn update_day_refuses_a_day_number_already_taken() {
    let mut store = SqliteStore::open_in_memory().expect("open store");
    let trip_id = trip(&mut store, "Prague");
    let first = store.get_or_create_day(&trip_id, 1, None).expect("day 1").id;
    let second = store.get_or_create_day(&trip_id, 2, None).expect("day 2").id;

    let err = store
        .update_day(
            &second,
            DayPatch {
                day_number: Some(1),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidInput(_)), "{err:?}");
    assert_eq!(store.get_day(&second).expect("get").expect("day").day_number, 2);

    let same = store
        .update_day(
            &first,
            DayPatch {
                day_number: Some(1),
                title: Some("Old Town".to_string()),
                ..Default::default()
            },
        )
        .expect("keeping its own number is fine");
    assert_eq!(same.day_number, 1);

    let other_trip = trip(&mut store, "Brno");
    store.get_or_create_day(&other_trip, 3, None).expect("other trip day");
    let moved = store
        .update_day(
            &second,
            DayPatch {
                day_number: Some(3),
                ..Default::default()
            },
        )
        .expect("numbers are scoped to the trip");
    assert_eq!(moved.day_number, 3);
    assert_eq!(
        store.get_or_create_day(&trip_id, 3, None).expect("lookup").id,
        second
    );
}

#[test]
fn store_survives_reopen() {
    let dir = tempfile::tempdir().expect("temp dir");
    let trip_id = {
        let mut store = SqliteStore::open(dir.path()).expect("open store");
        let trip_id = trip(&mut store, "Vienna");
        store.get_or_create_day(&trip_id, 1, None).expect("day");
        trip_id
    };

    let mut store = SqliteStore::open(dir.path()).expect("reopen store");
    assert_eq!(store.schema_version().expect("schema version").as_deref(), Some("v1"));
    assert_eq!(store.list_days(&trip_id).expect("list days").len(), 1);
    assert_eq!(trip(&mut store, "Salzburg"), "TRIP-002");
}
