#![forbid(unsafe_code)]

//! camelCase JSON views of store rows.

use super::time::ts_ms_to_rfc3339;
use serde_json::{Value, json};
use tp_storage::{DayRow, DayWithEntries, EntryMatch, EntryRow, TripHierarchy, TripRow};

pub(crate) fn trip_json(trip: &TripRow) -> Value {
    json!({
        "id": trip.id,
        "name": trip.name,
        "description": trip.description,
        "status": trip.status.as_str(),
        "budget": trip.budget,
        "travelers": trip.travelers,
        "notes": trip.notes,
        "createdAt": trip.created_at_ms,
        "createdAtRfc3339": ts_ms_to_rfc3339(trip.created_at_ms),
        "updatedAt": trip.updated_at_ms,
        "updatedAtRfc3339": ts_ms_to_rfc3339(trip.updated_at_ms)
    })
}

pub(crate) fn day_json(day: &DayRow) -> Value {
    json!({
        "id": day.id,
        "tripId": day.trip_id,
        "dayNumber": day.day_number,
        "title": day.title,
        "description": day.description,
        "notes": day.notes,
        "createdAt": day.created_at_ms,
        "createdAtRfc3339": ts_ms_to_rfc3339(day.created_at_ms),
        "updatedAt": day.updated_at_ms,
        "updatedAtRfc3339": ts_ms_to_rfc3339(day.updated_at_ms)
    })
}

pub(crate) fn entry_json(entry: &EntryRow) -> Value {
    json!({
        "id": entry.id,
        "dayId": entry.day_id,
        "name": entry.name,
        "description": entry.description,
        "timestamp": entry.timestamp,
        "googleMapsUrl": entry.google_maps_url,
        "websiteUrl": entry.website_url,
        "additionalLinks": entry.additional_links,
        "images": entry.images,
        "category": entry.category.map(|c| c.as_str()),
        "duration": entry.duration,
        "cost": entry.cost,
        "order": entry.order,
        "status": entry.status.as_str(),
        "notes": entry.notes,
        "createdAt": entry.created_at_ms,
        "createdAtRfc3339": ts_ms_to_rfc3339(entry.created_at_ms),
        "updatedAt": entry.updated_at_ms,
        "updatedAtRfc3339": ts_ms_to_rfc3339(entry.updated_at_ms)
    })
}

/// Entry plus the day it sits in, flattened into one object.
pub(crate) fn entry_match_json(found: &EntryMatch) -> Value {
    let mut value = entry_json(&found.entry);
    if let Some(obj) = value.as_object_mut() {
        obj.insert("dayNumber".to_string(), json!(found.day_number));
        obj.insert("dayTitle".to_string(), json!(found.day_title));
    }
    value
}

pub(crate) fn day_with_entries_json(day: &DayWithEntries) -> Value {
    let mut value = day_json(&day.day);
    if let Some(obj) = value.as_object_mut() {
        obj.insert(
            "entries".to_string(),
            Value::Array(day.entries.iter().map(entry_json).collect()),
        );
    }
    value
}

pub(crate) fn hierarchy_json(hierarchy: &TripHierarchy) -> Value {
    let mut value = trip_json(&hierarchy.trip);
    if let Some(obj) = value.as_object_mut() {
        obj.insert(
            "days".to_string(),
            Value::Array(hierarchy.days.iter().map(day_with_entries_json).collect()),
        );
    }
    value
}

pub(crate) fn entry_matches_json(matches: &[EntryMatch]) -> Value {
    json!({
        "entries": matches.iter().map(entry_match_json).collect::<Vec<_>>(),
        "count": matches.len()
    })
}
