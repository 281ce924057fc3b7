#![forbid(unsafe_code)]

use super::super::{DayRow, EntryRow, StoreError, TripRow};
use rusqlite::Row;
use rusqlite::types::Type;
use tp_core::model::{EntryCategory, EntryStatus, TripStatus};

pub(in crate::store) const TRIP_COLUMNS: &str =
    "id, name, description, status, budget, travelers, notes, created_at_ms, updated_at_ms";

pub(in crate::store) const DAY_COLUMNS: &str =
    "id, trip_id, day_number, title, description, notes, created_at_ms, updated_at_ms";

pub(in crate::store) const ENTRY_COLUMNS: &str = "id, day_id, name, description, timestamp, google_maps_url, website_url, additional_links_json, images_json, category, duration, cost, ord, status, notes, created_at_ms, updated_at_ms";

fn unknown_value(idx: usize, raw: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, format!("unknown value: {raw}").into())
}

pub(in crate::store) fn trip_from_row(row: &Row<'_>) -> rusqlite::Result<TripRow> {
    let status_raw: String = row.get(3)?;
    let status = TripStatus::parse(&status_raw).ok_or_else(|| unknown_value(3, &status_raw))?;
    Ok(TripRow {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        status,
        budget: row.get(4)?,
        travelers: row.get(5)?,
        notes: row.get(6)?,
        created_at_ms: row.get(7)?,
        updated_at_ms: row.get(8)?,
    })
}

pub(in crate::store) fn day_from_row(row: &Row<'_>) -> rusqlite::Result<DayRow> {
    Ok(DayRow {
        id: row.get(0)?,
        trip_id: row.get(1)?,
        day_number: row.get(2)?,
        title: row.get(3)?,
        description: row.get(4)?,
        notes: row.get(5)?,
        created_at_ms: row.get(6)?,
        updated_at_ms: row.get(7)?,
    })
}

pub(in crate::store) fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<EntryRow> {
    let category = match row.get::<_, Option<String>>(9)? {
        None => None,
        Some(raw) => Some(EntryCategory::parse(&raw).ok_or_else(|| unknown_value(9, &raw))?),
    };
    let status_raw: String = row.get(13)?;
    let status = EntryStatus::parse(&status_raw).ok_or_else(|| unknown_value(13, &status_raw))?;
    Ok(EntryRow {
        id: row.get(0)?,
        day_id: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        timestamp: row.get(4)?,
        google_maps_url: row.get(5)?,
        website_url: row.get(6)?,
        additional_links: string_list_column(row, 7)?,
        images: string_list_column(row, 8)?,
        category,
        duration: row.get(10)?,
        cost: row.get(11)?,
        order: row.get(12)?,
        status,
        notes: row.get(14)?,
        created_at_ms: row.get(15)?,
        updated_at_ms: row.get(16)?,
    })
}

fn string_list_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<Vec<String>>> {
    let Some(raw) = row.get::<_, Option<String>>(idx)? else {
        return Ok(None);
    };
    serde_json::from_str::<Vec<String>>(&raw)
        .map(Some)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err)))
}

pub(in crate::store) fn string_list_json(value: Option<&Vec<String>>) -> Result<Option<String>, StoreError> {
    match value {
        None => Ok(None),
        Some(list) => serde_json::to_string(list)
            .map(Some)
            .map_err(|_| StoreError::InvalidInput("link lists must be serializable")),
    }
}

pub(in crate::store) fn category_str(value: Option<EntryCategory>) -> Option<&'static str> {
    value.map(EntryCategory::as_str)
}
