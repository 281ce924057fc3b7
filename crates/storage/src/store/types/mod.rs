#![forbid(unsafe_code)]

use tp_core::model::{EntryCategory, EntryStatus, TripStatus};

#[derive(Clone, Debug, PartialEq)]
pub struct TripRow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: TripStatus,
    pub budget: Option<f64>,
    pub travelers: Option<i64>,
    pub notes: Option<String>,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayRow {
    pub id: String,
    pub trip_id: String,
    pub day_number: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EntryRow {
    pub id: String,
    pub day_id: String,
    pub name: String,
    pub description: Option<String>,
    pub timestamp: String,
    pub google_maps_url: String,
    pub website_url: Option<String>,
    pub additional_links: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub category: Option<EntryCategory>,
    pub duration: Option<i64>,
    pub cost: Option<f64>,
    pub order: i64,
    pub status: EntryStatus,
    pub notes: Option<String>,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DayWithEntries {
    pub day: DayRow,
    pub entries: Vec<EntryRow>,
}

/// Read-side join of a trip with its days (ascending by day number) and each
/// day's entries (ascending by order).
#[derive(Clone, Debug, PartialEq)]
pub struct TripHierarchy {
    pub trip: TripRow,
    pub days: Vec<DayWithEntries>,
}

/// An entry found by a lookup, annotated with its parent day. The day fields
/// are a convenience for callers and are not persisted on the entry.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryMatch {
    pub entry: EntryRow,
    pub day_number: i64,
    pub day_title: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayHandle {
    pub id: String,
    pub created: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub days_deleted: usize,
    pub entries_deleted: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrphanReport {
    pub days_removed: usize,
    pub entries_removed: usize,
}

impl OrphanReport {
    pub fn is_clean(&self) -> bool {
        self.days_removed == 0 && self.entries_removed == 0
    }
}
