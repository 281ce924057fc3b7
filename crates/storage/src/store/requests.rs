#![forbid(unsafe_code)]

use tp_core::model::{EntryCategory, EntryStatus, TripStatus};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateTripRequest {
    pub name: String,
    pub description: Option<String>,
    pub budget: Option<f64>,
    pub travelers: Option<i64>,
    pub notes: Option<String>,
}

/// Merge-patch for a trip: `None` leaves the stored value untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<TripStatus>,
    pub budget: Option<f64>,
    pub travelers: Option<i64>,
    pub notes: Option<String>,
}

impl TripPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.budget.is_none()
            && self.travelers.is_none()
            && self.notes.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateDayRequest {
    pub trip_id: String,
    pub day_number: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DayPatch {
    pub day_number: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
}

impl DayPatch {
    pub fn is_empty(&self) -> bool {
        self.day_number.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.notes.is_none()
    }
}

/// A new activity entry.
///
/// `order` is optional for [`crate::SqliteStore::create_entry`] (the store
/// appends after the day's high-water mark) but mandatory for every element
/// passed to [`crate::SqliteStore::create_multiple_entries`], which never
/// auto-numbers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewEntry {
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
    pub order: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub timestamp: Option<String>,
    pub google_maps_url: Option<String>,
    pub website_url: Option<String>,
    pub additional_links: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub category: Option<EntryCategory>,
    pub duration: Option<i64>,
    pub cost: Option<f64>,
    pub order: Option<i64>,
    pub status: Option<EntryStatus>,
    pub notes: Option<String>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.timestamp.is_none()
            && self.google_maps_url.is_none()
            && self.website_url.is_none()
            && self.additional_links.is_none()
            && self.images.is_none()
            && self.category.is_none()
            && self.duration.is_none()
            && self.cost.is_none()
            && self.order.is_none()
            && self.status.is_none()
            && self.notes.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryOrderUpdate {
    pub entry_id: String,
    pub order: i64,
}
