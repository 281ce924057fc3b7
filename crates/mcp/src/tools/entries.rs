#![forbid(unsafe_code)]

use super::{enum_prop, object_schema, string_prop};
use crate::*;
use serde_json::{Value, json};
use tp_core::entries::MAX_ORDER;
use tp_core::maps::{MapsLinkError, search_link, validate_maps_link};
use tp_core::model::{EntryCategory, EntryStatus};
use tp_storage::{EntryOrderUpdate, EntryPatch, NewEntry};

fn order_prop(description: &str) -> Value {
    json!({
        "type": "integer",
        "minimum": -MAX_ORDER,
        "maximum": MAX_ORDER,
        "description": description
    })
}

fn entry_properties(require_order: bool) -> Value {
    let order_description = if require_order {
        "Position in the day. 1 is first, 2 is second, etc. Required for every entry in a batch."
    } else {
        "Position in the day. 1 is first, 2 is second, etc. If omitted it is placed after every entry the day has held."
    };
    json!({
        "dayId": string_prop("Day id from getOrCreateDay"),
        "name": string_prop("Activity name like 'Visit the City Museum'"),
        "description": string_prop("Detailed description of the activity"),
        "timestamp": string_prop("Time of day like '9:00 AM' or '2:30 PM'"),
        "googleMapsUrl": string_prop("REQUIRED: Google Maps URL. Format: https://maps.google.com/maps?q=PLACE+NAME+CITY"),
        "websiteUrl": string_prop("Official website"),
        "additionalLinks": { "type": "array", "items": { "type": "string" } },
        "images": { "type": "array", "items": { "type": "string" } },
        "category": enum_prop(&EntryCategory::names(), "Kind of place"),
        "duration": { "type": "integer", "description": "Duration in minutes" },
        "cost": { "type": "number" },
        "order": order_prop(order_description),
        "notes": string_prop("Free-form notes")
    })
}

pub(super) fn create_entry_schema() -> Value {
    object_schema(
        entry_properties(false),
        &["dayId", "name", "timestamp", "googleMapsUrl"],
    )
}

pub(super) fn create_multiple_entries_schema() -> Value {
    object_schema(
        json!({
            "entries": {
                "type": "array",
                "minItems": 1,
                "items": object_schema(
                    entry_properties(true),
                    &["dayId", "name", "timestamp", "googleMapsUrl", "order"],
                )
            }
        }),
        &["entries"],
    )
}

pub(super) fn update_entry_schema() -> Value {
    let mut properties = entry_properties(false);
    if let Some(obj) = properties.as_object_mut() {
        obj.remove("dayId");
        obj.insert("entryId".to_string(), string_prop("Entry id"));
        obj.insert(
            "status".to_string(),
            enum_prop(&EntryStatus::names(), "Booking status"),
        );
    }
    object_schema(properties, &["entryId"])
}

pub(super) fn reorder_entries_schema() -> Value {
    object_schema(
        json!({
            "updates": {
                "type": "array",
                "minItems": 1,
                "items": object_schema(
                    json!({
                        "entryId": string_prop("Entry id"),
                        "order": order_prop("New position in the day")
                    }),
                    &["entryId", "order"],
                )
            }
        }),
        &["updates"],
    )
}

pub(super) fn delete_entry_schema() -> Value {
    object_schema(
        json!({ "entryId": string_prop("The exact entry id to delete") }),
        &["entryId"],
    )
}

pub(super) fn delete_multiple_entries_schema() -> Value {
    object_schema(
        json!({
            "entryIds": {
                "type": "array",
                "minItems": 1,
                "items": { "type": "string" },
                "description": "Entry ids to delete"
            }
        }),
        &["entryIds"],
    )
}

fn maps_link_error(err: MapsLinkError, name: &str) -> Value {
    let recovery = format!("Use a search link such as {}", search_link(name));
    let message = match err {
        MapsLinkError::Missing => err.message().to_string(),
        MapsLinkError::NotAMapsLink => format!("Invalid Google Maps URL for \"{name}\". {}", err.message()),
    };
    ai_error_with("INVALID_INPUT", &message, Some(&recovery))
}

/// Prefixes a validation error with the batch position it came from.
fn at_index(mut resp: Value, key: &str, idx: usize) -> Value {
    prefix_error_message(&mut resp, &format!("{key}[{idx}]: "));
    resp
}

fn parse_new_entry(obj: &Args) -> Result<NewEntry, Value> {
    let day_id = require_string(obj, "dayId")?;
    let name = require_string(obj, "name")?;
    let timestamp = require_string(obj, "timestamp")?;
    let google_maps_url = optional_string(obj, "googleMapsUrl")?.unwrap_or_default();
    validate_maps_link(&google_maps_url).map_err(|err| maps_link_error(err, &name))?;

    Ok(NewEntry {
        day_id,
        description: optional_string(obj, "description")?,
        timestamp,
        google_maps_url: google_maps_url.trim().to_string(),
        website_url: optional_string(obj, "websiteUrl")?,
        additional_links: optional_string_array(obj, "additionalLinks")?,
        images: optional_string_array(obj, "images")?,
        category: optional_category(obj)?,
        duration: optional_i64(obj, "duration")?,
        cost: optional_f64(obj, "cost")?,
        order: optional_entry_order(obj)?,
        notes: optional_string(obj, "notes")?,
        name,
    })
}

impl McpServer {
    pub(crate) fn tool_create_entry(&mut self, args: Value) -> Value {
        let args_obj = match args_object(&args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let entry = match parse_new_entry(args_obj) {
            Ok(v) => v,
            Err(resp) => return resp,
        };

        let name = entry.name.clone();
        let timestamp = entry.timestamp.clone();
        match self.store.create_entry(entry) {
            Ok(entry_id) => ai_ok(
                "createEntry",
                json!({
                    "entryId": entry_id,
                    "message": format!("Entry created: {name} at {timestamp}")
                }),
            ),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_create_multiple_entries(&mut self, args: Value) -> Value {
        let args_obj = match args_object(&args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let items = match require_object_array(args_obj, "entries") {
            Ok(v) => v,
            Err(resp) => return resp,
        };

        let mut entries = Vec::with_capacity(items.len());
        for (idx, item) in items.into_iter().enumerate() {
            let entry = match parse_new_entry(item) {
                Ok(v) => v,
                Err(resp) => return at_index(resp, "entries", idx),
            };
            if entry.order.is_none() {
                return at_index(ai_error("INVALID_INPUT", "order is required"), "entries", idx);
            }
            entries.push(entry);
        }

        match self.store.create_multiple_entries(entries) {
            Ok(entry_ids) => ai_ok(
                "createMultipleEntries",
                json!({
                    "entryIds": entry_ids,
                    "count": entry_ids.len(),
                    "message": format!("{} entries created", entry_ids.len())
                }),
            ),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_update_entry(&mut self, args: Value) -> Value {
        let args_obj = match args_object(&args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let entry_id = match require_string(args_obj, "entryId") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let patch = match parse_entry_patch(args_obj, &entry_id) {
            Ok(v) => v,
            Err(resp) => return resp,
        };

        let mut warnings = Vec::new();
        if patch.is_empty() {
            warnings.push(warning("EMPTY_PATCH", "No fields to update; only updatedAt changed."));
        }
        match self.store.update_entry(&entry_id, patch) {
            Ok(entry) => ai_ok_with_warnings(
                "updateEntry",
                json!({
                    "entry": entry_json(&entry),
                    "message": "Entry updated successfully"
                }),
                warnings,
            ),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_reorder_entries(&mut self, args: Value) -> Value {
        let args_obj = match args_object(&args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let items = match require_object_array(args_obj, "updates") {
            Ok(v) => v,
            Err(resp) => return resp,
        };

        let mut updates = Vec::with_capacity(items.len());
        for (idx, item) in items.into_iter().enumerate() {
            let entry_id = match require_string(item, "entryId") {
                Ok(v) => v,
                Err(resp) => return at_index(resp, "updates", idx),
            };
            let order = match require_entry_order(item) {
                Ok(v) => v,
                Err(resp) => return at_index(resp, "updates", idx),
            };
            updates.push(EntryOrderUpdate { entry_id, order });
        }

        let count = updates.len();
        match self.store.reorder_entries(updates) {
            Ok(()) => ai_ok(
                "reorderEntries",
                json!({
                    "count": count,
                    "message": format!("{count} entries reordered")
                }),
            ),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_delete_entry(&mut self, args: Value) -> Value {
        let args_obj = match args_object(&args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let entry_id = match require_string(args_obj, "entryId") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        match self.store.delete_entry(&entry_id) {
            Ok(()) => ai_ok(
                "deleteEntry",
                json!({
                    "entryId": entry_id,
                    "message": "Entry deleted successfully"
                }),
            ),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_delete_multiple_entries(&mut self, args: Value) -> Value {
        let args_obj = match args_object(&args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let entry_ids = match require_string_array(args_obj, "entryIds") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        match self.store.delete_multiple_entries(&entry_ids) {
            Ok(removed) => ai_ok(
                "deleteMultipleEntries",
                json!({
                    "entryIds": entry_ids,
                    "entriesDeleted": removed,
                    "message": format!("{removed} entries deleted successfully")
                }),
            ),
            Err(err) => store_error(err),
        }
    }
}

fn parse_entry_patch(obj: &Args, entry_id: &str) -> Result<EntryPatch, Value> {
    let google_maps_url = optional_string(obj, "googleMapsUrl")?;
    if let Some(url) = &google_maps_url {
        let name = optional_string(obj, "name")?.unwrap_or_else(|| entry_id.to_string());
        validate_maps_link(url).map_err(|err| maps_link_error(err, &name))?;
    }
    let name = optional_string(obj, "name")?;
    if let Some(name) = &name
        && name.trim().is_empty()
    {
        return Err(ai_error("INVALID_INPUT", "name must not be empty"));
    }

    Ok(EntryPatch {
        name,
        description: optional_string(obj, "description")?,
        timestamp: optional_string(obj, "timestamp")?,
        google_maps_url: google_maps_url.map(|url| url.trim().to_string()),
        website_url: optional_string(obj, "websiteUrl")?,
        additional_links: optional_string_array(obj, "additionalLinks")?,
        images: optional_string_array(obj, "images")?,
        category: optional_category(obj)?,
        duration: optional_i64(obj, "duration")?,
        cost: optional_f64(obj, "cost")?,
        order: optional_entry_order(obj)?,
        status: optional_entry_status(obj)?,
        notes: optional_string(obj, "notes")?,
    })
}
