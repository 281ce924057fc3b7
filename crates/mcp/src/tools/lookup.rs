#![forbid(unsafe_code)]

use super::{enum_prop, object_schema, string_prop};
use crate::*;
use serde_json::{Value, json};
use tp_core::model::EntryCategory;

pub(super) fn find_entries_by_name_schema() -> Value {
    object_schema(
        json!({
            "tripId": string_prop("Trip id"),
            "entryName": string_prop("Name or partial name of the activity to find"),
            "exactMatch": { "type": "boolean", "description": "Whether to match exactly or allow partial matches" }
        }),
        &["tripId", "entryName"],
    )
}

pub(super) fn find_entries_by_category_schema() -> Value {
    object_schema(
        json!({
            "tripId": string_prop("Trip id"),
            "category": enum_prop(&EntryCategory::names(), "Category to list")
        }),
        &["tripId", "category"],
    )
}

pub(super) fn find_entries_by_day_schema() -> Value {
    object_schema(
        json!({
            "tripId": string_prop("Trip id"),
            "dayNumber": { "type": "integer", "minimum": 1, "description": "Day number (1, 2, 3, etc.)" }
        }),
        &["tripId", "dayNumber"],
    )
}

impl McpServer {
    pub(crate) fn tool_find_entries_by_name(&mut self, args: Value) -> Value {
        let args_obj = match args_object(&args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let trip_id = match require_string(args_obj, "tripId") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let entry_name = match require_text(args_obj, "entryName") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let exact = match optional_bool(args_obj, "exactMatch") {
            Ok(v) => v.unwrap_or(false),
            Err(resp) => return resp,
        };

        match self.store.find_entries_by_name(&trip_id, &entry_name, exact) {
            Ok(matches) => ai_ok("findEntriesByName", entry_matches_json(&matches)),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_find_entries_by_category(&mut self, args: Value) -> Value {
        let args_obj = match args_object(&args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let trip_id = match require_string(args_obj, "tripId") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let category = match require_category(args_obj) {
            Ok(v) => v,
            Err(resp) => return resp,
        };

        match self.store.find_entries_by_category(&trip_id, category) {
            Ok(matches) => ai_ok("findEntriesByCategory", entry_matches_json(&matches)),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_find_entries_by_day(&mut self, args: Value) -> Value {
        let args_obj = match args_object(&args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let trip_id = match require_string(args_obj, "tripId") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let day_number = match require_day_number(args_obj) {
            Ok(v) => v,
            Err(resp) => return resp,
        };

        match self.store.find_entries_by_day(&trip_id, day_number) {
            Ok(matches) => ai_ok("findEntriesByDay", entry_matches_json(&matches)),
            Err(err) => store_error(err),
        }
    }
}
