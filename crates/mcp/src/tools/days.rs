#![forbid(unsafe_code)]

use super::{object_schema, string_prop};
use crate::*;
use serde_json::{Value, json};
use tp_storage::{CreateDayRequest, DayPatch};

fn day_number_prop() -> Value {
    json!({ "type": "integer", "minimum": 1, "description": "Day number (1, 2, 3, etc.)" })
}

pub(super) fn create_day_schema() -> Value {
    object_schema(
        json!({
            "tripId": string_prop("Trip id"),
            "dayNumber": day_number_prop(),
            "title": string_prop("Day title, e.g. 'Arrival and Shibuya'"),
            "description": string_prop("What the day is about"),
            "notes": string_prop("Free-form notes")
        }),
        &["tripId", "dayNumber"],
    )
}

pub(super) fn get_or_create_day_schema() -> Value {
    object_schema(
        json!({
            "tripId": string_prop("Trip id"),
            "dayNumber": day_number_prop(),
            "title": string_prop("Title used only when the day is created; defaults to 'Day N'")
        }),
        &["tripId", "dayNumber"],
    )
}

pub(super) fn update_day_schema() -> Value {
    object_schema(
        json!({
            "dayId": string_prop("Day id"),
            "dayNumber": day_number_prop(),
            "title": string_prop("New title"),
            "description": string_prop("New description"),
            "notes": string_prop("New notes")
        }),
        &["dayId"],
    )
}

pub(super) fn delete_day_schema() -> Value {
    object_schema(
        json!({
            "tripId": string_prop("Trip id"),
            "dayNumber": day_number_prop()
        }),
        &["tripId", "dayNumber"],
    )
}

pub(super) fn clear_day_schema() -> Value {
    object_schema(
        json!({
            "tripId": string_prop("Trip id"),
            "dayNumber": day_number_prop()
        }),
        &["tripId", "dayNumber"],
    )
}

fn day_not_in_trip(day_number: i64) -> Value {
    ai_error_with(
        "NOT_FOUND",
        &format!("Day {day_number} not found in this trip"),
        Some("Call getTrip to see which day numbers exist."),
    )
}

impl McpServer {
    pub(crate) fn tool_create_day(&mut self, args: Value) -> Value {
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
        let title = match optional_string(args_obj, "title") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let description = match optional_string(args_obj, "description") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let notes = match optional_string(args_obj, "notes") {
            Ok(v) => v,
            Err(resp) => return resp,
        };

        let request = CreateDayRequest {
            trip_id,
            day_number,
            title,
            description,
            notes,
        };
        match self.store.create_day(request) {
            Ok(day_id) => ai_ok(
                "createDay",
                json!({
                    "dayId": day_id,
                    "dayNumber": day_number,
                    "message": format!("Day {day_number} created")
                }),
            ),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_get_or_create_day(&mut self, args: Value) -> Value {
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
        let title = match optional_string(args_obj, "title") {
            Ok(v) => v,
            Err(resp) => return resp,
        };

        match self.store.get_or_create_day(&trip_id, day_number, title) {
            Ok(handle) => ai_ok(
                "getOrCreateDay",
                json!({
                    "dayId": handle.id,
                    "dayNumber": day_number,
                    "created": handle.created,
                    "message": format!("Day {day_number} ready")
                }),
            ),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_update_day(&mut self, args: Value) -> Value {
        let args_obj = match args_object(&args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let day_id = match require_string(args_obj, "dayId") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let day_number = match optional_day_number(args_obj) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let title = match optional_string(args_obj, "title") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let description = match optional_string(args_obj, "description") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let notes = match optional_string(args_obj, "notes") {
            Ok(v) => v,
            Err(resp) => return resp,
        };

        let patch = DayPatch {
            day_number,
            title,
            description,
            notes,
        };
        let mut warnings = Vec::new();
        if patch.is_empty() {
            warnings.push(warning("EMPTY_PATCH", "No fields to update; only updatedAt changed."));
        }
        match self.store.update_day(&day_id, patch) {
            Ok(day) => ai_ok_with_warnings("updateDay", json!({ "day": day_json(&day) }), warnings),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_delete_day(&mut self, args: Value) -> Value {
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

        let day = match self.store.get_day_by_number(&trip_id, day_number) {
            Ok(Some(day)) => day,
            Ok(None) => return day_not_in_trip(day_number),
            Err(err) => return store_error(err),
        };
        match self.store.delete_day(&day.id) {
            Ok(entries_deleted) => ai_ok(
                "deleteDay",
                json!({
                    "dayId": day.id,
                    "dayNumber": day_number,
                    "entriesDeleted": entries_deleted,
                    "message": format!("Day {day_number} deleted")
                }),
            ),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_clear_day(&mut self, args: Value) -> Value {
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

        let day = match self.store.get_day_by_number(&trip_id, day_number) {
            Ok(Some(day)) => day,
            Ok(None) => return day_not_in_trip(day_number),
            Err(err) => return store_error(err),
        };
        match self.store.clear_day(&day.id) {
            Ok(removed) => ai_ok(
                "clearDay",
                json!({
                    "dayId": day.id,
                    "entriesDeleted": removed,
                    "message": format!("All entries cleared from Day {day_number}")
                }),
            ),
            Err(err) => store_error(err),
        }
    }
}
