#![forbid(unsafe_code)]

use super::{enum_prop, object_schema, string_prop};
use crate::*;
use serde_json::{Value, json};
use tp_core::model::TripStatus;
use tp_storage::{CreateTripRequest, TripPatch};

pub(super) fn create_trip_schema() -> Value {
    object_schema(
        json!({
            "name": string_prop("Trip name, e.g. 'Tokyo Spring 2025'"),
            "description": string_prop("Short summary of the trip"),
            "budget": { "type": "number", "description": "Total budget" },
            "travelers": { "type": "integer", "description": "Number of travelers" },
            "notes": string_prop("Free-form notes")
        }),
        &["name"],
    )
}

pub(super) fn get_trips_schema() -> Value {
    object_schema(json!({}), &[])
}

pub(super) fn find_trips_by_name_schema() -> Value {
    object_schema(
        json!({ "name": string_prop("Name or partial name of the trip") }),
        &["name"],
    )
}

pub(super) fn get_trip_schema() -> Value {
    object_schema(json!({ "tripId": string_prop("Trip id, e.g. TRIP-001") }), &["tripId"])
}

pub(super) fn update_trip_schema() -> Value {
    object_schema(
        json!({
            "tripId": string_prop("Trip id"),
            "name": string_prop("New trip name"),
            "description": string_prop("New description"),
            "status": enum_prop(&TripStatus::names(), "Trip status"),
            "budget": { "type": "number" },
            "travelers": { "type": "integer" },
            "notes": string_prop("New notes")
        }),
        &["tripId"],
    )
}

pub(super) fn delete_trip_schema() -> Value {
    object_schema(
        json!({ "tripId": string_prop("The exact trip id to delete. Must be provided by the user.") }),
        &["tripId"],
    )
}

impl McpServer {
    pub(crate) fn tool_create_trip(&mut self, args: Value) -> Value {
        let args_obj = match args_object(&args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let name = match require_string(args_obj, "name") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let description = match optional_string(args_obj, "description") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let budget = match optional_f64(args_obj, "budget") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let travelers = match optional_i64(args_obj, "travelers") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let notes = match optional_string(args_obj, "notes") {
            Ok(v) => v,
            Err(resp) => return resp,
        };

        let request = CreateTripRequest {
            name: name.clone(),
            description,
            budget,
            travelers,
            notes,
        };
        match self.store.create_trip(request) {
            Ok(trip_id) => ai_ok(
                "createTrip",
                json!({
                    "tripId": trip_id,
                    "message": format!("Trip created: {name} (ID: {trip_id})")
                }),
            ),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_get_trips(&mut self, args: Value) -> Value {
        if let Err(resp) = args_object(&args) {
            return resp;
        }
        match self.store.list_trips() {
            Ok(trips) => ai_ok(
                "getTrips",
                json!({
                    "trips": trips.iter().map(trip_json).collect::<Vec<_>>(),
                    "count": trips.len()
                }),
            ),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_find_trips_by_name(&mut self, args: Value) -> Value {
        let args_obj = match args_object(&args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let name = match require_text(args_obj, "name") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        match self.store.find_trips_by_name(&name) {
            Ok(trips) => ai_ok(
                "findTripsByName",
                json!({
                    "trips": trips.iter().map(trip_json).collect::<Vec<_>>(),
                    "count": trips.len()
                }),
            ),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_get_trip(&mut self, args: Value) -> Value {
        let args_obj = match args_object(&args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let trip_id = match require_string(args_obj, "tripId") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        match self.store.get_trip_with_hierarchy(&trip_id) {
            Ok(Some(hierarchy)) => ai_ok("getTrip", json!({ "trip": hierarchy_json(&hierarchy) })),
            Ok(None) => ai_error_with(
                "NOT_FOUND",
                &format!("Trip not found: {trip_id}"),
                Some("Call getTrips or findTripsByName to find the trip id."),
            ),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_update_trip(&mut self, args: Value) -> Value {
        let args_obj = match args_object(&args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let trip_id = match require_string(args_obj, "tripId") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let name = match optional_string(args_obj, "name") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let description = match optional_string(args_obj, "description") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let status = match optional_trip_status(args_obj) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let budget = match optional_f64(args_obj, "budget") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let travelers = match optional_i64(args_obj, "travelers") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let notes = match optional_string(args_obj, "notes") {
            Ok(v) => v,
            Err(resp) => return resp,
        };

        let patch = TripPatch {
            name,
            description,
            status,
            budget,
            travelers,
            notes,
        };
        let mut warnings = Vec::new();
        if patch.is_empty() {
            warnings.push(warning("EMPTY_PATCH", "No fields to update; only updatedAt changed."));
        }
        match self.store.update_trip(&trip_id, patch) {
            Ok(trip) => ai_ok_with_warnings(
                "updateTrip",
                json!({
                    "trip": trip_json(&trip),
                    "message": "Trip updated successfully"
                }),
                warnings,
            ),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_delete_trip(&mut self, args: Value) -> Value {
        let args_obj = match args_object(&args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let Ok(trip_id) = require_string(args_obj, "tripId") else {
            return ai_error_with(
                "INVALID_INPUT",
                "Trip ID is required. Please provide the specific trip ID you want to delete.",
                Some("Ask the user which trip to delete; list candidates with getTrips."),
            );
        };
        match self.store.delete_trip(&trip_id) {
            Ok(report) => ai_ok(
                "deleteTrip",
                json!({
                    "tripId": trip_id,
                    "daysDeleted": report.days_deleted,
                    "entriesDeleted": report.entries_deleted,
                    "message": format!("Trip deleted successfully (ID: {trip_id})")
                }),
            ),
            Err(err) => store_error(err),
        }
    }
}
