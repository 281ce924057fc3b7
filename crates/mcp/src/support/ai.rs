#![forbid(unsafe_code)]

use serde_json::{Value, json};
use tp_storage::StoreError;

pub(crate) fn format_store_error(err: &StoreError) -> String {
    match err {
        StoreError::Io(e) => format!("IO: {e}"),
        StoreError::Sql(e) => format!("SQL: {e}"),
        StoreError::InvalidInput(msg) => (*msg).to_string(),
        StoreError::NotFound { kind, id } => format!("{} not found: {id}", capitalize(kind)),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Maps a store failure onto the envelope error codes.
pub(crate) fn store_error(err: StoreError) -> Value {
    let message = format_store_error(&err);
    match err {
        StoreError::InvalidInput(_) => ai_error("INVALID_INPUT", &message),
        StoreError::NotFound { kind, .. } => ai_error_with(
            "NOT_FOUND",
            &message,
            Some(not_found_recovery(kind)),
        ),
        StoreError::Io(_) | StoreError::Sql(_) => ai_error("STORE_ERROR", &message),
    }
}

fn not_found_recovery(kind: &str) -> &'static str {
    match kind {
        "trip" => "Call getTrips or findTripsByName to find the trip id.",
        "day" => "Call getTrip to list the trip's days, or getOrCreateDay to create one.",
        _ => "Call findEntriesByName or findEntriesByDay to find the entry id.",
    }
}

pub(crate) fn ai_ok_with_warnings(intent: &str, result: Value, warnings: Vec<Value>) -> Value {
    json!({
        "success": true,
        "intent": intent,
        "result": result,
        "warnings": warnings,
        "error": null
    })
}

pub(crate) fn ai_ok(intent: &str, result: Value) -> Value {
    ai_ok_with_warnings(intent, result, Vec::new())
}

pub(crate) fn warning(code: &str, message: &str) -> Value {
    json!({ "code": code, "message": message })
}

pub(crate) fn ai_error(code: &str, message: &str) -> Value {
    ai_error_with(code, message, None)
}

pub(crate) fn ai_error_with(code: &str, message: &str, recovery: Option<&str>) -> Value {
    let mut error_obj = serde_json::Map::new();
    error_obj.insert("code".to_string(), Value::String(code.to_string()));
    error_obj.insert("message".to_string(), Value::String(message.trim().to_string()));
    if let Some(recovery) = recovery {
        error_obj.insert("recovery".to_string(), Value::String(recovery.trim().to_string()));
    }

    json!({
        "success": false,
        "intent": "error",
        "result": {},
        "warnings": [],
        "error": Value::Object(error_obj)
    })
}

/// Prepends `prefix` to an error envelope's message. Success envelopes are
/// left alone.
pub(crate) fn prefix_error_message(response: &mut Value, prefix: &str) {
    if let Some(message) = response
        .get_mut("error")
        .and_then(|err| err.get_mut("message"))
        && let Some(text) = message.as_str()
    {
        *message = Value::String(format!("{prefix}{text}"));
    }
}
