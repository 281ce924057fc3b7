#![forbid(unsafe_code)]

use super::super::ai::ai_error;
use super::Args;
use serde_json::Value;
use tp_core::model::{EntryCategory, EntryStatus, TripStatus};

/// Parses an optional closed-set string. The error lists the accepted values.
fn optional_enum<T>(
    args: &Args,
    key: &str,
    parse: fn(&str) -> Option<T>,
    allowed: &[&str],
) -> Result<Option<T>, Value> {
    let Some(value) = args.get(key) else {
        return Ok(None);
    };
    if value.is_null() {
        return Ok(None);
    }
    let parsed = value.as_str().and_then(parse);
    match parsed {
        Some(v) => Ok(Some(v)),
        None => Err(ai_error(
            "INVALID_INPUT",
            &format!("{key} must be one of: {}", allowed.join(", ")),
        )),
    }
}

pub(crate) fn optional_trip_status(args: &Args) -> Result<Option<TripStatus>, Value> {
    optional_enum(args, "status", TripStatus::parse, &TripStatus::names())
}

pub(crate) fn optional_entry_status(args: &Args) -> Result<Option<EntryStatus>, Value> {
    optional_enum(args, "status", EntryStatus::parse, &EntryStatus::names())
}

pub(crate) fn optional_category(args: &Args) -> Result<Option<EntryCategory>, Value> {
    optional_enum(args, "category", EntryCategory::parse, &EntryCategory::names())
}

pub(crate) fn require_category(args: &Args) -> Result<EntryCategory, Value> {
    optional_category(args)?.ok_or_else(|| ai_error("INVALID_INPUT", "category is required"))
}
