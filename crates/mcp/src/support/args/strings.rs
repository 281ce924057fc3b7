#![forbid(unsafe_code)]

use super::super::ai::ai_error;
use super::Args;
use serde_json::Value;

/// A present, non-blank string.
pub(crate) fn require_string(args: &Args, key: &str) -> Result<String, Value> {
    let Some(v) = args.get(key).and_then(|v| v.as_str()) else {
        return Err(ai_error("INVALID_INPUT", &format!("{key} is required")));
    };
    if v.trim().is_empty() {
        return Err(ai_error("INVALID_INPUT", &format!("{key} must not be empty")));
    }
    Ok(v.to_string())
}

/// A present string that may be blank (free-text search needles).
pub(crate) fn require_text(args: &Args, key: &str) -> Result<String, Value> {
    match args.get(key) {
        Some(Value::String(v)) => Ok(v.to_string()),
        Some(Value::Null) | None => Err(ai_error("INVALID_INPUT", &format!("{key} is required"))),
        Some(_) => Err(ai_error("INVALID_INPUT", &format!("{key} must be a string"))),
    }
}

pub(crate) fn optional_string(args: &Args, key: &str) -> Result<Option<String>, Value> {
    let Some(value) = args.get(key) else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(None),
        Value::String(v) => Ok(Some(v.to_string())),
        _ => Err(ai_error("INVALID_INPUT", &format!("{key} must be a string"))),
    }
}
