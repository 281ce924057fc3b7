#![forbid(unsafe_code)]

use super::super::ai::ai_error;
use super::Args;
use serde_json::Value;

pub(crate) fn optional_string_array(args: &Args, key: &str) -> Result<Option<Vec<String>>, Value> {
    let Some(value) = args.get(key) else {
        return Ok(None);
    };
    if value.is_null() {
        return Ok(None);
    }
    let Some(arr) = value.as_array() else {
        return Err(ai_error("INVALID_INPUT", &format!("{key} must be an array of strings")));
    };
    let mut out = Vec::with_capacity(arr.len());
    for item in arr {
        let Some(s) = item.as_str() else {
            return Err(ai_error("INVALID_INPUT", &format!("{key} must be an array of strings")));
        };
        out.push(s.to_string());
    }
    Ok(Some(out))
}

pub(crate) fn require_string_array(args: &Args, key: &str) -> Result<Vec<String>, Value> {
    let list = optional_string_array(args, key)?
        .ok_or_else(|| ai_error("INVALID_INPUT", &format!("{key} is required")))?;
    if list.is_empty() {
        return Err(ai_error("INVALID_INPUT", &format!("{key} must not be empty")));
    }
    Ok(list)
}

/// A non-empty array whose items are all objects.
pub(crate) fn require_object_array<'a>(args: &'a Args, key: &str) -> Result<Vec<&'a Args>, Value> {
    let Some(arr) = args.get(key).and_then(|v| v.as_array()) else {
        return Err(ai_error("INVALID_INPUT", &format!("{key} must be an array of objects")));
    };
    if arr.is_empty() {
        return Err(ai_error("INVALID_INPUT", &format!("{key} must not be empty")));
    }
    arr.iter()
        .enumerate()
        .map(|(idx, item)| {
            item.as_object()
                .ok_or_else(|| ai_error("INVALID_INPUT", &format!("{key}[{idx}] must be an object")))
        })
        .collect()
}
