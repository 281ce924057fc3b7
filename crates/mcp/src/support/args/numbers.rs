#![forbid(unsafe_code)]

use super::super::ai::ai_error;
use super::Args;
use serde_json::Value;

/// Integers may arrive as `3` or `3.0` from LLM callers; fractional values
/// are rejected.
fn as_whole_i64(value: &Value) -> Option<i64> {
    if let Some(v) = value.as_i64() {
        return Some(v);
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

pub(crate) fn optional_i64(args: &Args, key: &str) -> Result<Option<i64>, Value> {
    let Some(value) = args.get(key) else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(None),
        Value::Number(_) => as_whole_i64(value)
            .map(Some)
            .ok_or_else(|| ai_error("INVALID_INPUT", &format!("{key} must be an integer"))),
        _ => Err(ai_error("INVALID_INPUT", &format!("{key} must be an integer"))),
    }
}

pub(crate) fn require_i64(args: &Args, key: &str) -> Result<i64, Value> {
    optional_i64(args, key)?.ok_or_else(|| ai_error("INVALID_INPUT", &format!("{key} is required")))
}

pub(crate) fn optional_f64(args: &Args, key: &str) -> Result<Option<f64>, Value> {
    let Some(value) = args.get(key) else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| ai_error("INVALID_INPUT", &format!("{key} must be a number"))),
        _ => Err(ai_error("INVALID_INPUT", &format!("{key} must be a number"))),
    }
}

pub(crate) fn require_day_number(args: &Args) -> Result<i64, Value> {
    let day_number = require_i64(args, "dayNumber")?;
    if !tp_core::days::is_valid_day_number(day_number) {
        return Err(ai_error("INVALID_INPUT", "dayNumber must be a positive integer"));
    }
    Ok(day_number)
}

pub(crate) fn optional_day_number(args: &Args) -> Result<Option<i64>, Value> {
    match optional_i64(args, "dayNumber")? {
        Some(n) if !tp_core::days::is_valid_day_number(n) => {
            Err(ai_error("INVALID_INPUT", "dayNumber must be a positive integer"))
        }
        other => Ok(other),
    }
}

fn check_entry_order(order: i64) -> Result<i64, Value> {
    if tp_core::entries::is_valid_order(order) {
        return Ok(order);
    }
    let max = tp_core::entries::MAX_ORDER;
    Err(ai_error(
        "INVALID_INPUT",
        &format!("order must be between -{max} and {max}"),
    ))
}

pub(crate) fn optional_entry_order(args: &Args) -> Result<Option<i64>, Value> {
    optional_i64(args, "order")?.map(check_entry_order).transpose()
}

pub(crate) fn require_entry_order(args: &Args) -> Result<i64, Value> {
    check_entry_order(require_i64(args, "order")?)
}
