#![forbid(unsafe_code)]

mod bools;
mod enums;
mod lists;
mod numbers;
mod strings;

pub(crate) use bools::*;
pub(crate) use enums::*;
pub(crate) use lists::*;
pub(crate) use numbers::*;
pub(crate) use strings::*;

use super::ai::ai_error;
use serde_json::Value;

pub(crate) type Args = serde_json::Map<String, Value>;

pub(crate) fn args_object(args: &Value) -> Result<&Args, Value> {
    args.as_object()
        .ok_or_else(|| ai_error("INVALID_INPUT", "arguments must be an object"))
}
