#![forbid(unsafe_code)]

use super::object_schema;
use crate::*;
use serde_json::{Value, json};

pub(super) fn sweep_orphans_schema() -> Value {
    object_schema(json!({}), &[])
}

impl McpServer {
    pub(crate) fn tool_sweep_orphans(&mut self, args: Value) -> Value {
        if let Err(resp) = args_object(&args) {
            return resp;
        }
        match self.store.sweep_orphans() {
            Ok(report) => {
                let message = if report.is_clean() {
                    "No orphaned days or entries found".to_string()
                } else {
                    format!(
                        "Removed {} orphaned days and {} orphaned entries",
                        report.days_removed, report.entries_removed
                    )
                };
                ai_ok(
                    "sweepOrphans",
                    json!({
                        "daysRemoved": report.days_removed,
                        "entriesRemoved": report.entries_removed,
                        "message": message
                    }),
                )
            }
            Err(err) => store_error(err),
        }
    }
}
