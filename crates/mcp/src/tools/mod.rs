#![forbid(unsafe_code)]

//! Tool registry: one static table drives both `tools/list` and `tools/call`.

mod days;
mod entries;
mod lookup;
mod maintenance;
mod trips;

use crate::McpServer;
use serde_json::{Value, json};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ToolKind {
    Read,
    Write,
    /// Removes data. Callers are expected to run `preview` and obtain the
    /// user's explicit confirmation first.
    Destructive,
}

pub(crate) struct ToolSpec {
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    /// Verb phrase used in error messages: `Error {action}: ...`.
    pub(crate) action: &'static str,
    pub(crate) kind: ToolKind,
    pub(crate) preview: Option<&'static str>,
    pub(crate) schema: fn() -> Value,
    pub(crate) handler: fn(&mut McpServer, Value) -> Value,
}

macro_rules! define_tools {
    (@preview) => { None };
    (@preview $preview:literal) => { Some($preview) };
    ($($name:literal => $kind:ident $([preview = $preview:literal])? {
        description: $description:expr,
        action: $action:literal,
        handler: $handler:path,
        schema: $schema:path $(,)?
    }),* $(,)?) => {
        pub(crate) static TOOLS: &[ToolSpec] = &[
            $(ToolSpec {
                name: $name,
                description: $description,
                action: $action,
                kind: ToolKind::$kind,
                preview: define_tools!(@preview $($preview)?),
                schema: $schema,
                handler: $handler,
            }),*
        ];
    };
}

define_tools! {
    "createTrip" => Write {
        description: "Create a new trip with basic information. Start with trip basics, then add days and entries.",
        action: "creating trip",
        handler: McpServer::tool_create_trip,
        schema: trips::create_trip_schema,
    },
    "getTrips" => Read {
        description: "List every trip, newest first. Use it to find a trip id by name.",
        action: "fetching trips",
        handler: McpServer::tool_get_trips,
        schema: trips::get_trips_schema,
    },
    "findTripsByName" => Read {
        description: "Find trips whose name contains the given text (case-insensitive).",
        action: "finding trips",
        handler: McpServer::tool_find_trips_by_name,
        schema: trips::find_trips_by_name_schema,
    },
    "getTrip" => Read {
        description: "Get a specific trip with all its days (by day number) and entries (by order).",
        action: "fetching trip",
        handler: McpServer::tool_get_trip,
        schema: trips::get_trip_schema,
    },
    "updateTrip" => Write {
        description: "Update basic trip information (name, description, status, budget, travelers, notes). Omitted fields stay unchanged.",
        action: "updating trip",
        handler: McpServer::tool_update_trip,
        schema: trips::update_trip_schema,
    },
    "deleteTrip" => Destructive [preview = "getTrip"] {
        description: "Delete an entire trip with all its days and entries. REQUIRES the exact trip id provided by the user. Show the trip with getTrip and get explicit confirmation first.",
        action: "deleting trip",
        handler: McpServer::tool_delete_trip,
        schema: trips::delete_trip_schema,
    },
    "createDay" => Write {
        description: "Create a new day for a trip with a specific day number (1, 2, 3, etc.). Prefer getOrCreateDay to avoid duplicates.",
        action: "creating day",
        handler: McpServer::tool_create_day,
        schema: days::create_day_schema,
    },
    "getOrCreateDay" => Write {
        description: "Get an existing day or create it if it doesn't exist. Use this to ensure a day exists before adding entries.",
        action: "getting/creating day",
        handler: McpServer::tool_get_or_create_day,
        schema: days::get_or_create_day_schema,
    },
    "updateDay" => Write {
        description: "Update a day's number, title, description or notes. Omitted fields stay unchanged; a new number must not already be used by another day of the trip.",
        action: "updating day",
        handler: McpServer::tool_update_day,
        schema: days::update_day_schema,
    },
    "deleteDay" => Destructive [preview = "findEntriesByDay"] {
        description: "Delete a day and every entry in it. Show its entries with findEntriesByDay and get explicit confirmation first.",
        action: "deleting day",
        handler: McpServer::tool_delete_day,
        schema: days::delete_day_schema,
    },
    "createEntry" => Write {
        description: "Create a detailed activity entry for a specific day. REQUIRES a Google Maps URL like https://maps.google.com/maps?q=PLACE+NAME+CITY. Order is assigned automatically when omitted.",
        action: "creating entry",
        handler: McpServer::tool_create_entry,
        schema: entries::create_entry_schema,
    },
    "createMultipleEntries" => Write {
        description: "Create several entries at once. Every entry needs its own order and Google Maps URL; nothing is saved if any entry is invalid.",
        action: "creating entries",
        handler: McpServer::tool_create_multiple_entries,
        schema: entries::create_multiple_entries_schema,
    },
    "updateEntry" => Write {
        description: "Update fields of an existing entry (including status and order). Omitted fields stay unchanged.",
        action: "updating entry",
        handler: McpServer::tool_update_entry,
        schema: entries::update_entry_schema,
    },
    "reorderEntries" => Write {
        description: "Set new order values for several entries in one step.",
        action: "reordering entries",
        handler: McpServer::tool_reorder_entries,
        schema: entries::reorder_entries_schema,
    },
    "findEntriesByName" => Read {
        description: "Find entries within a trip by name. Use this to locate entries before deleting them.",
        action: "finding entries",
        handler: McpServer::tool_find_entries_by_name,
        schema: lookup::find_entries_by_name_schema,
    },
    "findEntriesByCategory" => Read {
        description: "Find all entries of a specific category within a trip (e.g., all restaurants, all museums).",
        action: "finding entries by category",
        handler: McpServer::tool_find_entries_by_category,
        schema: lookup::find_entries_by_category_schema,
    },
    "findEntriesByDay" => Read {
        description: "Find all entries for a specific day within a trip.",
        action: "finding entries by day",
        handler: McpServer::tool_find_entries_by_day,
        schema: lookup::find_entries_by_day_schema,
    },
    "deleteEntry" => Destructive [preview = "findEntriesByName"] {
        description: "Delete a specific entry by its id. Find it with findEntriesByName, show it, and get explicit confirmation first.",
        action: "deleting entry",
        handler: McpServer::tool_delete_entry,
        schema: entries::delete_entry_schema,
    },
    "deleteMultipleEntries" => Destructive [preview = "findEntriesByName"] {
        description: "Delete several entries by id. Nothing is deleted if any id is unknown. Show the entries and get explicit confirmation first.",
        action: "deleting entries",
        handler: McpServer::tool_delete_multiple_entries,
        schema: entries::delete_multiple_entries_schema,
    },
    "clearDay" => Destructive [preview = "findEntriesByDay"] {
        description: "Remove all entries from a specific day, keeping the day. Use findEntriesByDay first to show what will be deleted and get explicit confirmation.",
        action: "clearing day",
        handler: McpServer::tool_clear_day,
        schema: days::clear_day_schema,
    },
    "sweepOrphans" => Destructive [preview = "getTrips"] {
        description: "Maintenance: remove days whose trip no longer exists and entries whose day no longer exists. Run only when the user asks for a repair.",
        action: "sweeping orphans",
        handler: McpServer::tool_sweep_orphans,
        schema: maintenance::sweep_orphans_schema,
    },
}

pub(crate) fn find_tool(name: &str) -> Option<&'static ToolSpec> {
    TOOLS.iter().find(|spec| spec.name == name)
}

pub(crate) fn tool_definitions() -> Vec<Value> {
    TOOLS
        .iter()
        .map(|spec| {
            json!({
                "name": spec.name,
                "description": spec.description,
                "inputSchema": (spec.schema)(),
                "annotations": {
                    "readOnlyHint": spec.kind == ToolKind::Read,
                    "destructiveHint": spec.kind == ToolKind::Destructive
                }
            })
        })
        .collect()
}

/// Object schema with the given properties; `required` must name a subset.
fn object_schema(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

fn string_prop(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

fn enum_prop(values: &[&str], description: &str) -> Value {
    json!({ "type": "string", "enum": values, "description": description })
}
