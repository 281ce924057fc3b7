#![forbid(unsafe_code)]

mod support;

use serde_json::{Value, json};
use std::collections::HashSet;
use support::*;

const EXPECTED_TOOLS: &[&str] = &[
    "createTrip",
    "getTrips",
    "findTripsByName",
    "getTrip",
    "updateTrip",
    "deleteTrip",
    "createDay",
    "getOrCreateDay",
    "updateDay",
    "deleteDay",
    "createEntry",
    "createMultipleEntries",
    "updateEntry",
    "reorderEntries",
    "findEntriesByName",
    "findEntriesByCategory",
    "findEntriesByDay",
    "deleteEntry",
    "deleteMultipleEntries",
    "clearDay",
    "sweepOrphans",
];

fn list_tools(server: &mut Server) -> Vec<Value> {
    let resp = server.request(json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" }));
    resp["result"]["tools"].as_array().cloned().expect("tools array")
}

#[test]
fn listed_tools_match_the_contract() {
    let mut server = Server::start_initialized();
    let tools = list_tools(&mut server);
    let names = tools
        .iter()
        .filter_map(|t| t["name"].as_str())
        .collect::<HashSet<_>>();
    let expected = EXPECTED_TOOLS.iter().copied().collect::<HashSet<_>>();
    assert_eq!(names, expected);
}

#[test]
fn every_listed_tool_dispatches() {
    let mut server = Server::start_initialized();
    for tool in list_tools(&mut server) {
        let name = tool["name"].as_str().expect("tool name").to_string();
        // Non-object arguments reach the handler and fail validation there.
        let resp = server.call(&name, json!("not an object"));
        let envelope = extract_tool_text(&resp);
        assert_eq!(
            envelope["error"]["code"], "INVALID_INPUT",
            "{name} did not dispatch to its handler: {envelope}"
        );
    }
}

#[test]
fn destructive_tools_are_annotated() {
    let mut server = Server::start_initialized();
    let tools = list_tools(&mut server);
    let destructive = tools
        .iter()
        .filter(|t| t["annotations"]["destructiveHint"] == true)
        .filter_map(|t| t["name"].as_str())
        .collect::<HashSet<_>>();
    let expected = [
        "deleteTrip",
        "deleteDay",
        "deleteEntry",
        "deleteMultipleEntries",
        "clearDay",
        "sweepOrphans",
    ]
    .into_iter()
    .collect::<HashSet<_>>();
    assert_eq!(destructive, expected);

    for tool in &tools {
        let read_only = tool["annotations"]["readOnlyHint"] == true;
        let name = tool["name"].as_str().unwrap_or_default();
        let is_lookup = (name.starts_with("get") && name != "getOrCreateDay") || name.starts_with("find");
        assert_eq!(read_only, is_lookup, "{name}");
    }
}

#[test]
fn unknown_tools_fail_inside_the_envelope() {
    let mut server = Server::start_initialized();
    let error = server.call_err("searchAndContents", json!({ "query": "museums" }));
    assert_eq!(error["code"], "UNKNOWN_TOOL");
}
