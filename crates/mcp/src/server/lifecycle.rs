#![forbid(unsafe_code)]

use crate::McpServer;
use serde_json::{Value, json};
use tp_storage::SqliteStore;

/// Tool-usage policy shipped to the agent at `initialize`.
pub(crate) const INSTRUCTIONS: &str = "\
Trip planner tools. Build itineraries as trip -> day -> entry: createTrip, then \
getOrCreateDay for each day number, then createEntry (every entry needs a Google Maps \
link such as https://maps.google.com/maps?q=PLACE+NAME+CITY).\n\
Destructive tools (deleteTrip, deleteDay, deleteEntry, deleteMultipleEntries, clearDay, \
sweepOrphans) remove data permanently. Before calling one, run its preview tool \
(getTrip, findEntriesByDay, findEntriesByName or getTrips), show the user exactly what \
will be removed, and wait for their explicit confirmation. Never guess ids: look them up.";

impl McpServer {
    pub(crate) fn new(store: SqliteStore) -> Self {
        Self {
            initialized: false,
            store,
        }
    }

    pub(crate) fn handle(&mut self, request: crate::JsonRpcRequest) -> Option<Value> {
        let method = request.method.as_str();
        let expects_response = !matches!(request.id.as_ref(), None | Some(Value::Null));
        tracing::debug!(method, "request");

        if method == "initialize" {
            let protocol_version = request
                .params
                .as_ref()
                .and_then(|v| v.get("protocolVersion"))
                .and_then(|v| v.as_str())
                .unwrap_or(crate::MCP_VERSION);

            return Some(crate::json_rpc_response(
                request.id,
                json!({
                    "protocolVersion": protocol_version,
                    "serverInfo": {
                        "name": crate::SERVER_NAME,
                        "version": crate::SERVER_VERSION
                    },
                    "capabilities": { "tools": {} },
                    "instructions": INSTRUCTIONS
                }),
            ));
        }

        if method == "notifications/initialized" || method == "initialized" {
            self.initialized = true;
            return None;
        }

        if !self.initialized {
            if expects_response {
                return Some(crate::json_rpc_error(
                    request.id,
                    -32002,
                    "Server not initialized",
                ));
            }
            return None;
        }

        if method == "ping" {
            return Some(crate::json_rpc_response(request.id, json!({})));
        }

        if method == "tools/list" {
            return Some(crate::json_rpc_response(
                request.id,
                json!({ "tools": crate::tools::tool_definitions() }),
            ));
        }

        if method == "tools/call" {
            let Some(params_obj) = request.params.as_ref().and_then(|v| v.as_object()) else {
                return Some(crate::json_rpc_error(
                    request.id,
                    -32602,
                    "params must be an object",
                ));
            };
            let Some(tool_name) = params_obj.get("name").and_then(|v| v.as_str()) else {
                return Some(crate::json_rpc_error(
                    request.id,
                    -32602,
                    "params.name must be a string",
                ));
            };
            // Some clients send `"arguments": null` for empty-args tools.
            let args = match params_obj.get("arguments") {
                None | Some(Value::Null) => json!({}),
                Some(v) => v.clone(),
            };
            let response_body = self.call_tool(tool_name, args);

            return Some(crate::json_rpc_response(
                request.id,
                json!({
                    "content": [crate::tool_text_content(&response_body)],
                    "isError": !response_body.get("success").and_then(|v| v.as_bool()).unwrap_or(false)
                }),
            ));
        }

        // Notifications never get a response, even when unknown.
        if !expects_response {
            return None;
        }

        Some(crate::json_rpc_error(
            request.id,
            -32601,
            &format!("Method not found: {method}"),
        ))
    }

    pub(crate) fn call_tool(&mut self, name: &str, args: Value) -> Value {
        let Some(spec) = crate::tools::find_tool(name) else {
            tracing::warn!(tool = name, "unknown tool");
            return crate::ai_error_with(
                "UNKNOWN_TOOL",
                &format!("Unknown tool: {name}"),
                Some("Call tools/list to see the available tools."),
            );
        };

        let mut response = (spec.handler)(self, args);
        let success = response
            .get("success")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if success {
            tracing::info!(tool = spec.name, "tool succeeded");
        } else {
            crate::prefix_error_message(&mut response, &format!("Error {}: ", spec.action));
            let code = response
                .get("error")
                .and_then(|e| e.get("code"))
                .and_then(|c| c.as_str())
                .unwrap_or("UNKNOWN");
            tracing::warn!(tool = spec.name, code, "tool failed");
        }
        response
    }
}
