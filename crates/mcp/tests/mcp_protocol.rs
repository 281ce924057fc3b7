#![forbid(unsafe_code)]

mod support;

use serde_json::json;
use std::io::{BufRead, BufReader, Read, Write};
use std::process::{Command, Stdio};
use support::*;

#[test]
fn initialize_reports_server_and_confirmation_policy() {
    let mut server = Server::start();
    let resp = server.request(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": { "protocolVersion": "2024-11-05", "capabilities": {} }
    }));
    assert_eq!(resp["id"], 1);
    assert_eq!(resp["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(resp["result"]["serverInfo"]["name"], "tripplanner-mcp");
    let instructions = resp["result"]["instructions"].as_str().expect("instructions");
    assert!(instructions.contains("explicit confirmation"));
}

#[test]
fn calls_before_initialized_are_rejected() {
    let mut server = Server::start();
    let resp = server.request(json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" }));
    assert_json_rpc_error(&resp, -32002);
}

#[test]
fn protocol_errors_use_json_rpc_codes() {
    let mut server = Server::start_initialized();

    let resp = server.request(json!({ "jsonrpc": "2.0", "id": 2, "method": "prompts/list" }));
    assert_json_rpc_error(&resp, -32601);

    let resp = server.request(json!({ "jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": [] }));
    assert_json_rpc_error(&resp, -32602);

    server.send_raw("{\"jsonrpc\": \"2.0\", \"id\": 4, ");
    let resp = server.recv();
    assert_json_rpc_error(&resp, -32700);

    let resp = server.request(json!({ "jsonrpc": "2.0", "id": 5, "method": "ping" }));
    assert_eq!(resp["id"], 5);
    assert_eq!(resp["result"], json!({}));
}

#[test]
fn invalid_tool_arguments_stay_inside_the_envelope() {
    let mut server = Server::start_initialized();
    let resp = server.call("createDay", json!({ "tripId": "TRIP-001", "dayNumber": "one" }));
    assert!(resp.get("error").is_none(), "must not be a JSON-RPC error: {resp}");
    assert_eq!(resp["result"]["isError"], true);
    let envelope = extract_tool_text(&resp);
    assert_eq!(envelope["error"]["code"], "INVALID_INPUT");
    assert_eq!(envelope["error"]["message"], "Error creating day: dayNumber must be an integer");
}

#[test]
fn content_length_framing_is_detected() {
    let storage = tempfile::tempdir().expect("storage dir");
    let mut child = Command::new(env!("CARGO_BIN_EXE_tp_mcp"))
        .arg("--storage-dir")
        .arg(storage.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn tp_mcp");
    let mut stdin = child.stdin.take().expect("stdin");
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout"));

    let body = serde_json::to_vec(&json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {}
    }))
    .expect("serialize");
    write!(stdin, "Content-Length: {}\r\n\r\n", body.len()).expect("write header");
    stdin.write_all(&body).expect("write body");
    stdin.flush().expect("flush");

    let mut content_length = None;
    loop {
        let mut line = String::new();
        let read = stdout.read_line(&mut line).expect("read header");
        assert!(read > 0, "unexpected EOF");
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            break;
        }
        if let Some((key, value)) = trimmed.split_once(':')
            && key.trim().eq_ignore_ascii_case("content-length")
        {
            content_length = value.trim().parse::<usize>().ok();
        }
    }
    let mut payload = vec![0u8; content_length.expect("content-length header")];
    stdout.read_exact(&mut payload).expect("read body");
    let resp: serde_json::Value = serde_json::from_slice(&payload).expect("json body");
    assert_eq!(resp["id"], 1);
    assert!(resp["result"]["serverInfo"].is_object());

    let _ = child.kill();
    let _ = child.wait();
}

#[test]
fn help_and_version_exit_cleanly() {
    let exe = env!("CARGO_BIN_EXE_tp_mcp");
    let output = Command::new(exe).arg("--help").output().expect("run --help");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--storage-dir"));
    assert!(stdout.contains("--log-level"));

    let output = Command::new(exe).arg("--version").output().expect("run --version");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn data_persists_across_restarts() {
    let storage = tempfile::tempdir().expect("storage dir");
    let spawn = || {
        Command::new(env!("CARGO_BIN_EXE_tp_mcp"))
            .arg("--storage-dir")
            .arg(storage.path())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("spawn tp_mcp")
    };
    let session = |requests: &[serde_json::Value]| -> Vec<serde_json::Value> {
        let mut child = spawn();
        {
            let mut stdin = child.stdin.take().expect("stdin");
            for req in requests {
                writeln!(stdin, "{req}").expect("write");
            }
        }
        let output = child.wait_with_output().expect("wait");
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(|l| serde_json::from_str(l).expect("json line"))
            .collect()
    };
    let init = [
        json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {} }),
        json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
    ];

    let mut first = init.to_vec();
    first.push(json!({
        "jsonrpc": "2.0", "id": 2, "method": "tools/call",
        "params": { "name": "createTrip", "arguments": { "name": "Persistent" } }
    }));
    let responses = session(&first);
    assert_eq!(responses.len(), 2);

    let mut second = init.to_vec();
    second.push(json!({
        "jsonrpc": "2.0", "id": 2, "method": "tools/call",
        "params": { "name": "getTrips", "arguments": {} }
    }));
    let responses = session(&second);
    let envelope = extract_tool_text(&responses[1]);
    assert_eq!(envelope["result"]["count"], 1);
    assert_eq!(envelope["result"]["trips"][0]["name"], "Persistent");
}
