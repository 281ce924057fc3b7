#![forbid(unsafe_code)]

use crate::json_rpc_error;
use serde_json::Value;
use std::io::{BufRead, Write};

const MAX_CONTENT_LENGTH_BYTES: usize = 16 * 1024 * 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum TransportMode {
    NewlineJson,
    ContentLength,
}

pub(super) fn detect_mode_from_first_line(line: &str) -> Option<TransportMode> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return Some(TransportMode::NewlineJson);
    }
    // Some clients send Content-Type before Content-Length.
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("content-length:") || lower.starts_with("content-type:") {
        return Some(TransportMode::ContentLength);
    }
    None
}

fn parse_content_length_header(line: &str) -> Option<usize> {
    let trimmed = line.trim();
    let (key, value) = trimmed.split_once(':')?;
    if !key.trim().eq_ignore_ascii_case("content-length") {
        return None;
    }
    value.trim().parse::<usize>().ok()
}

/// Reads the rest of a header block starting at `first_header`, then the
/// body. `Ok(None)` means the peer closed mid-frame.
pub(super) fn read_content_length_frame<R: BufRead>(
    reader: &mut R,
    first_header: String,
) -> std::io::Result<Option<Vec<u8>>> {
    let mut header = first_header;
    let mut content_length: Option<usize> = parse_content_length_header(&header);

    loop {
        if header.trim_end().is_empty() {
            break;
        }
        header.clear();
        let read = reader.read_line(&mut header)?;
        if read == 0 {
            return Ok(None);
        }
        if content_length.is_none() {
            content_length = parse_content_length_header(&header);
        }
    }

    let Some(len) = content_length else {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "Missing Content-Length header",
        ));
    };
    if len > MAX_CONTENT_LENGTH_BYTES {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "Content-Length exceeds max allowed size",
        ));
    }

    let mut body = vec![0u8; len];
    reader.read_exact(&mut body)?;
    Ok(Some(body))
}

pub(super) fn write_frame<W: Write>(
    writer: &mut W,
    mode: TransportMode,
    resp: &Value,
) -> Result<(), Box<dyn std::error::Error>> {
    match mode {
        TransportMode::NewlineJson => {
            writeln!(writer, "{}", serde_json::to_string(resp)?)?;
        }
        TransportMode::ContentLength => {
            let body = serde_json::to_vec(resp)?;
            write!(writer, "Content-Length: {}\r\n\r\n", body.len())?;
            writer.write_all(&body)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Parses one JSON-RPC message; the error side is a ready-to-send response.
pub(super) fn parse_request(body: &[u8]) -> Result<crate::JsonRpcRequest, Value> {
    let data: Value = serde_json::from_slice(body)
        .map_err(|e| json_rpc_error(None, -32700, &format!("Parse error: {e}")))?;

    let (id, has_method) = match data.as_object() {
        Some(obj) => (obj.get("id").cloned(), obj.contains_key("method")),
        None => return Err(json_rpc_error(None, -32600, "Invalid Request")),
    };
    if !has_method {
        return Err(json_rpc_error(id, -32600, "Invalid Request"));
    }

    serde_json::from_value::<crate::JsonRpcRequest>(data)
        .map_err(|e| json_rpc_error(id, -32600, &format!("Invalid Request: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn detects_framing_from_the_first_line() {
        assert_eq!(detect_mode_from_first_line("  {\"jsonrpc\":\"2.0\"}"), Some(TransportMode::NewlineJson));
        assert_eq!(detect_mode_from_first_line("Content-Length: 12\r\n"), Some(TransportMode::ContentLength));
        assert_eq!(detect_mode_from_first_line("content-type: application/json"), Some(TransportMode::ContentLength));
        assert_eq!(detect_mode_from_first_line("\r\n"), None);
        assert_eq!(detect_mode_from_first_line("hello"), None);
    }

    #[test]
    fn reads_a_content_length_frame() {
        let mut reader = Cursor::new(b"Content-Type: application/json\r\n\r\n{\"a\":1}rest".to_vec());
        let body = read_content_length_frame(&mut reader, "Content-Length: 7\r\n".to_string())
            .expect("read frame")
            .expect("frame present");
        assert_eq!(body, b"{\"a\":1}");
    }

    #[test]
    fn rejects_frames_without_length() {
        let mut reader = Cursor::new(b"\r\n{}".to_vec());
        let err = read_content_length_frame(&mut reader, "Content-Type: application/json\r\n".to_string())
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn parse_errors_become_json_rpc_errors() {
        let err = parse_request(b"{not json").unwrap_err();
        assert_eq!(err["error"]["code"], -32700);

        let err = parse_request(br#"{"id":4}"#).unwrap_err();
        assert_eq!(err["error"]["code"], -32600);
        assert_eq!(err["id"], 4);

        let request = parse_request(br#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#).expect("request");
        assert_eq!(request.method, "ping");
    }
}
