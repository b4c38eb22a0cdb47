use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::error::PersonaError;
use crate::models::request::PersonaRequest;

/// Maximum line size for session input: 100 MB.
const MAX_LINE_SIZE: usize = 100 * 1024 * 1024;

/// Run an NDJSON streaming session: read requests from stdin, process, write responses to stdout.
pub fn run_session(handler: impl Fn(PersonaRequest) -> Result<serde_json::Value>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session_on(stdin.lock(), io::BufWriter::new(stdout.lock()), handler)
}

/// Session loop over arbitrary streams. One response line per non-blank input line.
pub fn run_session_on(
    input: impl BufRead,
    mut out: impl Write,
    handler: impl Fn(PersonaRequest) -> Result<serde_json::Value>,
) -> Result<()> {
    for raw in input.split(b'\n') {
        let raw = raw?;
        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                write_line(
                    &mut out,
                    &error_value("INVALID_REQUEST", format!("Request is not valid UTF-8: {e}")),
                )?;
                continue;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let response = if trimmed.len() > MAX_LINE_SIZE {
            error_value(
                "INVALID_REQUEST",
                format!(
                    "Input line exceeds maximum size ({} bytes > {} bytes)",
                    trimmed.len(),
                    MAX_LINE_SIZE
                ),
            )
        } else {
            match serde_json::from_str::<PersonaRequest>(trimmed) {
                Ok(req) => match handler(req) {
                    Ok(value) => value,
                    Err(e) => match e.downcast_ref::<PersonaError>() {
                        Some(pe) => error_value(&pe.code.to_string(), pe.message.clone()),
                        None => error_value("IO_ERROR", e.to_string()),
                    },
                },
                Err(e) => error_value("INVALID_REQUEST", format!("Invalid JSON request: {e}")),
            }
        };

        write_line(&mut out, &response)?;
    }

    Ok(())
}

fn write_line(out: &mut impl Write, value: &serde_json::Value) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

fn error_value(code: &str, message: String) -> serde_json::Value {
    serde_json::json!({ "error": { "code": code, "message": message } })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::models::request::Command;

    fn run(input: &str) -> Vec<serde_json::Value> {
        let mut out = Vec::new();
        run_session_on(input.as_bytes(), &mut out, |req| match req.command {
            Command::Doctor => Ok(serde_json::json!({ "ok": true })),
            _ => Err(PersonaError::new(ErrorCode::FileNotFound, "File not found: x").into()),
        })
        .unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn one_response_per_request_blank_lines_skipped() {
        let lines = run("{\"command\":\"doctor\"}\n\n   \n{\"command\":\"doctor\"}\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["ok"], true);
    }

    #[test]
    fn invalid_json_is_invalid_request() {
        let lines = run("not json\n{\"command\":\"nope\"}\n");
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l["error"]["code"] == "INVALID_REQUEST"));
    }

    #[test]
    fn non_utf8_line_does_not_end_session() {
        let mut input = b"\xff\xfe\n".to_vec();
        input.extend_from_slice(b"{\"command\":\"doctor\"}\n");
        let mut out = Vec::new();
        run_session_on(input.as_slice(), &mut out, |_| Ok(serde_json::json!({ "ok": true })))
            .unwrap();

        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["error"]["code"], "INVALID_REQUEST");
        assert_eq!(lines[1]["ok"], true);
    }

    #[test]
    fn handler_errors_keep_their_code() {
        let lines = run("{\"command\":\"profile\",\"path\":\"x\"}\n");
        assert_eq!(lines[0]["error"]["code"], "FILE_NOT_FOUND");
    }
}
