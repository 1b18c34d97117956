//! Ingest - parse boundary for workflow event dumps
//!
//! The workflow service streams events over the wire; captured dumps
//! come in two shapes, a JSON array or newline-delimited JSON. Both
//! decode into the same [`Message`] model.

use std::io::Read;

use thiserror::Error;

use crate::message::Message;

/// Errors at the event parse boundary.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("failed to read event dump: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed event on line {line}: {source}")]
    MalformedLine {
        line: usize,
        source: serde_json::Error,
    },

    #[error("malformed event array: {0}")]
    MalformedArray(#[from] serde_json::Error),
}

/// Parse an event dump from text: a JSON array if the first
/// non-whitespace byte is `[`, otherwise one JSON object per line.
/// Blank lines are skipped.
pub fn parse_events(input: &str) -> Result<Vec<Message>, IngestError> {
    if input.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(input)?);
    }

    let mut messages = Vec::new();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let message =
            serde_json::from_str(line).map_err(|source| IngestError::MalformedLine {
                line: index + 1,
                source,
            })?;
        messages.push(message);
    }
    Ok(messages)
}

/// Read and parse an event dump from any reader.
pub fn read_events(reader: &mut impl Read) -> Result<Vec<Message>, IngestError> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    parse_events(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageKind;

    #[test]
    fn test_parse_json_array() {
        let input = r#"[
            {"timestamp": "2026-03-01T09:30:00Z", "type": "user"},
            {"timestamp": "2026-03-01T09:30:01Z", "type": "assistant"}
        ]"#;
        let messages = parse_events(input).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].kind, MessageKind::User);
    }

    #[test]
    fn test_parse_ndjson_skips_blank_lines() {
        let input = concat!(
            r#"{"timestamp": "2026-03-01T09:30:00Z", "type": "user"}"#,
            "\n\n",
            r#"{"timestamp": "2026-03-01T09:30:01Z", "type": "task", "status": "running"}"#,
            "\n",
        );
        let messages = parse_events(input).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].kind, MessageKind::Task);
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let input = concat!(
            r#"{"timestamp": "2026-03-01T09:30:00Z", "type": "user"}"#,
            "\n",
            "not json\n",
        );
        let err = parse_events(input).unwrap_err();
        match err {
            IngestError::MalformedLine { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_input_is_empty_timeline() {
        assert!(parse_events("").unwrap().is_empty());
        assert!(parse_events("   \n  ").unwrap().is_empty());
    }
}
