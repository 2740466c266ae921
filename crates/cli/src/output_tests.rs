// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::fmt;

#[derive(Serialize)]
struct Row {
    sequence: u64,
    event_type: &'static str,
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.sequence, self.event_type)
    }
}

fn rows() -> Vec<Row> {
    vec![
        Row {
            sequence: 1,
            event_type: "DAG_SUBMITTED",
        },
        Row {
            sequence: 2,
            event_type: "DAG_FINISHED",
        },
    ]
}

fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn render_lines(items: &[Row], format: OutputFormat) -> String {
    render(|out| {
        for item in items {
            write_value_line(out, item, format)?;
        }
        Ok(())
    })
}

#[test]
fn text_lines_use_display() {
    let text = render_lines(&rows(), OutputFormat::Text);
    assert_eq!(text, "1 DAG_SUBMITTED\n2 DAG_FINISHED\n");
}

#[test]
fn json_lines_are_one_document_per_line() {
    let text = render_lines(&rows(), OutputFormat::Json);
    assert_eq!(
        text,
        "{\"sequence\":1,\"event_type\":\"DAG_SUBMITTED\"}\n{\"sequence\":2,\"event_type\":\"DAG_FINISHED\"}\n"
    );
}

#[test]
fn json_value_is_pretty_printed() {
    let row = Row {
        sequence: 7,
        event_type: "DAG_FINISHED",
    };
    let text = render(|out| write_value(out, &row, OutputFormat::Json));
    assert!(text.starts_with("{\n"));
    assert!(text.contains("\"sequence\": 7"));
}

#[test]
fn text_value_uses_display() {
    let row = Row {
        sequence: 3,
        event_type: "VERTEX_FINISHED",
    };
    let text = render(|out| write_value(out, &row, OutputFormat::Text));
    assert_eq!(text, "3 VERTEX_FINISHED\n");
}
