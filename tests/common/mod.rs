//! Common test utilities for integration tests
#![allow(dead_code)]

use reminders_asana::{Reminder, SourceFormat};
use serde_json::Value;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

/// Write a JSON document to a temporary `.json` file
pub fn write_json_file(json: &Value) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "{}", json).unwrap();
    file
}

/// Write raw text to a temporary `.json` file
pub fn write_text_file(text: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

/// Create a temp directory and the path of a CSV file inside it
pub fn output_path() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("asana_import.csv");
    (dir, path)
}

/// Read a written CSV back, stripping the byte order mark
pub fn read_csv(path: &std::path::Path) -> (Vec<String>, Vec<Vec<String>>) {
    let bytes = std::fs::read(path).unwrap();
    let content = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&bytes);
    let mut reader = csv::Reader::from_reader(content);
    let headers = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}

/// Create a backup-format reminder with the four dedupe key fields
pub fn keyed_reminder(title: &str, notes: &str, list: &str, due_date: &str) -> Reminder {
    Reminder {
        title: title.to_string(),
        notes: notes.to_string(),
        list: list.to_string(),
        due_date: due_date.to_string(),
        ..Reminder::default()
    }
}

/// Same as `keyed_reminder` but from the legacy exporter
pub fn keyed_legacy_reminder(title: &str, notes: &str, list: &str, due_date: &str) -> Reminder {
    Reminder {
        source: SourceFormat::Legacy,
        ..keyed_reminder(title, notes, list, due_date)
    }
}
