//! Tests for Asana CSV serialization
mod common;

use reminders_asana::asana::{UTF8_BOM, render_csv, write_rows};
use reminders_asana::{AsanaRow, CsvFile, Language};
use tempfile::TempDir;

fn sample_row() -> AsanaRow {
    AsanaRow {
        name: "Test Task".to_string(),
        assignee_email: "john@example.com".to_string(),
        due_date: "03/15/2025".to_string(),
        tags: "test, example".to_string(),
        notes: "Line \"one\"\nLine two".to_string(),
        section: "Work".to_string(),
        parent_task: String::new(),
        priority: "High".to_string(),
    }
}

#[test]
fn test_render_csv_quotes_every_field() {
    let csv = render_csv(&[sample_row()], Language::En).unwrap();

    assert!(csv.starts_with('\u{feff}'));
    let body = csv.trim_start_matches('\u{feff}');
    assert!(body.starts_with(
        "\"Name\",\"Assignee Email\",\"Due Date\",\"Tags\",\"Notes\",\"Section/Column\",\"Parent task\",\"Priority\"\r\n"
    ));
    assert!(body.contains(
        "\"Test Task\",\"john@example.com\",\"03/15/2025\",\"test, example\",\"Line \"\"one\"\"\nLine two\",\"Work\",\"\",\"High\"\r\n"
    ));
}

#[test]
fn test_render_csv_german_header() {
    let csv = render_csv(&[], Language::De).unwrap();
    assert!(csv.contains("\"Priorität\"\r\n"));
}

#[test]
fn test_write_rows_starts_with_bom() {
    let mut buffer = Vec::new();
    write_rows(&mut buffer, &[sample_row()], Language::En).unwrap();
    assert!(buffer.starts_with(UTF8_BOM));
}

#[test]
fn test_csv_file_round_trip_through_reader() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    CsvFile::new(&path).save(&[sample_row()], Language::En).unwrap();

    let (headers, rows) = common::read_csv(&path);
    assert_eq!(headers[0], "Name");
    assert_eq!(headers[7], "Priority");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "Test Task");
    assert_eq!(rows[0][4], "Line \"one\"\nLine two");
    assert_eq!(rows[0][7], "High");
}

#[test]
fn test_csv_file_save_replaces_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    std::fs::write(&path, "stale content").unwrap();

    CsvFile::new(&path).save(&[sample_row()], Language::De).unwrap();

    let (headers, rows) = common::read_csv(&path);
    assert_eq!(headers[7], "Priorität");
    assert_eq!(rows.len(), 1);
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "no temporary files left behind");
}

#[test]
fn test_csv_file_save_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.csv");

    let err = CsvFile::new(&path).save(&[sample_row()], Language::En).unwrap_err();
    assert!(err.to_string().contains("out.csv"));
    assert!(!path.exists());
}
