//! End-to-end conversion tests (JSON file in, CSV file out)
mod common;

use common::{output_path, read_csv, write_json_file, write_text_file};
use reminders_asana::{ConvertError, ConvertOptions, Converter, ExportFormat, Language};
use serde_json::json;

fn converter(include_completed: bool) -> Converter {
    Converter::new(ConvertOptions {
        include_completed,
        ..ConvertOptions::default()
    })
}

fn bulk_export() -> serde_json::Value {
    json!({
        "reminders": [
            {
                "title": "Task 1 #tag1",
                "notes": "Description 1",
                "list": "Work",
                "prio": "Hoch",
                "done": "Nein",
                "tags": ["native1"],
                "flagged": "Ja",
                "has_reminder": "Nein"
            },
            {
                "title": "Task 2",
                "notes": "Description 2",
                "list": "Personal",
                "prio": "Mittel",
                "done": "Ja",
                "tags": []
            }
        ]
    })
}

#[test]
fn test_bulk_skips_completed_by_default() {
    let conversion = converter(false).convert_value(&bulk_export()).unwrap();

    assert_eq!(conversion.rows.len(), 1);
    let row = &conversion.rows[0];
    assert_eq!(row.name, "Task 1");
    assert_eq!(row.tags, "tag1, native1");
    assert_eq!(row.priority, "High");
    assert!(row.notes.contains("⭐ Flagged"));
    assert!(!row.notes.contains("🔔 Has Reminder"));

    let report = conversion.report;
    assert_eq!(report.format, ExportFormat::Bulk);
    assert_eq!(report.records, 2);
    assert_eq!(report.skipped_completed, 1);
    assert_eq!(report.tasks, 1);
}

#[test]
fn test_untitled_parent_counts_its_subtasks() {
    let json = json!({"reminders": [{"notes": "n", "subtasks": [{"title": "child"}]}]});
    let conversion = converter(false).convert_value(&json).unwrap();

    assert_eq!(conversion.rows[1].parent_task, conversion.rows[0].name);
    assert_eq!(conversion.report.tasks, 1);
    assert_eq!(conversion.report.subtasks, 1);
}

#[test]
fn test_bulk_include_completed() {
    let conversion = converter(true).convert_value(&bulk_export()).unwrap();
    assert_eq!(conversion.rows.len(), 2);
    assert_eq!(conversion.report.skipped_completed, 0);
}

#[test]
fn test_bulk_old_format_entry() {
    let json = json!({
        "reminders": [{
            "Title": "Old Format Task",
            "Notes": "Old description",
            "List": "Work",
            "Priority": "High",
            "Is Completed": false
        }]
    });

    let conversion = converter(false).convert_value(&json).unwrap();
    assert_eq!(conversion.rows.len(), 1);
    assert_eq!(conversion.rows[0].name, "Old Format Task");
    assert_eq!(conversion.rows[0].priority, "High");
}

#[test]
fn test_duplicates_removed_across_formats() {
    let json = json!({
        "reminders": [
            {"Title": "Same Task", "Notes": "Description", "List": "Work", "Due Date": "2025-03-15T09:00:00Z"},
            {"title": "Same Task", "notes": "Description", "list": "Work", "due_date": "2025-03-15T09:00:00Z"},
            {"title": "Other Task"}
        ]
    });

    let conversion = converter(false).convert_value(&json).unwrap();
    assert_eq!(conversion.report.duplicates_removed, 1);
    let names: Vec<&str> = conversion.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Same Task", "Other Task"]);
}

#[test]
fn test_completed_copy_does_not_hide_open_duplicate() {
    let json = json!({
        "reminders": [
            {"title": "Water plants", "done": "Ja"},
            {"title": "Water plants", "done": "Nein"}
        ]
    });

    let conversion = converter(false).convert_value(&json).unwrap();
    assert_eq!(conversion.rows.len(), 1);
    assert_eq!(conversion.report.skipped_completed, 1);
    assert_eq!(conversion.report.duplicates_removed, 0);
}

#[test]
fn test_unknown_format_is_error() {
    let err = converter(false)
        .convert_value(&json!({"unknown": "data"}))
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConvertError>(),
        Some(ConvertError::UnknownFormat)
    ));
}

#[test]
fn test_convert_file_completed_single_task_skipped() {
    let input = write_json_file(&json!({"Title": "Completed task", "Is Completed": true}));
    let (_dir, output) = output_path();

    let report = converter(false).convert_file(input.path(), &output).unwrap();

    assert_eq!(report.format, ExportFormat::Single);
    assert_eq!(report.skipped_completed, 1);
    assert_eq!(report.rows(), 0);
    assert_eq!(report.output, None);
    assert!(!output.exists());
}

#[test]
fn test_convert_file_completed_single_task_included() {
    let input = write_json_file(&json!({
        "Title": "Completed task",
        "Notes": "This task is done",
        "List": "Personal",
        "Is Completed": true,
        "Priority": "Medium"
    }));
    let (_dir, output) = output_path();

    let report = converter(true).convert_file(input.path(), &output).unwrap();
    assert_eq!(report.output.as_deref(), Some(output.as_path()));

    let (headers, rows) = read_csv(&output);
    assert_eq!(headers[7], "Priority");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "Completed task");
    assert_eq!(rows[0][5], "Personal");
    assert_eq!(rows[0][7], "Medium");
}

#[test]
fn test_convert_file_german_with_subtasks() {
    let input = write_json_file(&json!({
        "reminders": [{
            "title": "Umzug planen #privat",
            "list": "Zuhause:",
            "prio": "Gering",
            "due_date": "2025-06-30T08:00:00Z",
            "subtasks": [{"title": "Kartons kaufen", "prio": "Hoch"}]
        }]
    }));
    let (_dir, output) = output_path();

    let converter = Converter::new(ConvertOptions {
        assignee: Some("max.mustermann@example.de".to_string()),
        language: Language::De,
        ..ConvertOptions::default()
    });
    let report = converter.convert_file(input.path(), &output).unwrap();
    assert_eq!(report.tasks, 1);
    assert_eq!(report.subtasks, 1);

    let (headers, rows) = read_csv(&output);
    assert_eq!(headers[7], "Priorität");
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0],
        vec![
            "Umzug planen",
            "max.mustermann@example.de",
            "06/30/2025",
            "privat",
            "",
            "Zuhause",
            "",
            "Niedrig"
        ]
    );
    assert_eq!(rows[1][0], "Kartons kaufen");
    assert_eq!(rows[1][5], "");
    assert_eq!(rows[1][6], "Umzug planen");
    assert_eq!(rows[1][7], "Hoch");
}

#[test]
fn test_convert_file_dry_run_writes_nothing() {
    let input = write_json_file(&bulk_export());
    let (_dir, output) = output_path();

    let converter = Converter::new(ConvertOptions {
        dry_run: true,
        ..ConvertOptions::default()
    });
    let report = converter.convert_file(input.path(), &output).unwrap();

    assert!(report.dry_run);
    assert_eq!(report.rows(), 1);
    assert!(!output.exists());
    assert!(report.to_string().contains("[DRY RUN] Would write 1 rows to"));
}

#[test]
fn test_convert_file_invalid_json() {
    let input = write_text_file("invalid json content");
    let (_dir, output) = output_path();

    let err = converter(false).convert_file(input.path(), &output).unwrap_err();
    assert!(err.to_string().starts_with("Invalid JSON in"));
    assert!(!output.exists());
}

#[test]
fn test_convert_file_missing_input() {
    let (dir, output) = output_path();
    let missing = dir.path().join("does-not-exist.json");

    let err = converter(false).convert_file(&missing, &output).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read"));
}
