//! Unit tests for duplicate reminder removal
mod common;

use common::{keyed_legacy_reminder, keyed_reminder};
use reminders_asana::dedupe::deduplicate_reminders;

#[test]
fn test_deduplicate_reminders_no_duplicates() {
    let reminders = vec![
        keyed_reminder("Task 1", "Description 1", "Work", "2025-03-15T09:00:00Z"),
        keyed_reminder("Task 2", "Description 2", "Personal", "2025-03-16T09:00:00Z"),
    ];

    let (result, removed) = deduplicate_reminders(reminders.clone());
    assert_eq!(removed, 0);
    assert_eq!(result, reminders);
}

#[test]
fn test_deduplicate_reminders_exact_duplicates() {
    let duplicate = keyed_reminder("Duplicate Task", "Same description", "Work", "2025-03-15T09:00:00Z");

    let (result, removed) = deduplicate_reminders(vec![duplicate.clone(), duplicate.clone()]);
    assert_eq!(removed, 1);
    assert_eq!(result, vec![duplicate]);
}

#[test]
fn test_deduplicate_reminders_old_format() {
    let duplicate = keyed_legacy_reminder("Old Format Task", "Old description", "Work", "2025-03-15T09:00:00Z");

    let (result, removed) = deduplicate_reminders(vec![duplicate.clone(), duplicate.clone()]);
    assert_eq!(removed, 1);
    assert_eq!(result, vec![duplicate]);
}

#[test]
fn test_deduplicate_reminders_mixed_format() {
    let old_format = keyed_legacy_reminder("Same Task", "Description", "Work", "2025-03-15T09:00:00Z");
    let new_format = keyed_reminder("Same Task", "Description", "Work", "2025-03-15T09:00:00Z");

    let (result, removed) = deduplicate_reminders(vec![old_format.clone(), new_format]);
    assert_eq!(removed, 1);
    assert_eq!(result, vec![old_format]);
}

#[test]
fn test_deduplicate_reminders_different_fields() {
    let base = keyed_reminder("Task", "Description", "Work", "2025-03-15T09:00:00Z");
    let reminders = vec![
        base.clone(),
        keyed_reminder("Different Task", "Description", "Work", "2025-03-15T09:00:00Z"),
        keyed_reminder("Task", "Description", "Work", "2025-03-16T09:00:00Z"),
        keyed_reminder("Task", "Description", "Personal", "2025-03-15T09:00:00Z"),
        keyed_reminder("Task", "Different description", "Work", "2025-03-15T09:00:00Z"),
    ];

    let (result, removed) = deduplicate_reminders(reminders);
    assert_eq!(removed, 0);
    assert_eq!(result.len(), 5);
}

#[test]
fn test_deduplicate_reminders_ignores_non_key_fields() {
    let first = keyed_reminder("Task", "", "Work", "");
    let mut second = first.clone();
    second.priority = "Hoch".to_string();
    second.tags = vec!["extra".to_string()];

    let (result, removed) = deduplicate_reminders(vec![first.clone(), second]);
    assert_eq!(removed, 1);
    assert_eq!(result, vec![first]);
}

#[test]
fn test_deduplicate_reminders_empty_list() {
    let (result, removed) = deduplicate_reminders(Vec::new());
    assert!(result.is_empty());
    assert_eq!(removed, 0);
}

#[test]
fn test_deduplicate_reminders_preserves_order() {
    let first = keyed_reminder("First", "", "Work", "");
    let second = keyed_reminder("Second", "", "Work", "");

    let (result, removed) = deduplicate_reminders(vec![first.clone(), second.clone(), first.clone()]);
    assert_eq!(removed, 1);
    assert_eq!(result, vec![first, second]);
}
