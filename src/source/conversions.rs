//! Conversion functions from raw exporter records to `Reminder`

use super::normalize::{normalize_optional, normalize_string_line_endings};
use super::raw_types::{BackupReminder, LegacyReminder, RawReminder};
use crate::reminders::{Reminder, SourceFormat};

/// Create a Reminder from a legacy (`apple-reminders-exporter`) record
pub fn reminder_from_legacy(raw: LegacyReminder) -> Reminder {
    Reminder {
        title: raw.title,
        notes: normalize_string_line_endings(&raw.notes),
        list: raw.list,
        due_date: raw.due_date.trim().to_string(),
        priority: raw.priority.trim().to_string(),
        completed: raw.is_completed,
        source: SourceFormat::Legacy,
        ..Reminder::default()
    }
}

/// Create a Reminder from a Backup Shortcut record, subtasks included
pub fn reminder_from_backup(raw: BackupReminder) -> Reminder {
    Reminder {
        title: raw.title,
        notes: normalize_string_line_endings(&raw.notes),
        list: raw.list,
        due_date: raw.due_date.trim().to_string(),
        priority: raw.prio.trim().to_string(),
        completed: raw.done,
        tags: raw.tags,
        flagged: raw.flagged,
        has_reminder: raw.has_reminder,
        location: normalize_optional(raw.reminder_location),
        url: normalize_optional(raw.url),
        subtasks: raw.subtasks.into_iter().map(reminder_from_backup).collect(),
        source: SourceFormat::Backup,
    }
}

impl From<RawReminder> for Reminder {
    fn from(raw: RawReminder) -> Self {
        match raw {
            RawReminder::Legacy(r) => reminder_from_legacy(r),
            RawReminder::Backup(r) => reminder_from_backup(r),
        }
    }
}

/// Read one JSON object as a normalized Reminder
///
/// # Errors
/// Returns a serde error when the value is not an object or a field has an
/// unusable type (e.g. `subtasks` holding non-objects)
pub fn reminder_from_value(value: &serde_json::Value) -> Result<Reminder, crate::ConvertError> {
    if !value.is_object() {
        return Err(crate::ConvertError::NotAnObject(json_type_name(value)));
    }
    Ok(RawReminder::from_value(value)?.into())
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
