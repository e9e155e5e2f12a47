//! Export document detection and parsing
//!
//! An export file is either a bulk document (`{"reminders": [...]}`) or a
//! single reminder object in one of the two exporter shapes.

use super::reminder::Reminder;
use crate::error::ConvertError;
use crate::source;
use serde_json::Value;
use std::fmt;
use tracing::warn;

/// Shape of an export document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// `{"reminders": [...]}` produced by the Backup Shortcut
    Bulk,
    /// One reminder object (either exporter)
    Single,
    /// Neither of the above
    Unknown,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Bulk => write!(f, "bulk"),
            ExportFormat::Single => write!(f, "single"),
            ExportFormat::Unknown => write!(f, "unknown"),
        }
    }
}

/// Reminders read out of an export document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub format: ExportFormat,
    pub reminders: Vec<Reminder>,
    /// Bulk entries that could not be read as a reminder
    pub skipped_invalid: usize,
}

/// Detect the shape of a parsed JSON document
///
/// # Arguments
/// * `json` - The whole export document
///
/// # Returns
/// `Bulk` when a `reminders` array is present, `Single` when the object has a
/// `Title` or `title` key, `Unknown` otherwise
pub fn detect_format(json: &Value) -> ExportFormat {
    let Some(object) = json.as_object() else {
        return ExportFormat::Unknown;
    };

    if object.get("reminders").is_some_and(Value::is_array) {
        ExportFormat::Bulk
    } else if object.contains_key("Title") || object.contains_key("title") {
        ExportFormat::Single
    } else {
        ExportFormat::Unknown
    }
}

/// Parse an export document into normalized reminders
///
/// Bulk entries that are not objects, or whose fields cannot be read, are
/// skipped with a warning and counted in `skipped_invalid`. A single-reminder
/// document that cannot be read is an error.
///
/// # Errors
/// `ConvertError::UnknownFormat` when the document shape is not recognized
pub fn parse_export(json: &Value) -> Result<ExportDocument, ConvertError> {
    match detect_format(json) {
        ExportFormat::Bulk => {
            let entries = json["reminders"].as_array().map(Vec::as_slice).unwrap_or(&[]);
            let mut reminders = Vec::with_capacity(entries.len());
            let mut skipped_invalid = 0;

            for (index, entry) in entries.iter().enumerate() {
                match source::reminder_from_value(entry) {
                    Ok(reminder) => reminders.push(reminder),
                    Err(e) => {
                        warn!(index = index + 1, error = %e, "Skipping unreadable reminder entry");
                        skipped_invalid += 1;
                    }
                }
            }

            Ok(ExportDocument {
                format: ExportFormat::Bulk,
                reminders,
                skipped_invalid,
            })
        }
        ExportFormat::Single => {
            let reminder = source::reminder_from_value(json)?;
            Ok(ExportDocument {
                format: ExportFormat::Single,
                reminders: vec![reminder],
                skipped_invalid: 0,
            })
        }
        ExportFormat::Unknown => Err(ConvertError::UnknownFormat),
    }
}
