//! Formatting helper functions for Asana CSV fields
//!
//! This module shapes individual reminder fields into the strings Asana's
//! CSV importer expects.

use crate::reminders::Reminder;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::warn;

/// Date format Asana's importer reads without ambiguity
pub const ASANA_DATE_FORMAT: &str = "%m/%d/%Y";

const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M%:z",
];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an exporter date into a calendar date
///
/// Accepts RFC 3339 timestamps (`Z` or numeric offset), offsets without a
/// colon, timestamps without seconds, naive date-times and plain `YYYY-MM-DD`
/// dates. A trailing `Z` is read as `+00:00`. For timestamps with
/// an offset, the calendar date is taken in that offset.
///
/// # Arguments
/// * `raw` - Date string as exported
///
/// # Returns
/// The calendar date, or None if the string is not a recognized ISO 8601 form
pub fn parse_apple_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    let zoned = match s.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{}+00:00", rest),
        None => s.to_string(),
    };
    if let Some(dt) = OFFSET_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&zoned, fmt).ok())
    {
        return Some(dt.date_naive());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

/// Convert an exporter date to Asana's `MM/DD/YYYY`
///
/// Empty input yields an empty string. Unparsable input also yields an empty
/// string so the row is still imported, just without a due date.
pub fn format_date(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    match parse_apple_date(raw) {
        Some(date) => date.format(ASANA_DATE_FORMAT).to_string(),
        None => {
            warn!(date = raw, "Could not convert date, leaving it empty");
            String::new()
        }
    }
}

/// Format a Reminders list name as an Asana section
///
/// Asana appends a colon to section names on import, so one trailing colon
/// is removed. Names without a trailing colon are returned unchanged.
pub fn format_section(list_name: &str) -> String {
    match list_name.strip_suffix(':') {
        Some(stripped) => stripped.trim().to_string(),
        None => list_name.to_string(),
    }
}

/// Describe reminder metadata that has no Asana column
///
/// Legacy records carry none of these fields and always yield no lines.
///
/// # Returns
/// Lines in fixed order: flagged, has reminder, location, URL
pub fn metadata_lines(reminder: &Reminder) -> Vec<String> {
    if reminder.is_legacy() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    if reminder.flagged {
        lines.push("⭐ Flagged".to_string());
    }
    if reminder.has_reminder {
        lines.push("🔔 Has Reminder".to_string());
    }
    if let Some(ref location) = reminder.location {
        lines.push(format!("📍 Location: {}", location));
    }
    if let Some(ref url) = reminder.url {
        lines.push(format!("🔗 URL: {}", url));
    }
    lines
}

/// Append metadata lines to notes, separated by a blank line
pub fn compose_notes(notes: &str, metadata: &[String]) -> String {
    if metadata.is_empty() {
        return notes.to_string();
    }

    let block = metadata.join("\n");
    if notes.is_empty() {
        block
    } else {
        format!("{}\n\n{}", notes, block)
    }
}

/// Derive a display name from an email address
///
/// `john.doe@company.com` becomes `John Doe`, `admin@company.com` becomes `Admin`.
pub fn assignee_display_name(email: &str) -> String {
    let local_part = email.split('@').next().unwrap_or_default();
    local_part
        .split('.')
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
