//! Raw record types for the two Apple Reminders exporters
//!
//! These structures mirror the JSON exactly as each exporter writes it.
//! They are only used while reading an export; the rest of the crate works
//! with the normalized `Reminder`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A reminder written by `apple-reminders-exporter`
///
/// Keys are capitalized and there are no tags, flags or subtasks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LegacyReminder {
    #[serde(rename = "Title", deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(rename = "Notes", deserialize_with = "lenient_string")]
    pub notes: String,
    #[serde(rename = "List", deserialize_with = "lenient_string")]
    pub list: String,
    #[serde(rename = "Due Date", deserialize_with = "lenient_string")]
    pub due_date: String,
    #[serde(rename = "Priority", deserialize_with = "lenient_string")]
    pub priority: String,
    #[serde(rename = "Is Completed", deserialize_with = "lenient_flag")]
    pub is_completed: bool,
}

/// A reminder written by the "Backup Shortcut for Reminders"
///
/// Keys are lowercase. Boolean fields are exported as German words
/// (`"Ja"` / `"Nein"`). Subtasks use the same shape recursively.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BackupReminder {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub notes: String,
    #[serde(deserialize_with = "lenient_string")]
    pub list: String,
    #[serde(deserialize_with = "lenient_string")]
    pub due_date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub prio: String,
    #[serde(deserialize_with = "lenient_flag")]
    pub done: bool,
    #[serde(deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient_flag")]
    pub flagged: bool,
    #[serde(deserialize_with = "lenient_flag")]
    pub has_reminder: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub reminder_location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtasks: Vec<BackupReminder>,
}

/// A raw record classified by exporter
#[derive(Debug, Clone)]
pub enum RawReminder {
    Legacy(LegacyReminder),
    Backup(BackupReminder),
}

impl RawReminder {
    /// Classify and deserialize a JSON object
    ///
    /// A record is legacy iff it carries a `Title` key; everything else is read
    /// as backup format, so an object with neither title key still yields a
    /// (blank) backup record.
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        if value.get("Title").is_some() {
            LegacyReminder::deserialize(value).map(RawReminder::Legacy)
        } else {
            BackupReminder::deserialize(value).map(RawReminder::Backup)
        }
    }
}

/// Interpret an exporter flag value
///
/// Accepts JSON booleans and the words `Ja`, `Yes` and `true` in any case.
/// Every other value, including `"Nein"`, is false.
pub fn parse_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => {
            let s = s.trim();
            ["ja", "yes", "true"]
                .iter()
                .any(|word| s.eq_ignore_ascii_case(word))
        }
        _ => false,
    }
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_flag(&value))
}

/// Read any scalar as a string; `null` becomes empty
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Read tags from an array of strings, or from one comma-separated string
fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Value::String(s) => s.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    };

    Ok(tags
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
