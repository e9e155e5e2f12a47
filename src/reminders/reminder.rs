use std::fmt;

/// Which Apple Reminders exporter produced a record
///
/// The two exporters disagree on key casing and on which fields exist at all:
/// - `Legacy`: `apple-reminders-exporter`, capitalized keys (`Title`, `Due Date`, ...)
/// - `Backup`: "Backup Shortcut for Reminders", lowercase keys with German flag values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SourceFormat {
    Legacy,
    #[default]
    Backup,
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Legacy => write!(f, "legacy"),
            SourceFormat::Backup => write!(f, "backup"),
        }
    }
}

/// A reminder normalized from either export shape
///
/// Every string field is always present; fields the exporter omitted (or wrote
/// as `null`) are empty. Legacy records never carry native tags, metadata flags
/// or subtasks, so those stay at their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reminder {
    /// Raw title, hashtags included
    pub title: String,
    /// Free-form notes with line endings normalized to `\n`
    pub notes: String,
    /// Name of the Reminders list the item lives in
    pub list: String,
    /// Due date exactly as exported (ISO 8601 when present)
    pub due_date: String,
    /// Priority word in the exporter's vocabulary (e.g. "Hoch", "High", "Ohne")
    pub priority: String,
    /// Whether the reminder is checked off
    pub completed: bool,
    /// Native tags from the exporter's `tags` array
    pub tags: Vec<String>,
    pub flagged: bool,
    pub has_reminder: bool,
    /// Location-based alert, if any
    pub location: Option<String>,
    pub url: Option<String>,
    /// Nested subtasks (backup format only)
    pub subtasks: Vec<Reminder>,
    pub source: SourceFormat,
}

/// Fields that identify a reminder for duplicate detection
///
/// Two reminders are duplicates when title, notes, list and due date all match
/// exactly, regardless of which exporter produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupeKey {
    pub title: String,
    pub notes: String,
    pub list: String,
    pub due_date: String,
}

impl Reminder {
    /// Create a backup-format reminder with only a title set
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Build the duplicate-detection key for this reminder
    pub fn dedupe_key(&self) -> DedupeKey {
        DedupeKey {
            title: self.title.clone(),
            notes: self.notes.clone(),
            list: self.list.clone(),
            due_date: self.due_date.clone(),
        }
    }

    /// Check if this reminder came from the legacy exporter
    pub fn is_legacy(&self) -> bool {
        self.source == SourceFormat::Legacy
    }

    /// Title used in log output when the export left it blank
    pub fn log_title(&self) -> &str {
        if self.title.is_empty() {
            "Unknown"
        } else {
            &self.title
        }
    }
}
