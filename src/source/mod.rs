//! Reading records from the Apple Reminders exporters
//!
//! Two exporters are supported and may be mixed within one bulk file:
//!
//! - **Legacy** (`apple-reminders-exporter`): capitalized keys (`Title`, `Notes`,
//!   `List`, `Due Date`, `Priority`, `Is Completed`)
//! - **Backup** ("Backup Shortcut for Reminders"): lowercase keys (`title`, `notes`,
//!   `list`, `due_date`, `prio`, `done`, `tags`, `flagged`, `has_reminder`,
//!   `reminder_location`, `url`, `subtasks`), flags as `"Ja"` / `"Nein"`
//!
//! Both are converted into the crate's `Reminder`.

mod conversions;
mod normalize;
mod raw_types;

pub use conversions::{reminder_from_backup, reminder_from_legacy, reminder_from_value};
pub use normalize::{normalize_optional, normalize_string_line_endings};
pub use raw_types::{BackupReminder, LegacyReminder, RawReminder, parse_flag};
