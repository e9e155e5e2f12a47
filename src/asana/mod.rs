//! Asana CSV import model
//!
//! - `language`: Target workspace language (headers and priority labels)
//! - `priority`: Apple → Asana priority vocabulary mapping
//! - `row`: One CSV row
//! - `mapper`: Reminder → rows, including subtask rows
//! - `writer`: CSV serialization

mod language;
mod mapper;
mod priority;
mod row;
mod writer;

pub use language::Language;
pub use mapper::{MappingOptions, UNTITLED_SUBTASK, UNTITLED_TASK, display_name, map_reminder, map_reminders};
pub use priority::{Priority, map_priority};
pub use row::AsanaRow;
pub use writer::{UTF8_BOM, render_csv, write_rows};
