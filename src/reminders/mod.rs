//! Apple Reminders domain model
//!
//! This module contains the normalized reminder structure and export parsing.
//! - `reminder`: Normalized reminder shared by both exporter formats
//! - `export`: Document shape detection (bulk vs. single) and parsing

mod export;
mod reminder;

// Re-export all public types
pub use export::{ExportDocument, ExportFormat, detect_format, parse_export};
pub use reminder::{DedupeKey, Reminder, SourceFormat};
