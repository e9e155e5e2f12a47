//! Apple Reminders → Asana CSV Converter Library
//!
//! This library converts Apple Reminders JSON exports into CSV files that
//! Asana's importer understands. Both exporter formats are supported:
//! `apple-reminders-exporter` (capitalized keys, one reminder per file) and the
//! "Backup Shortcut for Reminders" (`{"reminders": [...]}` bulk files with
//! tags, flags and subtasks).
//!
//! # Architecture
//!
//! A conversion is a single in-memory pass:
//! `parse → normalize → filter completed → dedupe → map fields → serialize`
//!
//! - **Source Layer**: `source` module - Exporter record shapes and normalization
//! - **Domain Layer**: `reminders` module - Normalized reminders and export detection
//! - **Target Layer**: `asana` module - Rows, priority vocabulary and CSV writer
//! - **Persistence Layer**: `storage` module - JSON input and CSV output files
//!
//! # Example
//!
//! ```no_run
//! use reminders_asana::{ConvertOptions, Converter};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let converter = Converter::new(ConvertOptions::default());
//!     let report = converter.convert_file("reminders_export.json", "asana_import.csv")?;
//!     println!("{}", report);
//!     Ok(())
//! }
//! ```

pub mod asana;
pub mod config;
pub mod dedupe;
mod error;
pub mod formatting;
pub mod logging;
pub mod reminders;
mod report;
pub mod source;
pub mod storage;
pub mod tags;

use anyhow::Result;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

// Re-export commonly used types
pub use asana::{AsanaRow, Language, MappingOptions};
pub use config::ConvertOptions;
pub use error::ConvertError;
pub use reminders::{ExportFormat, Reminder, SourceFormat};
pub use report::ConversionReport;
pub use storage::{CsvFile, ExportFile};

/// Rows produced from one export, with the run summary
#[derive(Debug, Clone)]
pub struct Conversion {
    pub rows: Vec<AsanaRow>,
    pub report: ConversionReport,
}

/// Runs the conversion pipeline with a fixed set of options
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter
    ///
    /// # Arguments
    /// * `options` - Assignee, completed-task handling, language and dry-run mode
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a parsed export document into Asana rows
    ///
    /// # Arguments
    /// * `json` - The whole export document (bulk or single reminder)
    ///
    /// # Returns
    /// Rows in import order and a report of what was filtered
    ///
    /// # Errors
    /// `ConvertError::UnknownFormat` when the document is neither a bulk export
    /// nor a reminder; `ConvertError::InvalidRecord` when a single reminder
    /// cannot be read
    pub fn convert_value(&self, json: &Value) -> Result<Conversion> {
        let document = reminders::parse_export(json)?;
        info!(
            format = %document.format,
            reminders = document.reminders.len(),
            "Detected export"
        );

        let mut report = ConversionReport::new(document.format);
        report.records = document.reminders.len();
        report.skipped_invalid = document.skipped_invalid;

        let open = self.filter_completed(document.reminders, &mut report);

        let (unique, removed) = dedupe::deduplicate_reminders(open);
        report.duplicates_removed = removed;

        let rows = asana::map_reminders(&unique, &self.options.mapping());
        report.subtasks = rows.iter().filter(|row| row.is_subtask()).count();
        report.tasks = rows.len() - report.subtasks;

        Ok(Conversion { rows, report })
    }

    /// Convert an export file and write the Asana CSV
    ///
    /// No file is written in dry-run mode or when no rows remain (for example
    /// when every reminder is completed); both still count as success.
    ///
    /// # Arguments
    /// * `input` - Path to the JSON export
    /// * `output` - Path of the CSV file to create
    pub fn convert_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<ConversionReport> {
        let export = ExportFile::new(input);
        info!(file = %export.path().display(), "Processing");
        let json = export.load()?;

        let Conversion { rows, mut report } = self.convert_value(&json)?;

        if rows.is_empty() {
            info!("No tasks to process");
            return Ok(report);
        }

        let csv = CsvFile::new(output);
        report.output = Some(csv.path().to_path_buf());
        if self.options.dry_run {
            report.dry_run = true;
            info!(rows = rows.len(), file = %csv.path().display(), "Dry run, not writing");
            return Ok(report);
        }

        csv.save(&rows, self.options.language)?;
        info!(rows = rows.len(), file = %csv.path().display(), "Wrote Asana CSV");
        Ok(report)
    }

    fn filter_completed(
        &self,
        reminders: Vec<Reminder>,
        report: &mut ConversionReport,
    ) -> Vec<Reminder> {
        let total = reminders.len();
        let mut kept = Vec::with_capacity(total);

        for (i, reminder) in reminders.into_iter().enumerate() {
            if reminder.completed && !self.options.include_completed {
                debug!("Skipping completed task [{}/{}]: {}", i + 1, total, reminder.log_title());
                report.skipped_completed += 1;
                continue;
            }
            debug!(source = %reminder.source, "Accepted [{}/{}]: {}", i + 1, total, reminder.log_title());
            kept.push(reminder);
        }

        kept
    }
}
