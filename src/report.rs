//! Conversion summary

use crate::reminders::ExportFormat;
use std::fmt;
use std::path::PathBuf;

/// What happened during one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Shape of the input document
    pub format: ExportFormat,
    /// Reminders read from the document (before filtering)
    pub records: usize,
    /// Bulk entries that could not be read
    pub skipped_invalid: usize,
    /// Reminders left out because they are completed
    pub skipped_completed: usize,
    /// Reminders dropped as duplicates
    pub duplicates_removed: usize,
    /// Top-level task rows
    pub tasks: usize,
    /// Subtask rows
    pub subtasks: usize,
    /// CSV file written, if any
    pub output: Option<PathBuf>,
    pub dry_run: bool,
}

impl ConversionReport {
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            records: 0,
            skipped_invalid: 0,
            skipped_completed: 0,
            duplicates_removed: 0,
            tasks: 0,
            subtasks: 0,
            output: None,
            dry_run: false,
        }
    }

    /// Total CSV data rows (tasks and subtasks)
    pub fn rows(&self) -> usize {
        self.tasks + self.subtasks
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Read {} reminder(s) from {} export",
            self.records, self.format
        )?;
        if self.skipped_invalid > 0 {
            writeln!(f, "  Unreadable entries skipped: {}", self.skipped_invalid)?;
        }
        if self.skipped_completed > 0 {
            writeln!(f, "  Completed tasks skipped: {}", self.skipped_completed)?;
        }
        if self.duplicates_removed > 0 {
            writeln!(f, "  Duplicates removed: {}", self.duplicates_removed)?;
        }
        writeln!(
            f,
            "  Rows: {} ({} task(s), {} subtask(s))",
            self.rows(),
            self.tasks,
            self.subtasks
        )?;

        match (&self.output, self.dry_run) {
            (Some(path), true) => write!(f, "[DRY RUN] Would write {} rows to {}", self.rows(), path.display()),
            (Some(path), false) => write!(f, "CSV file created: {}", path.display()),
            (None, _) => write!(f, "No tasks to convert, no CSV file written"),
        }
    }
}
