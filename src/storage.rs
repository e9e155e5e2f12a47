use crate::asana::{AsanaRow, Language, write_rows};
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A Reminders JSON export on disk
pub struct ExportFile {
    file_path: PathBuf,
}

impl ExportFile {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn load(&self) -> Result<Value> {
        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let json = serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", self.file_path.display()))?;
        Ok(json)
    }
}

/// An Asana CSV import file on disk
pub struct CsvFile {
    file_path: PathBuf,
}

impl CsvFile {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Write the CSV next to the target, then move it into place
    ///
    /// A failed write leaves any existing file at the target untouched.
    pub fn save(&self, rows: &[AsanaRow], language: Language) -> Result<()> {
        let dir = match self.file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create {}", self.file_path.display()))?;
        write_rows(BufWriter::new(temp.as_file_mut()), rows, language)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        temp.persist(&self.file_path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to save {}", self.file_path.display()))?;
        Ok(())
    }
}
