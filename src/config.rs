//! Conversion options and the optional TOML defaults file
//!
//! A defaults file saves repeating the same flags on every run:
//!
//! ```toml
//! [defaults]
//! assignee = "jane.doe@example.com"
//! language = "de"
//! include_completed = false
//! output = "asana_import.csv"
//! ```
//!
//! Command-line flags always win over file values.

use crate::asana::{Language, MappingOptions};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Output file used when neither the command line nor the config names one
pub const DEFAULT_OUTPUT: &str = "asana_import.csv";

/// Everything that controls one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Email written into every row's assignee column
    pub assignee: Option<String>,
    /// Keep reminders that are already checked off
    pub include_completed: bool,
    pub language: Language,
    /// Convert and report without writing the CSV
    pub dry_run: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            assignee: None,
            include_completed: false,
            language: Language::En,
            dry_run: false,
        }
    }
}

impl ConvertOptions {
    /// Options relevant to row mapping
    pub fn mapping(&self) -> MappingOptions {
        MappingOptions {
            assignee: self.assignee.clone(),
            language: self.language,
        }
    }
}

/// Contents of a TOML defaults file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub defaults: Defaults,
}

/// `[defaults]` table; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl ConfigFile {
    /// Load a defaults file
    ///
    /// # Errors
    /// Fails when the file cannot be read or is not valid TOML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse defaults from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Values given on the command line; `None` means "not given"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub assignee: Option<String>,
    pub language: Option<Language>,
    /// `--include-completed` / `--no-include-completed`
    pub include_completed: Option<bool>,
    pub dry_run: bool,
    pub output: Option<PathBuf>,
}

/// Merge command-line values over file defaults
///
/// # Returns
/// The effective options and output path
pub fn resolve(defaults: &Defaults, cli: CliOverrides) -> (ConvertOptions, PathBuf) {
    let options = ConvertOptions {
        assignee: cli
            .assignee
            .or_else(|| defaults.assignee.clone())
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty()),
        include_completed: cli
            .include_completed
            .or(defaults.include_completed)
            .unwrap_or(false),
        language: cli.language.or(defaults.language).unwrap_or_default(),
        dry_run: cli.dry_run,
    };
    let output = cli
        .output
        .or_else(|| defaults.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    (options, output)
}
