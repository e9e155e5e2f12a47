use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language of the Asana workspace the CSV is imported into
///
/// Asana localizes the priority custom field name and its option values, so
/// both the header and the priority cells follow this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    /// CSV header row for this language, in column order
    pub fn headers(&self) -> [&'static str; 8] {
        [
            "Name",
            "Assignee Email",
            "Due Date",
            "Tags",
            "Notes",
            "Section/Column",
            "Parent task",
            self.priority_header(),
        ]
    }

    /// Name of the priority column
    pub fn priority_header(&self) -> &'static str {
        match self {
            Language::En => "Priority",
            Language::De => "Priorität",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            _ => Err(format!(
                "Invalid language '{}'. Valid options are: en, de",
                s
            )),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::De => write!(f, "de"),
        }
    }
}
