use thiserror::Error;

/// Conversion failures callers may want to match on
///
/// I/O and CSV failures travel as `anyhow::Error` with context attached;
/// these variants cover problems with the export's content.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Unknown JSON format: expected a {{\"reminders\": [...]}} export or a single reminder with a title")]
    UnknownFormat,

    #[error("Expected a reminder object, found {0}")]
    NotAnObject(&'static str),

    #[error("Unreadable reminder: {0}")]
    InvalidRecord(#[from] serde_json::Error),
}
