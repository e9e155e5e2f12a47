//! String normalization applied while reading exporter records

/// Normalize line endings in a string to LF (\n)
///
/// Reminders synced from different devices mix CRLF and bare CR line breaks
/// in their notes. Normalizing here keeps the CSV notes column consistent.
///
/// # Arguments
///
/// * `s` - String to normalize
///
/// # Returns
///
/// String with normalized line endings
pub fn normalize_string_line_endings(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}

/// Turn an empty or whitespace-only field into `None`
pub fn normalize_optional(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == s.len() {
        Some(s)
    } else {
        Some(trimmed.to_string())
    }
}
