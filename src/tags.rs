//! Hashtag extraction and tag merging
//!
//! Apple Reminders users often tag items inline (`Website redesign #webdev`).
//! Asana expects tags in their own column, so hashtags are lifted out of the
//! title and merged with the exporter's native tags.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\w+)").unwrap());

/// A hashtag together with the whitespace in front of it
static HASHTAG_WITH_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*#\w+").unwrap());

/// Extract hashtags from a title
///
/// # Arguments
/// * `title` - Raw reminder title (e.g. "Website redesign #webdev #design")
///
/// # Returns
/// The title with every hashtag (and its leading whitespace) removed and
/// trimmed, plus the tags in order of appearance without the `#`
///
/// # Examples
/// ```
/// # use reminders_asana::tags::extract_tags_from_title;
/// let (title, tags) = extract_tags_from_title("Website update #webdev");
/// assert_eq!(title, "Website update");
/// assert_eq!(tags, vec!["webdev"]);
/// ```
pub fn extract_tags_from_title(title: &str) -> (String, Vec<String>) {
    let tags = HASHTAG
        .captures_iter(title)
        .map(|caps| caps[1].to_string())
        .collect();
    let clean_title = HASHTAG_WITH_SPACE.replace_all(title, "").trim().to_string();
    (clean_title, tags)
}

/// Merge title hashtags with native tags
///
/// Duplicates are detected case-insensitively; the first occurrence wins and
/// keeps its original casing. Order is preserved.
///
/// # Arguments
/// * `hashtags` - Tags extracted from the title
/// * `native_tags` - Tags from the exporter's `tags` array
pub fn combine_tags(hashtags: &[String], native_tags: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    hashtags
        .iter()
        .chain(native_tags)
        .filter(|tag| seen.insert(tag.to_lowercase()))
        .cloned()
        .collect()
}
