use super::language::Language;

/// Asana priority option
///
/// Apple's "no priority" has no counterpart; it maps to an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Map an Apple Reminders priority word
    ///
    /// Both exporter vocabularies are understood:
    /// - Backup Shortcut (German): `Ohne`, `Gering`, `Niedrig`, `Mittel`, `Hoch`
    /// - apple-reminders-exporter (English): `None`, `Low`, `Medium`, `High`
    ///
    /// # Returns
    /// None for "no priority", empty input and unknown words
    pub fn from_apple(word: &str) -> Option<Priority> {
        match word.trim() {
            "Gering" | "Niedrig" | "Low" => Some(Priority::Low),
            "Mittel" | "Medium" => Some(Priority::Medium),
            "Hoch" | "High" => Some(Priority::High),
            _ => None,
        }
    }

    /// Option label as Asana shows it in the given language
    pub fn label(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::En, Priority::Low) => "Low",
            (Language::En, Priority::Medium) => "Medium",
            (Language::En, Priority::High) => "High",
            (Language::De, Priority::Low) => "Niedrig",
            (Language::De, Priority::Medium) => "Mittel",
            (Language::De, Priority::High) => "Hoch",
        }
    }
}

/// Translate an Apple priority word into an Asana priority cell
///
/// # Examples
/// ```
/// # use reminders_asana::asana::{Language, map_priority};
/// assert_eq!(map_priority("Hoch", Language::En), "High");
/// assert_eq!(map_priority("Gering", Language::De), "Niedrig");
/// assert_eq!(map_priority("Ohne", Language::En), "");
/// ```
pub fn map_priority(word: &str, language: Language) -> String {
    Priority::from_apple(word)
        .map(|p| p.label(language).to_string())
        .unwrap_or_default()
}
