//! Field mapping from reminders to Asana rows

use super::language::Language;
use super::priority::map_priority;
use super::row::AsanaRow;
use crate::formatting::{compose_notes, format_date, format_section, metadata_lines};
use crate::reminders::Reminder;
use crate::tags::{combine_tags, extract_tags_from_title};

/// Name given to subtasks exported without a title
pub const UNTITLED_SUBTASK: &str = "Untitled Subtask";

/// Name given to untitled tasks that have subtasks, so the subtask rows
/// still point at a parent
pub const UNTITLED_TASK: &str = "Untitled Task";

/// Settings that apply to every mapped row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingOptions {
    /// Email written into every row's assignee column
    pub assignee: Option<String>,
    pub language: Language,
}

/// Name shown in Asana for a reminder title
///
/// Hashtags are removed; a title made only of hashtags keeps its raw form so
/// the row is never nameless.
pub fn display_name(title: &str) -> String {
    let (clean, _) = extract_tags_from_title(title);
    if clean.is_empty() {
        title.to_string()
    } else {
        clean
    }
}

/// Map one reminder to its Asana rows
///
/// The first row is the task itself, followed by one row per subtask whose
/// `Parent task` column holds the task's display name. Subtasks have no
/// section of their own. A task without a title is named `Untitled Task` when
/// it has subtasks; Asana would otherwise import them as top-level tasks.
///
/// # Arguments
/// * `reminder` - Normalized reminder
/// * `options` - Assignee and target language
///
/// # Returns
/// `1 + reminder.subtasks.len()` rows
pub fn map_reminder(reminder: &Reminder, options: &MappingOptions) -> Vec<AsanaRow> {
    let parent_title = if reminder.title.trim().is_empty() && !reminder.subtasks.is_empty() {
        UNTITLED_TASK
    } else {
        reminder.title.as_str()
    };
    let parent = map_single(reminder, parent_title, options);
    let parent_name = parent.name.clone();

    let mut rows = Vec::with_capacity(1 + reminder.subtasks.len());
    rows.push(parent);

    for subtask in &reminder.subtasks {
        let title = if subtask.title.trim().is_empty() {
            UNTITLED_SUBTASK
        } else {
            subtask.title.as_str()
        };
        let mut row = map_single(subtask, title, options);
        row.section = String::new();
        row.parent_task = parent_name.clone();
        rows.push(row);
    }

    rows
}

/// Map a list of reminders, keeping every subtask right after its parent
pub fn map_reminders(reminders: &[Reminder], options: &MappingOptions) -> Vec<AsanaRow> {
    reminders
        .iter()
        .flat_map(|reminder| map_reminder(reminder, options))
        .collect()
}

fn map_single(reminder: &Reminder, title: &str, options: &MappingOptions) -> AsanaRow {
    let (_, hashtags) = extract_tags_from_title(title);
    let tags = combine_tags(&hashtags, &reminder.tags);

    AsanaRow {
        name: display_name(title),
        assignee_email: options.assignee.clone().unwrap_or_default(),
        due_date: format_date(&reminder.due_date),
        tags: tags.join(", "),
        notes: compose_notes(&reminder.notes, &metadata_lines(reminder)),
        section: format_section(&reminder.list),
        parent_task: String::new(),
        priority: map_priority(&reminder.priority, options.language),
    }
}
