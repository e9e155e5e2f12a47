/// One line of an Asana CSV import
///
/// Subtasks are separate rows whose `parent_task` names the parent row;
/// Asana nests them on import. Top-level rows leave `parent_task` empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AsanaRow {
    pub name: String,
    pub assignee_email: String,
    /// `MM/DD/YYYY` or empty
    pub due_date: String,
    /// Comma-separated tag list
    pub tags: String,
    pub notes: String,
    pub section: String,
    pub parent_task: String,
    /// Localized priority label or empty
    pub priority: String,
}

impl AsanaRow {
    /// Cell values in the same order as `Language::headers()`
    pub fn to_record(&self) -> [&str; 8] {
        [
            &self.name,
            &self.assignee_email,
            &self.due_date,
            &self.tags,
            &self.notes,
            &self.section,
            &self.parent_task,
            &self.priority,
        ]
    }

    /// Check if this row is a subtask of another row
    pub fn is_subtask(&self) -> bool {
        !self.parent_task.is_empty()
    }
}
