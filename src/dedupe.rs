//! Duplicate reminder removal
//!
//! Running the Backup Shortcut more than once, or merging exports from both
//! exporters, produces repeated records. Asana would import each as its own
//! task, so repeats are dropped before mapping.

use crate::reminders::Reminder;
use std::collections::HashSet;
use tracing::debug;

/// Remove reminders whose title, notes, list and due date repeat an earlier one
///
/// The first occurrence is kept and order is preserved. Legacy and backup
/// records with equal key fields count as duplicates of each other.
///
/// # Arguments
/// * `reminders` - Reminders in export order
///
/// # Returns
/// The unique reminders and the number of duplicates removed
pub fn deduplicate_reminders(reminders: Vec<Reminder>) -> (Vec<Reminder>, usize) {
    let mut seen = HashSet::with_capacity(reminders.len());
    let total = reminders.len();

    let unique: Vec<Reminder> = reminders
        .into_iter()
        .filter(|reminder| {
            let fresh = seen.insert(reminder.dedupe_key());
            if !fresh {
                debug!(title = reminder.log_title(), "Dropping duplicate reminder");
            }
            fresh
        })
        .collect();

    let removed = total - unique.len();
    (unique, removed)
}
