//! Fallback seed data for the task store.

use super::{Task, TaskDraft, TaskId};
use chrono::NaiveDate;

/// Returns the fixed one-task seed collection.
///
/// Used when no collection is injected and the persistence strategy yields
/// no data, so a fresh installation always starts with one example task.
#[must_use]
pub fn default_tasks() -> Vec<Task> {
    vec![Task::from_draft(
        TaskId::from("1"),
        TaskDraft::new("Sample TODO")
            .with_description("This is a sample TODO")
            .with_assignee("Taro Yamada")
            .with_due_date(NaiveDate::from_ymd_opt(2026, 1, 10)),
    )]
}
