//! Task-related types.
//!
//! This module defines the task as the service sends it, its optional due
//! date, and the payload used to create a new task.

use serde::{Deserialize, Serialize};

use crate::user::UserId;

/// Server-assigned task identifier.
pub type TaskId = u32;

/// An optional due date, stored as three independent components.
///
/// The service stores `0` for a missing component. A date is displayed
/// only when all three components are non-zero.
///
/// # Examples
///
/// ```
/// use tarefas_protocol::DueDate;
///
/// assert_eq!(DueDate::new(5, 3, 2026).label().as_deref(), Some("05/03/2026"));
/// assert_eq!(DueDate::new(5, 0, 2026).label(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DueDate {
    /// Day of month, `0` when absent.
    #[serde(rename = "dia", default)]
    pub day: i32,
    /// Month, `0` when absent.
    #[serde(rename = "mes", default)]
    pub month: i32,
    /// Year, `0` when absent.
    #[serde(rename = "ano", default)]
    pub year: i32,
}

impl DueDate {
    /// Creates a due date from its components.
    #[must_use]
    pub const fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Returns `true` if every component is present (non-zero).
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.day != 0 && self.month != 0 && self.year != 0
    }

    /// Formats the date as `DD/MM/YYYY`, or `None` if a component is missing.
    ///
    /// Day and month are zero-padded to two digits; the year is printed as is.
    #[must_use]
    pub fn label(self) -> Option<String> {
        self.is_complete()
            .then(|| format!("{:02}/{:02}/{}", self.day, self.month, self.year))
    }
}

/// A task owned by the service.
///
/// The client only ever holds a cached copy of a user's active tasks;
/// it is discarded and re-fetched after every mutation.
///
/// # Examples
///
/// ```
/// use tarefas_protocol::Task;
///
/// let json = r#"{"id":3,"idUsuario":1,"descricao":"ler","concluida":false,
///                "ativo":true,"dia":0,"mes":0,"ano":0}"#;
/// let task: Task = serde_json::from_str(json).unwrap();
/// assert_eq!(task.description, "ler");
/// assert!(task.active);
/// assert_eq!(task.due.label(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Owner of the task.
    #[serde(rename = "idUsuario", default)]
    pub user_id: UserId,
    /// Free-form description.
    #[serde(rename = "descricao")]
    pub description: String,
    /// Optional due date.
    #[serde(flatten)]
    pub due: DueDate,
    /// Whether the task has been completed.
    #[serde(rename = "concluida", default)]
    pub done: bool,
    /// Soft-delete marker; `false` means the task was deleted.
    #[serde(rename = "ativo", default)]
    pub active: bool,
}

impl Task {
    /// Creates an active, pending task.
    ///
    /// Useful for tests and for seeding an in-memory service.
    #[must_use]
    pub fn new(id: TaskId, description: impl Into<String>, due: DueDate) -> Self {
        Self {
            id,
            user_id: 0,
            description: description.into(),
            due,
            done: false,
            active: true,
        }
    }
}

/// Drops every soft-deleted task from a fetched list.
///
/// # Examples
///
/// ```
/// use tarefas_protocol::{DueDate, Task, retain_active};
///
/// let mut gone = Task::new(2, "old", DueDate::default());
/// gone.active = false;
/// let tasks = retain_active(vec![Task::new(1, "new", DueDate::default()), gone]);
/// assert_eq!(tasks.len(), 1);
/// assert_eq!(tasks[0].id, 1);
/// ```
#[must_use]
pub fn retain_active(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.retain(|task| task.active);
    tasks
}

/// A validated task ready to be sent to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Owner of the new task.
    pub user_id: UserId,
    /// Trimmed, non-empty description.
    pub description: String,
    /// Due date; components that could not be parsed are `0`.
    pub due: DueDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn label_pads_day_and_month() {
        assert_eq!(DueDate::new(5, 3, 2026).label().as_deref(), Some("05/03/2026"));
        assert_eq!(DueDate::new(25, 12, 2026).label().as_deref(), Some("25/12/2026"));
    }

    #[test]
    fn label_absent_when_any_component_missing() {
        assert_eq!(DueDate::new(0, 3, 2026).label(), None);
        assert_eq!(DueDate::new(5, 0, 2026).label(), None);
        assert_eq!(DueDate::new(5, 3, 0).label(), None);
        assert_eq!(DueDate::default().label(), None);
    }

    #[test]
    fn task_missing_flags_default_to_false() {
        let task: Task = serde_json::from_str(r#"{"id":1,"descricao":"x"}"#).unwrap();
        assert!(!task.done);
        assert!(!task.active);
        assert_eq!(task.due, DueDate::default());
    }

    #[test]
    fn retain_active_keeps_order() {
        let mut deleted = Task::new(2, "b", DueDate::default());
        deleted.active = false;
        let tasks = retain_active(vec![
            Task::new(1, "a", DueDate::default()),
            deleted,
            Task::new(3, "c", DueDate::default()),
        ]);
        let ids: Vec<_> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    proptest! {
        #[test]
        fn label_present_iff_all_components_non_zero(
            day in -3i32..40,
            month in -3i32..15,
            year in -1i32..3000,
        ) {
            let due = DueDate::new(day, month, year);
            let complete = day != 0 && month != 0 && year != 0;
            prop_assert_eq!(due.label().is_some(), complete);
        }
    }
}
