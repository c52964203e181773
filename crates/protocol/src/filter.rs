//! List filters and summary counts.

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Which subset of the task list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// Every task.
    #[default]
    All,
    /// Tasks not yet completed.
    Pending,
    /// Completed tasks.
    Completed,
}

impl Filter {
    /// Returns `true` if the task belongs to this filter's subset.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.done,
            Self::Completed => task.done,
        }
    }

    /// Returns the display name for this filter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "todas",
            Self::Pending => "pendentes",
            Self::Completed => "concluídas",
        }
    }

    /// Returns all filters in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::All, Self::Pending, Self::Completed]
    }
}

/// Returns the tasks matching `filter`, in list order.
///
/// # Examples
///
/// ```
/// use tarefas_protocol::{DueDate, Filter, Task, visible};
///
/// let mut done = Task::new(1, "a", DueDate::default());
/// done.done = true;
/// let tasks = vec![done, Task::new(2, "b", DueDate::default())];
///
/// assert_eq!(visible(&tasks, Filter::All).len(), 2);
/// assert_eq!(visible(&tasks, Filter::Completed)[0].id, 1);
/// assert_eq!(visible(&tasks, Filter::Pending)[0].id, 2);
/// ```
#[must_use]
pub fn visible(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

/// Counts shown above the list.
///
/// Always computed from the full list, never from the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Number of tasks.
    pub total: usize,
    /// Number of tasks not yet completed.
    pub pending: usize,
    /// Number of completed tasks.
    pub completed: usize,
}

impl Summary {
    /// Computes the summary of a task list.
    #[must_use]
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.done).count();
        Self {
            total: tasks.len(),
            pending: tasks.len() - completed,
            completed,
        }
    }
}
