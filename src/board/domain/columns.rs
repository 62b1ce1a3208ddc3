//! Partitioning of the task cache into board columns.

use crate::task::domain::{Task, TaskStatus};

/// Returns the heading shown above a status column.
#[must_use]
pub const fn column_title(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "To Do",
        TaskStatus::InProgress => "In Progress",
        TaskStatus::Done => "Done",
    }
}

/// Tasks split into the three status columns.
///
/// Within a column, tasks keep the order they have in the cache. There is
/// no separate per-column ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardColumns<'a> {
    todo: Vec<&'a Task>,
    in_progress: Vec<&'a Task>,
    done: Vec<&'a Task>,
}

impl<'a> BoardColumns<'a> {
    /// Partitions `tasks` by status.
    #[must_use]
    pub fn partition(tasks: &'a [Task]) -> Self {
        let mut columns = Self::default();
        for task in tasks {
            columns.bucket_mut(task.status()).push(task);
        }
        columns
    }

    /// Returns the tasks in the column for `status`.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[&'a Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    /// Iterates over the columns in board order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskStatus, &[&'a Task])> + '_ {
        TaskStatus::ALL
            .into_iter()
            .map(move |status| (status, self.column(status)))
    }

    /// Returns the number of tasks across every column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    /// Returns `true` when no column holds a task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    const fn bucket_mut(&mut self, status: TaskStatus) -> &mut Vec<&'a Task> {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Done => &mut self.done,
        }
    }
}
