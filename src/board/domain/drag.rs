//! Drag-and-drop move events between columns.

use crate::task::domain::{Task, TaskId, TaskStatus};

/// A card dropped somewhere on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvent {
    task_id: TaskId,
    source: TaskStatus,
    destination: Option<TaskStatus>,
}

impl MoveEvent {
    /// Creates a move event; `destination` is `None` for a drop outside
    /// every column.
    #[must_use]
    pub const fn new(task_id: TaskId, source: TaskStatus, destination: Option<TaskStatus>) -> Self {
        Self {
            task_id,
            source,
            destination,
        }
    }

    /// Returns the dragged task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the status to transition to, or `None` when the drop changes
    /// nothing (no destination, or the source column).
    #[must_use]
    pub fn target_status(&self) -> Option<TaskStatus> {
        self.destination
            .filter(|destination| *destination != self.source)
    }

    /// Returns `true` when the drop moves a task into `done` from another
    /// column.
    #[must_use]
    pub fn completes_task(&self) -> bool {
        self.target_status() == Some(TaskStatus::Done)
    }
}

/// Result of handling a [`MoveEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The drop was a no-op; the store was not contacted.
    Ignored,
    /// The store confirmed the transition and returned this record.
    Moved(Task),
}
