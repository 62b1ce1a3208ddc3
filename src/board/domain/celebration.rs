//! One-shot celebration shown when a task reaches `done`.

use crate::task::domain::{Task, TaskId};
use chrono::{DateTime, TimeDelta, Utc};

/// How long a celebration stays active, in milliseconds.
pub const CELEBRATION_MILLIS: i64 = 3_500;

/// A pending, time-boxed celebration for a completed task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Celebration {
    task_id: TaskId,
    title: String,
    expires_at: DateTime<Utc>,
}

impl Celebration {
    /// Arms a celebration for `task` at `now`.
    #[must_use]
    pub fn new(task: &Task, now: DateTime<Utc>) -> Self {
        let expires_at = now
            .checked_add_signed(TimeDelta::milliseconds(CELEBRATION_MILLIS))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self {
            task_id: task.id(),
            title: task.title().as_str().to_owned(),
            expires_at,
        }
    }

    /// Returns the completed task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the completed task's title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns `true` while `now` is before the expiry.
    #[must_use]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}
