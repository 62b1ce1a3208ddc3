//! Task aggregate root and its mutation rules.

use super::{TaskId, TaskStatus, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// Serializes as `{id, title, description, status, createdAt, updatedAt?}`;
/// `updatedAt` is omitted until the first mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    #[serde(default)]
    description: String,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

/// Field-level changes applied by a general update.
///
/// `None` leaves the field untouched; `Some(String::new())` for the
/// description is an explicit empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title.
    pub title: Option<TaskTitle>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement status.
    pub status: Option<TaskStatus>,
}

impl Task {
    /// Creates a new task stamped with the current clock time.
    #[must_use]
    pub fn new(
        title: TaskTitle,
        description: impl Into<String>,
        status: TaskStatus,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: TaskId::new(),
            title,
            description: description.into(),
            status,
            created_at: clock.utc(),
            updated_at: None,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp, if the task was ever mutated.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Merges the supplied fields into this task and stamps `updated_at`.
    pub fn apply_patch(&mut self, patch: TaskPatch, clock: &impl Clock) {
        let TaskPatch {
            title,
            description,
            status,
        } = patch;

        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(new_description) = description {
            self.description = new_description;
        }
        if let Some(new_status) = status {
            self.status = new_status;
        }
        self.touch(clock);
    }

    /// Moves the task to `status`, leaving title and description untouched.
    ///
    /// Every status is reachable from every other; moving to the current
    /// status still stamps `updated_at`.
    pub fn transition_to(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Stamps `updated_at`, never moving it before `created_at` or behind a
    /// previous stamp.
    fn touch(&mut self, clock: &impl Clock) {
        let floor = self.updated_at.unwrap_or(self.created_at);
        self.updated_at = Some(clock.utc().max(floor));
    }
}
