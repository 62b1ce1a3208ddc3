//! Task form submissions.

use crate::task::domain::{TaskDomainError, TaskStatus, TaskTitle};

/// Validated contents of the add/edit task form.
///
/// Title and description are trimmed; a title that is empty after trimming
/// never leaves the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: TaskTitle,
    description: String,
    status: TaskStatus,
}

impl TaskDraft {
    /// Creates a draft from raw form input.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the trimmed title is
    /// empty.
    pub fn new(title: &str, description: &str, status: TaskStatus) -> Result<Self, TaskDomainError> {
        Ok(Self {
            title: TaskTitle::new(title.trim())?,
            description: description.trim().to_owned(),
            status,
        })
    }

    /// Returns the trimmed title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the trimmed description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the selected status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }
}
