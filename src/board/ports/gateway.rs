//! Gateway port through which the board talks to the task store.

use crate::board::domain::{FailureKind, TaskDraft};
use crate::task::domain::{Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task gateway operations.
pub type TaskGatewayResult<T> = Result<T, TaskGatewayError>;

/// Request/response contract of the task store, seen from the client.
///
/// Every method is one round trip and returns the store's authoritative
/// record.
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Fetches every task in store order.
    async fn list_tasks(&self) -> TaskGatewayResult<Vec<Task>>;

    /// Creates a task from a form draft.
    async fn create_task(&self, draft: &TaskDraft) -> TaskGatewayResult<Task>;

    /// Replaces a task's title, description, and status with the draft's.
    async fn update_task(&self, id: TaskId, draft: &TaskDraft) -> TaskGatewayResult<Task>;

    /// Deletes a task, returning the removed record.
    async fn delete_task(&self, id: TaskId) -> TaskGatewayResult<Task>;

    /// Moves a task to `status`.
    async fn transition_status(&self, id: TaskId, status: TaskStatus)
    -> TaskGatewayResult<Task>;
}

/// Errors returned by task gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskGatewayError {
    /// The store rejected the request as invalid.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The task does not exist in the store.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The store could not complete the request.
    #[error("task store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskGatewayError {
    /// Wraps a store or transport failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }

    /// Classifies the error for the board state machine.
    #[must_use]
    pub const fn failure(&self) -> FailureKind {
        match self {
            Self::Rejected(_) => FailureKind::Rejected,
            Self::NotFound(id) => FailureKind::Missing(*id),
            Self::Unavailable(_) => FailureKind::Unavailable,
        }
    }
}
