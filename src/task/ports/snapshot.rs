//! Snapshot port for whole-collection task persistence.

use crate::task::domain::Task;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task snapshot store operations.
pub type TaskSnapshotStoreResult<T> = Result<T, TaskSnapshotStoreError>;

/// Durable storage for the complete, ordered task collection.
///
/// There is no incremental write path: every save replaces the whole
/// persisted collection, and a reader must observe either the previous or
/// the new collection, never a mix of both.
#[async_trait]
pub trait TaskSnapshotStore: Send + Sync {
    /// Loads the persisted collection in stored order.
    ///
    /// Returns `None` when nothing has been persisted yet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSnapshotStoreError::Corrupt`] when the stored data cannot
    /// be decoded or [`TaskSnapshotStoreError::Persistence`] when it cannot
    /// be read.
    async fn load(&self) -> TaskSnapshotStoreResult<Option<Vec<Task>>>;

    /// Durably replaces the persisted collection with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSnapshotStoreError::Persistence`] when the write does
    /// not complete.
    async fn save(&self, tasks: &[Task]) -> TaskSnapshotStoreResult<()>;
}

/// Errors returned by task snapshot store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskSnapshotStoreError {
    /// Stored data exists but is not a valid task collection.
    #[error("stored task collection is corrupt: {0}")]
    Corrupt(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskSnapshotStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
