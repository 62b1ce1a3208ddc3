//! In-memory snapshot store for tests and ephemeral servers.

use crate::task::{
    domain::Task,
    ports::{TaskSnapshotStore, TaskSnapshotStoreError, TaskSnapshotStoreResult},
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory task snapshot store.
///
/// Holds the last saved collection and can be told to reject saves, which
/// lets tests exercise storage failure paths without touching the
/// filesystem.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskSnapshotStore {
    state: Arc<RwLock<Option<Vec<Task>>>>,
    reject_saves: Arc<AtomicBool>,
    save_count: Arc<AtomicUsize>,
}

impl InMemoryTaskSnapshotStore {
    /// Creates a store with nothing persisted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `tasks`.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            state: Arc::new(RwLock::new(Some(tasks))),
            ..Self::default()
        }
    }

    /// Makes subsequent saves fail (or succeed again when `reject` is false).
    pub fn reject_saves(&self, reject: bool) {
        self.reject_saves.store(reject, Ordering::SeqCst);
    }

    /// Returns the number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }

    /// Returns a copy of the persisted collection.
    ///
    /// # Errors
    ///
    /// Returns persistence errors when lock acquisition fails.
    pub fn persisted(&self) -> TaskSnapshotStoreResult<Option<Vec<Task>>> {
        let state = self.state.read().map_err(|err| {
            TaskSnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.clone())
    }
}

#[async_trait]
impl TaskSnapshotStore for InMemoryTaskSnapshotStore {
    async fn load(&self) -> TaskSnapshotStoreResult<Option<Vec<Task>>> {
        self.persisted()
    }

    async fn save(&self, tasks: &[Task]) -> TaskSnapshotStoreResult<()> {
        if self.reject_saves.load(Ordering::SeqCst) {
            return Err(TaskSnapshotStoreError::persistence(std::io::Error::other(
                "saves are rejected",
            )));
        }
        let mut state = self.state.write().map_err(|err| {
            TaskSnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        *state = Some(tasks.to_vec());
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
