//! Authoritative task store with whole-collection persistence.

use crate::task::{
    domain::{
        ParseTaskStatusError, Task, TaskDomainError, TaskId, TaskPatch, TaskStatus, TaskTitle,
    },
    ports::{TaskSnapshotStore, TaskSnapshotStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::example_tasks;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    status: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status token; an empty token selects `todo`.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Request payload for a partial task update.
///
/// Fields left unset keep their stored values. An empty title or status
/// string counts as unset; an empty description is an explicit value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a replacement status token.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    fn into_patch(self) -> TaskStoreResult<TaskPatch> {
        let title = self
            .title
            .filter(|title| !title.is_empty())
            .map(TaskTitle::new)
            .transpose()?;
        let status = self
            .status
            .filter(|status| !status.is_empty())
            .map(|status| TaskStatus::try_from(status.as_str()))
            .transpose()?;
        Ok(TaskPatch {
            title,
            description: self.description,
            status,
        })
    }
}

/// Request payload for moving a task to another status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTaskRequest {
    task_id: TaskId,
    status: String,
}

impl TransitionTaskRequest {
    /// Creates a transition request; an empty status counts as missing.
    #[must_use]
    pub fn new(task_id: TaskId, status: impl Into<String>) -> Self {
        Self {
            task_id,
            status: status.into(),
        }
    }

    /// Returns the target task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }
}

/// What the store does when no collection has been persisted yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Persist one example task per status.
    #[default]
    Examples,
    /// Persist an empty collection.
    Empty,
}

/// Service-level errors for task store operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// A status token was outside the closed set.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// A transition request carried no status.
    #[error("status is required")]
    MissingStatus,
    /// No task has the given identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Durable storage failed.
    #[error(transparent)]
    Storage(#[from] TaskSnapshotStoreError),
}

/// Coarse classification of [`TaskStoreError`] for callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request itself was invalid; retrying it cannot succeed.
    Validation,
    /// The referenced task does not exist.
    NotFound,
    /// Storage failed; callers should reload before mutating again.
    Storage,
}

impl TaskStoreError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) | Self::InvalidStatus(_) | Self::MissingStatus => {
                ErrorKind::Validation
            }
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Storage(_) => ErrorKind::Storage,
        }
    }
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Authoritative holder of every task.
///
/// Each mutation holds the write guard across modify-and-persist, so
/// mutations are serialized and readers never see a half-applied change.
/// The in-memory collection only advances after the snapshot save succeeds.
/// Modify, save, and commit run on a spawned task, so dropping the caller's
/// future never leaves the file ahead of memory.
pub struct TaskStore<S, C>
where
    S: TaskSnapshotStore,
    C: Clock + Send + Sync,
{
    snapshots: Arc<S>,
    clock: Arc<C>,
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl<S, C> TaskStore<S, C>
where
    S: TaskSnapshotStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Loads the persisted collection, seeding it when nothing exists yet.
    ///
    /// A persisted collection is adopted as-is. When none exists, the seed
    /// chosen by `seed` is written before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Storage`] when loading or seeding fails.
    pub async fn open(snapshots: Arc<S>, clock: Arc<C>, seed: SeedPolicy) -> TaskStoreResult<Self> {
        let tasks = if let Some(tasks) = snapshots.load().await? {
            info!(count = tasks.len(), "loaded tasks from storage");
            tasks
        } else {
            let tasks = match seed {
                SeedPolicy::Examples => example_tasks(&*clock)?,
                SeedPolicy::Empty => Vec::new(),
            };
            snapshots.save(&tasks).await?;
            info!(count = tasks.len(), "no stored tasks found, seeded storage");
            tasks
        };

        Ok(Self {
            snapshots,
            clock,
            tasks: Arc::new(RwLock::new(tasks)),
        })
    }

    /// Returns every task in creation order.
    pub async fn list_all(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    /// Finds a task by identifier.
    pub async fn find(&self, id: TaskId) -> Option<Task> {
        self.tasks
            .read()
            .await
            .iter()
            .find(|task| task.id() == id)
            .cloned()
    }

    /// Creates a task and persists the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] for an empty title,
    /// [`TaskStoreError::InvalidStatus`] for an unknown status token, or
    /// [`TaskStoreError::Storage`] when persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskStoreResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            status,
        } = request;

        let outcome = self
            .mutate(move |tasks, clock| {
                let task_title = TaskTitle::new(title)?;
                let initial_status = match status.as_deref() {
                    None | Some("") => TaskStatus::default(),
                    Some(token) => TaskStatus::try_from(token)?,
                };
                let task = Task::new(
                    task_title,
                    description.unwrap_or_default(),
                    initial_status,
                    clock,
                );
                tasks.push(task.clone());
                Ok(task)
            })
            .await;

        log_outcome("create", outcome)
    }

    /// Merges the supplied fields into an existing task and persists.
    ///
    /// The task is looked up before the fields are validated.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] for an unknown identifier,
    /// validation errors for a blank title or unknown status, or
    /// [`TaskStoreError::Storage`] when persistence fails.
    pub async fn update(&self, id: TaskId, request: UpdateTaskRequest) -> TaskStoreResult<Task> {
        let outcome = self
            .mutate(move |tasks, clock| {
                let task = find_mut(tasks, id)?;
                let patch = request.into_patch()?;
                task.apply_patch(patch, clock);
                Ok(task.clone())
            })
            .await;

        log_outcome("update", outcome)
    }

    /// Removes a task, returning it as it was immediately before removal.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] for an unknown identifier or
    /// [`TaskStoreError::Storage`] when persistence fails.
    pub async fn delete(&self, id: TaskId) -> TaskStoreResult<Task> {
        let outcome = self
            .mutate(move |tasks, _| {
                let index = tasks
                    .iter()
                    .position(|task| task.id() == id)
                    .ok_or(TaskStoreError::NotFound(id))?;
                Ok(tasks.remove(index))
            })
            .await;

        log_outcome("delete", outcome)
    }

    /// Moves a task to another status, touching nothing but the status and
    /// `updatedAt`.
    ///
    /// The status is validated before the task is looked up.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::MissingStatus`] or
    /// [`TaskStoreError::InvalidStatus`] for a bad status,
    /// [`TaskStoreError::NotFound`] for an unknown identifier, or
    /// [`TaskStoreError::Storage`] when persistence fails.
    pub async fn transition_status(&self, request: TransitionTaskRequest) -> TaskStoreResult<Task> {
        let TransitionTaskRequest { task_id, status } = request;

        let outcome = self
            .mutate(move |tasks, clock| {
                if status.is_empty() {
                    return Err(TaskStoreError::MissingStatus);
                }
                let target = TaskStatus::try_from(status.as_str())?;
                let task = find_mut(tasks, task_id)?;
                task.transition_to(target, clock);
                Ok(task.clone())
            })
            .await;

        log_outcome("transition_status", outcome)
    }

    async fn mutate<T, F>(&self, apply: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut Vec<Task>, &C) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let mut tasks = Arc::clone(&self.tasks).write_owned().await;
        let snapshots = Arc::clone(&self.snapshots);
        let clock = Arc::clone(&self.clock);

        let commit = tokio::spawn(async move {
            let mut next = Vec::clone(&tasks);
            let value = apply(&mut next, &*clock)?;
            snapshots.save(&next).await?;
            *tasks = next;
            Ok::<_, TaskStoreError>(value)
        });
        commit.await.map_err(TaskSnapshotStoreError::persistence)?
    }
}

fn find_mut(tasks: &mut [Task], id: TaskId) -> TaskStoreResult<&mut Task> {
    tasks
        .iter_mut()
        .find(|task| task.id() == id)
        .ok_or(TaskStoreError::NotFound(id))
}

fn log_outcome(operation: &'static str, outcome: TaskStoreResult<Task>) -> TaskStoreResult<Task> {
    match &outcome {
        Ok(task) => info!(operation, task_id = %task.id(), status = %task.status(), "task stored"),
        Err(err) => warn!(operation, kind = ?err.kind(), error = %err, "task operation rejected"),
    }
    outcome
}
