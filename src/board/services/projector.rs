//! Board projector: issues user actions to the store and reconciles the
//! cache with its answers.

use crate::board::{
    domain::{
        BoardAction, BoardColumns, BoardState, Celebration, FormState, MoveEvent, MoveOutcome,
        Resolution, TaskDraft,
    },
    ports::{TaskGateway, TaskGatewayError, TaskGatewayResult},
};
use crate::task::domain::{Task, TaskDomainError, TaskId, TaskStatus};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors returned by board projector actions.
///
/// Gateway failures are also recorded on the [`BoardState`] as a
/// dismissable message.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The store could not be reached or refused the action.
    #[error(transparent)]
    Gateway(#[from] TaskGatewayError),
    /// The task form failed local validation.
    #[error(transparent)]
    InvalidDraft(#[from] TaskDomainError),
    /// Delete was confirmed with no task selected.
    #[error("no task is awaiting delete confirmation")]
    NothingToDelete,
}

/// Result type for board projector actions.
pub type BoardResult<T> = Result<T, BoardError>;

/// Client-side board driven by a [`TaskGateway`].
///
/// Each action issues exactly one store request (preceded by a reload when
/// a storage failure left the cache stale) and only writes the cache with
/// the record the store returned.
pub struct BoardProjector<G, C>
where
    G: TaskGateway,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    clock: Arc<C>,
    state: BoardState,
}

impl<G, C> BoardProjector<G, C>
where
    G: TaskGateway,
    C: Clock + Send + Sync,
{
    /// Creates a projector with an empty, unloaded cache.
    #[must_use]
    pub fn new(gateway: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            gateway,
            clock,
            state: BoardState::new(),
        }
    }

    /// Returns the board state.
    #[must_use]
    pub const fn state(&self) -> &BoardState {
        &self.state
    }

    /// Partitions the cache into columns.
    #[must_use]
    pub fn columns(&self) -> BoardColumns<'_> {
        self.state.columns()
    }

    /// Replaces the cache with the store's full collection.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Gateway`] when the store cannot be read; the
    /// previous cache is kept.
    pub async fn load(&mut self) -> BoardResult<()> {
        self.state.begin(BoardAction::Load);
        let result = self.gateway.list_tasks().await;
        match result {
            Ok(tasks) => {
                debug!(count = tasks.len(), "board loaded");
                self.state
                    .resolve(BoardAction::Load, Resolution::Loaded(tasks));
                Ok(())
            }
            Err(err) => Err(self.record_failure(BoardAction::Load, err)),
        }
    }

    /// Creates a task and appends the stored record to the cache.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Gateway`] when the store rejects or fails the
    /// request.
    pub async fn create_task(&mut self, draft: TaskDraft) -> BoardResult<Task> {
        self.refresh_if_stale().await?;
        self.state.begin(BoardAction::Create);
        let result = self.gateway.create_task(&draft).await;
        self.settle(BoardAction::Create, result, Resolution::Created)
    }

    /// Updates a task and replaces its cache entry with the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Gateway`] when the store rejects or fails the
    /// request.
    pub async fn update_task(&mut self, id: TaskId, draft: TaskDraft) -> BoardResult<Task> {
        self.refresh_if_stale().await?;
        self.state.begin(BoardAction::Update(id));
        let result = self.gateway.update_task(id, &draft).await;
        self.settle(BoardAction::Update(id), result, Resolution::Replaced)
    }

    /// Deletes a task and drops it from the cache.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Gateway`] when the store rejects or fails the
    /// request.
    pub async fn delete_task(&mut self, id: TaskId) -> BoardResult<Task> {
        self.refresh_if_stale().await?;
        self.state.begin(BoardAction::Delete(id));
        let result = self.gateway.delete_task(id).await;
        self.settle(BoardAction::Delete(id), result, Resolution::Deleted)
    }

    /// Moves a task to `status` and replaces its cache entry.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Gateway`] when the store rejects or fails the
    /// request.
    pub async fn transition_status(&mut self, id: TaskId, status: TaskStatus) -> BoardResult<Task> {
        self.refresh_if_stale().await?;
        self.state.begin(BoardAction::Transition(id));
        let result = self.gateway.transition_status(id, status).await;
        self.settle(BoardAction::Transition(id), result, Resolution::Replaced)
    }

    /// Handles a card drop.
    ///
    /// Drops outside every column or back onto the source column are
    /// ignored without contacting the store. A confirmed move into `done`
    /// from another column arms the celebration.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Gateway`] when the transition fails.
    pub async fn move_task(&mut self, event: MoveEvent) -> BoardResult<MoveOutcome> {
        let Some(target) = event.target_status() else {
            debug!(task_id = %event.task_id(), "drop ignored");
            return Ok(MoveOutcome::Ignored);
        };

        let moved = self.transition_status(event.task_id(), target).await?;
        if event.completes_task() {
            self.state.celebrate(&moved, self.clock.utc());
        }
        Ok(MoveOutcome::Moved(moved))
    }

    /// Opens the add form preset to `status`.
    pub fn start_adding(&mut self, status: TaskStatus) {
        self.state.start_adding(status);
    }

    /// Opens the edit form for a cached task.
    pub fn start_editing(&mut self, task_id: TaskId) -> bool {
        self.state.start_editing(task_id)
    }

    /// Asks for delete confirmation of a cached task.
    pub fn start_deleting(&mut self, task_id: TaskId) -> bool {
        self.state.start_deleting(task_id)
    }

    /// Closes every open form and confirmation.
    pub fn cancel(&mut self) {
        self.state.cancel();
    }

    /// Submits the task form.
    ///
    /// Edits the task under the edit form, otherwise creates a new task.
    /// The form closes once the store confirms.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDraft`] without contacting the store
    /// when the trimmed title is empty, or [`BoardError::Gateway`] when the
    /// store rejects or fails the request.
    pub async fn submit(
        &mut self,
        title: &str,
        description: &str,
        status: TaskStatus,
    ) -> BoardResult<Task> {
        let draft = match TaskDraft::new(title, description, status) {
            Ok(draft) => draft,
            Err(err) => {
                self.state.set_form_error("Title is required");
                return Err(err.into());
            }
        };

        let saved = match self.state.form() {
            Some(FormState::Editing { task_id }) => self.update_task(task_id, draft).await?,
            Some(FormState::Adding { .. }) | None => self.create_task(draft).await?,
        };
        self.state.close_form();
        Ok(saved)
    }

    /// Deletes the task awaiting confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NothingToDelete`] when no task is selected, or
    /// [`BoardError::Gateway`] when the store rejects or fails the request.
    pub async fn confirm_delete(&mut self) -> BoardResult<Task> {
        let task_id = self
            .state
            .pending_delete()
            .ok_or(BoardError::NothingToDelete)?;
        self.delete_task(task_id).await
    }

    /// Clears the surfaced error.
    pub fn dismiss_error(&mut self) {
        self.state.dismiss_error();
    }

    /// Returns the celebration if it is still running.
    #[must_use]
    pub fn active_celebration(&self) -> Option<&Celebration> {
        self.state.active_celebration(self.clock.utc())
    }

    /// Drops the celebration once it has run its course.
    pub fn expire_celebration(&mut self) {
        self.state.expire_celebration(self.clock.utc());
    }

    async fn refresh_if_stale(&mut self) -> BoardResult<()> {
        if self.state.is_stale() {
            debug!("reloading stale board before mutation");
            self.load().await?;
        }
        Ok(())
    }

    fn settle(
        &mut self,
        action: BoardAction,
        result: TaskGatewayResult<Task>,
        resolution: fn(Task) -> Resolution,
    ) -> BoardResult<Task> {
        match result {
            Ok(task) => {
                self.state.resolve(action, resolution(task.clone()));
                Ok(task)
            }
            Err(err) => Err(self.record_failure(action, err)),
        }
    }

    fn record_failure(&mut self, action: BoardAction, err: TaskGatewayError) -> BoardError {
        warn!(?action, error = %err, "board action failed");
        self.state.fail(action, err.failure());
        BoardError::Gateway(err)
    }
}
