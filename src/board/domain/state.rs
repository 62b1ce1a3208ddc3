//! Board state machine: task cache, action lifecycle, and UI selections.

use super::{BoardColumns, Celebration};
use crate::task::domain::{Task, TaskId, TaskStatus};
use chrono::{DateTime, Utc};

/// A user action that round-trips to the task store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    /// Fetch the whole collection.
    Load,
    /// Create a task.
    Create,
    /// Edit a task's fields.
    Update(TaskId),
    /// Delete a task.
    Delete(TaskId),
    /// Move a task to another column.
    Transition(TaskId),
}

impl BoardAction {
    /// Returns the message surfaced when this action fails.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Load => "Failed to fetch tasks",
            Self::Create => "Failed to add task",
            Self::Update(_) => "Failed to update task",
            Self::Delete(_) => "Failed to delete task",
            Self::Transition(_) => "Failed to update task status",
        }
    }
}

/// Lifecycle of the most recent action: `idle → pending → resolved|failed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActionState {
    /// No action has been issued yet.
    #[default]
    Idle,
    /// The action is awaiting the store's answer.
    Pending(BoardAction),
    /// The store confirmed the action.
    Resolved(BoardAction),
    /// The action failed; the cache was left unchanged.
    Failed(BoardAction),
}

/// Authoritative result of a confirmed action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The full collection, replacing the cache.
    Loaded(Vec<Task>),
    /// A newly created task, appended to the cache.
    Created(Task),
    /// An updated or transitioned task, replacing its cache entry.
    Replaced(Task),
    /// A deleted task, removed from the cache.
    Deleted(Task),
}

/// How an action failed, as far as the board cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The store rejected the request as invalid.
    Rejected,
    /// The task no longer exists in the store.
    Missing(TaskId),
    /// The store or the route to it failed.
    Unavailable,
}

/// Which task form is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Adding a task to the given column.
    Adding {
        /// Status preselected for the new task.
        status: TaskStatus,
    },
    /// Editing an existing task.
    Editing {
        /// Task being edited.
        task_id: TaskId,
    },
}

/// Client-side board state.
///
/// The cache is only written when an action resolves, and always with the
/// record the store returned. Failures leave it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    tasks: Vec<Task>,
    action: ActionState,
    error: Option<String>,
    stale: bool,
    form: Option<FormState>,
    form_error: Option<String>,
    pending_delete: Option<TaskId>,
    celebration: Option<Celebration>,
}

impl BoardState {
    /// Creates an empty board that has not loaded yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached tasks in store order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the cached task with `id`.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Partitions the cache into columns.
    #[must_use]
    pub fn columns(&self) -> BoardColumns<'_> {
        BoardColumns::partition(&self.tasks)
    }

    /// Returns the lifecycle of the latest action.
    #[must_use]
    pub const fn action(&self) -> ActionState {
        self.action
    }

    /// Returns `true` while an action awaits the store.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.action, ActionState::Pending(_))
    }

    /// Returns `true` when the view should show a loading indicator instead
    /// of the columns: the cache is empty and a load is in flight.
    #[must_use]
    pub fn shows_loading_indicator(&self) -> bool {
        self.tasks.is_empty() && self.action == ActionState::Pending(BoardAction::Load)
    }

    /// Returns the surfaced error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns `true` when a storage failure means the cache must be
    /// reloaded before the next mutation.
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        self.stale
    }

    /// Returns the open task form, if any.
    #[must_use]
    pub const fn form(&self) -> Option<FormState> {
        self.form
    }

    /// Returns the validation message shown on the task form.
    #[must_use]
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Returns the task awaiting delete confirmation.
    #[must_use]
    pub const fn pending_delete(&self) -> Option<TaskId> {
        self.pending_delete
    }

    /// Marks `action` as in flight. The cache is not touched.
    pub const fn begin(&mut self, action: BoardAction) {
        self.action = ActionState::Pending(action);
    }

    /// Applies the store's answer to `action`.
    pub fn resolve(&mut self, action: BoardAction, resolution: Resolution) {
        match resolution {
            Resolution::Loaded(tasks) => {
                self.tasks = tasks;
                self.stale = false;
                self.error = None;
            }
            Resolution::Created(task) => self.tasks.push(task),
            Resolution::Replaced(task) => {
                if let Some(cached) = self.tasks.iter_mut().find(|cached| cached.id() == task.id())
                {
                    *cached = task;
                }
            }
            Resolution::Deleted(task) => {
                self.tasks.retain(|cached| cached.id() != task.id());
                self.clear_selection_for(task.id());
            }
        }
        self.action = ActionState::Resolved(action);
    }

    /// Records a failed `action` without touching the cache.
    pub fn fail(&mut self, action: BoardAction, failure: FailureKind) {
        self.action = ActionState::Failed(action);
        self.error = Some(action.failure_message().to_owned());
        match failure {
            FailureKind::Rejected => {}
            FailureKind::Missing(task_id) => self.clear_selection_for(task_id),
            FailureKind::Unavailable => self.stale = true,
        }
    }

    /// Clears the surfaced error.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Opens the add form preset to `status`.
    pub fn start_adding(&mut self, status: TaskStatus) {
        self.form = Some(FormState::Adding { status });
        self.form_error = None;
    }

    /// Opens the edit form for a cached task. Returns `false` when the task
    /// is not in the cache.
    pub fn start_editing(&mut self, task_id: TaskId) -> bool {
        if self.task(task_id).is_none() {
            return false;
        }
        self.form = Some(FormState::Editing { task_id });
        self.form_error = None;
        true
    }

    /// Asks for delete confirmation of a cached task. Returns `false` when
    /// the task is not in the cache.
    pub fn start_deleting(&mut self, task_id: TaskId) -> bool {
        if self.task(task_id).is_none() {
            return false;
        }
        self.pending_delete = Some(task_id);
        true
    }

    /// Shows a validation message on the open form.
    pub fn set_form_error(&mut self, message: impl Into<String>) {
        self.form_error = Some(message.into());
    }

    /// Closes the task form.
    pub fn close_form(&mut self) {
        self.form = None;
        self.form_error = None;
    }

    /// Closes every open form and confirmation.
    pub fn cancel(&mut self) {
        self.close_form();
        self.pending_delete = None;
    }

    /// Arms the completion celebration for `task`.
    pub fn celebrate(&mut self, task: &Task, now: DateTime<Utc>) {
        self.celebration = Some(Celebration::new(task, now));
    }

    /// Returns the celebration if it has not yet expired at `now`.
    #[must_use]
    pub fn active_celebration(&self, now: DateTime<Utc>) -> Option<&Celebration> {
        self.celebration
            .as_ref()
            .filter(|celebration| celebration.is_active(now))
    }

    /// Drops the celebration once it has expired at `now`.
    pub fn expire_celebration(&mut self, now: DateTime<Utc>) {
        if self
            .celebration
            .as_ref()
            .is_some_and(|celebration| !celebration.is_active(now))
        {
            self.celebration = None;
        }
    }

    fn clear_selection_for(&mut self, task_id: TaskId) {
        if self.form == Some(FormState::Editing { task_id }) {
            self.close_form();
        }
        if self.pending_delete == Some(task_id) {
            self.pending_delete = None;
        }
    }
}
