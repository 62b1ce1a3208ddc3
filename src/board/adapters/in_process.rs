//! Gateway adapter that calls a [`TaskStore`] in the same process.

use crate::board::{
    domain::TaskDraft,
    ports::{TaskGateway, TaskGatewayError, TaskGatewayResult},
};
use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::TaskSnapshotStore,
    services::{
        CreateTaskRequest, ErrorKind, TaskStore, TaskStoreError, TransitionTaskRequest,
        UpdateTaskRequest,
    },
};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;

/// Task gateway backed by an in-process task store.
pub struct InProcessTaskGateway<S, C>
where
    S: TaskSnapshotStore,
    C: Clock + Send + Sync,
{
    store: Arc<TaskStore<S, C>>,
}

impl<S, C> InProcessTaskGateway<S, C>
where
    S: TaskSnapshotStore,
    C: Clock + Send + Sync,
{
    /// Creates a gateway over `store`.
    #[must_use]
    pub const fn new(store: Arc<TaskStore<S, C>>) -> Self {
        Self { store }
    }
}

impl<S, C> Clone for InProcessTaskGateway<S, C>
where
    S: TaskSnapshotStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

fn gateway_error(err: TaskStoreError) -> TaskGatewayError {
    match err {
        TaskStoreError::NotFound(id) => TaskGatewayError::NotFound(id),
        other if other.kind() == ErrorKind::Storage => TaskGatewayError::unavailable(other),
        other => TaskGatewayError::Rejected(other.to_string()),
    }
}

#[async_trait]
impl<S, C> TaskGateway for InProcessTaskGateway<S, C>
where
    S: TaskSnapshotStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    async fn list_tasks(&self) -> TaskGatewayResult<Vec<Task>> {
        Ok(self.store.list_all().await)
    }

    async fn create_task(&self, draft: &TaskDraft) -> TaskGatewayResult<Task> {
        let request = CreateTaskRequest::new(draft.title().as_str())
            .with_description(draft.description())
            .with_status(draft.status().as_str());
        self.store.create(request).await.map_err(gateway_error)
    }

    async fn update_task(&self, id: TaskId, draft: &TaskDraft) -> TaskGatewayResult<Task> {
        let request = UpdateTaskRequest::new()
            .with_title(draft.title().as_str())
            .with_description(draft.description())
            .with_status(draft.status().as_str());
        self.store.update(id, request).await.map_err(gateway_error)
    }

    async fn delete_task(&self, id: TaskId) -> TaskGatewayResult<Task> {
        self.store.delete(id).await.map_err(gateway_error)
    }

    async fn transition_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> TaskGatewayResult<Task> {
        self.store
            .transition_status(TransitionTaskRequest::new(id, status.as_str()))
            .await
            .map_err(gateway_error)
    }
}
