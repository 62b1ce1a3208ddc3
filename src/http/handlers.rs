//! HTTP handlers for the task routes.

use super::{
    dto::{CreateTaskBody, StatusBody, UpdateTaskBody},
    error::ApiError,
};
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskSnapshotStore,
    services::{CreateTaskRequest, TaskStore, TransitionTaskRequest, UpdateTaskRequest},
};
use axum::{
    Json,
    extract::{FromRequest, Path, Request, State, rejection::JsonRejection},
    http::StatusCode,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::info;

/// Shared handler dependencies.
pub struct AppState<S, C>
where
    S: TaskSnapshotStore,
    C: Clock + Send + Sync,
{
    store: Arc<TaskStore<S, C>>,
}

impl<S, C> AppState<S, C>
where
    S: TaskSnapshotStore,
    C: Clock + Send + Sync,
{
    /// Creates handler state over `store`.
    #[must_use]
    pub const fn new(store: Arc<TaskStore<S, C>>) -> Self {
        Self { store }
    }
}

impl<S, C> Clone for AppState<S, C>
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

/// JSON body extractor whose rejections use the `{"error": ...}` shape.
pub(super) struct ApiJson<T>(T);

impl<St, T> FromRequest<St> for ApiJson<T>
where
    Json<T>: FromRequest<St, Rejection = JsonRejection>,
    St: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &St) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    TaskId::parse(raw).map_err(|_| ApiError::task_not_found(raw))
}

/// `GET /tasks`
pub(super) async fn list_tasks<S, C>(State(state): State<AppState<S, C>>) -> Json<Vec<Task>>
where
    S: TaskSnapshotStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = state.store.list_all().await;
    info!(count = tasks.len(), "GET /tasks");
    Json(tasks)
}

/// `POST /tasks`
pub(super) async fn create_task<S, C>(
    State(state): State<AppState<S, C>>,
    ApiJson(body): ApiJson<CreateTaskBody>,
) -> Result<(StatusCode, Json<Task>), ApiError>
where
    S: TaskSnapshotStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let CreateTaskBody {
        title,
        description,
        status,
    } = body;
    info!(title = title.as_deref().unwrap_or_default(), "POST /tasks");

    let mut request = CreateTaskRequest::new(title.unwrap_or_default());
    if let Some(text) = description {
        request = request.with_description(text);
    }
    if let Some(token) = status {
        request = request.with_status(token);
    }

    let task = state.store.create(request).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /tasks/{id}`
pub(super) async fn update_task<S, C>(
    State(state): State<AppState<S, C>>,
    Path(raw_id): Path<String>,
    ApiJson(body): ApiJson<UpdateTaskBody>,
) -> Result<Json<Task>, ApiError>
where
    S: TaskSnapshotStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    info!(task_id = %raw_id, "PUT /tasks/{{id}}");
    let id = parse_task_id(&raw_id)?;

    let UpdateTaskBody {
        title,
        description,
        status,
    } = body;
    let mut request = UpdateTaskRequest::new();
    if let Some(text) = title {
        request = request.with_title(text);
    }
    if let Some(text) = description {
        request = request.with_description(text);
    }
    if let Some(token) = status {
        request = request.with_status(token);
    }

    let task = state.store.update(id, request).await?;
    Ok(Json(task))
}

/// `DELETE /tasks/{id}`
pub(super) async fn delete_task<S, C>(
    State(state): State<AppState<S, C>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Task>, ApiError>
where
    S: TaskSnapshotStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    info!(task_id = %raw_id, "DELETE /tasks/{{id}}");
    let id = parse_task_id(&raw_id)?;
    let task = state.store.delete(id).await?;
    Ok(Json(task))
}

/// `PATCH /tasks/{id}/status`
pub(super) async fn transition_task_status<S, C>(
    State(state): State<AppState<S, C>>,
    Path(raw_id): Path<String>,
    ApiJson(body): ApiJson<StatusBody>,
) -> Result<Json<Task>, ApiError>
where
    S: TaskSnapshotStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let status = body.status.unwrap_or_default();
    info!(task_id = %raw_id, status = %status, "PATCH /tasks/{{id}}/status");
    let id = parse_task_id(&raw_id)?;
    let task = state
        .store
        .transition_status(TransitionTaskRequest::new(id, status))
        .await?;
    Ok(Json(task))
}
