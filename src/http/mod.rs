//! JSON-over-HTTP surface for the task store.
//!
//! Routes are served at the root and again under `/api`:
//!
//! | Method   | Path                 | Success | Failures      |
//! |----------|----------------------|---------|---------------|
//! | `GET`    | `/tasks`             | 200     | 500           |
//! | `POST`   | `/tasks`             | 201     | 400, 500      |
//! | `PUT`    | `/tasks/{id}`        | 200     | 400, 404, 500 |
//! | `DELETE` | `/tasks/{id}`        | 200     | 404, 500      |
//! | `PATCH`  | `/tasks/{id}/status` | 200     | 400, 404, 500 |
//!
//! Failures carry an `{"error": "..."}` body.

mod dto;
mod error;
mod handlers;

pub use dto::{CreateTaskBody, StatusBody, UpdateTaskBody};
pub use error::{ApiError, ErrorBody};
pub use handlers::AppState;

use crate::task::{ports::TaskSnapshotStore, services::TaskStore};
use axum::{
    Router,
    http::{HeaderValue, header},
    routing::{get, patch, put},
};
use mockable::Clock;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer};

/// Content security policy applied to every response.
pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; script-src 'self' 'unsafe-inline' 'unsafe-eval'; style-src 'self' 'unsafe-inline'; img-src 'self' data: https:; font-src 'self' data:;";

fn task_routes<S, C>() -> Router<AppState<S, C>>
where
    S: TaskSnapshotStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/tasks",
            get(handlers::list_tasks::<S, C>).post(handlers::create_task::<S, C>),
        )
        .route(
            "/tasks/{id}",
            put(handlers::update_task::<S, C>).delete(handlers::delete_task::<S, C>),
        )
        .route(
            "/tasks/{id}/status",
            patch(handlers::transition_task_status::<S, C>),
        )
}

/// Builds the application router over `store`.
pub fn router<S, C>(store: Arc<TaskStore<S, C>>) -> Router
where
    S: TaskSnapshotStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .merge(task_routes::<S, C>())
        .nest("/api", task_routes::<S, C>())
        .layer(CorsLayer::permissive())
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CONTENT_SECURITY_POLICY),
        ))
        .with_state(AppState::new(store))
}
