//! Application services for the authoritative task store.

mod seed;
mod store;

pub use seed::example_tasks;
pub use store::{
    CreateTaskRequest, ErrorKind, SeedPolicy, TaskStore, TaskStoreError, TaskStoreResult,
    TransitionTaskRequest, UpdateTaskRequest,
};
