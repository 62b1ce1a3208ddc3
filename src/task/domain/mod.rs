//! Domain model for tasks and their workflow status.
//!
//! The task domain models title validation, the closed set of statuses, and
//! timestamp bookkeeping while keeping all persistence concerns outside of
//! the domain boundary.

mod error;
mod ids;
mod status;
mod task;

pub use error::{ParseTaskIdError, ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use status::TaskStatus;
pub use task::{Task, TaskPatch};
