//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("title is required")]
    EmptyTitle,
}

/// Error returned while parsing a task status token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a task identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed task identifier: {0}")]
pub struct ParseTaskIdError(pub String);
