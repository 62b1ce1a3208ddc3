//! Unit tests for the task store bounded context.
