//! Taskboard: a small task-tracking service with a three-column board.
//!
//! This crate provides the authoritative task store, its durable JSON
//! persistence, the HTTP surface exposing it, and the client-side board
//! projector that mirrors the store into `todo`, `inProgress`, and `done`
//! columns.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (files, HTTP, etc.)
//!
//! # Modules
//!
//! - [`task`]: Task records, status transitions, and the persisted store
//! - [`board`]: Client-side cache, column partitioning, and reconciliation
//! - [`http`]: JSON-over-HTTP routes for the task store
//! - [`config`]: Server configuration from flags and environment
//! - [`telemetry`]: Tracing subscriber installation

pub mod board;
pub mod config;
pub mod http;
pub mod task;
pub mod telemetry;
