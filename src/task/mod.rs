//! Task storage and status transitions for Taskboard.
//!
//! This module owns the authoritative task collection: creating, updating,
//! deleting, and transitioning tasks between the three workflow statuses,
//! and writing the whole collection to durable storage after every
//! mutation. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
