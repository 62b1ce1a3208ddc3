//! Client-side board projection of the task store.
//!
//! The board keeps a non-authoritative cache of every task, partitions it
//! into the `todo`, `inProgress`, and `done` columns, and reconciles the
//! cache with the store's returned record after each confirmed action.
//! Nothing in the cache changes until the store has answered. The module
//! follows the same hexagonal layout as [`crate::task`]:
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
