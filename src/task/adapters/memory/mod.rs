//! In-memory adapters for task persistence.

mod snapshot;

pub use snapshot::InMemoryTaskSnapshotStore;
