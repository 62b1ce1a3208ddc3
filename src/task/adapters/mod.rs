//! Adapter implementations for task persistence ports.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileTaskSnapshotStore;
