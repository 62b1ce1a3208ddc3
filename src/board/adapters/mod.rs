//! Adapter implementations for the board's gateway port.

mod in_process;

pub use in_process::InProcessTaskGateway;
