//! Application services driving the board against the task store.

mod projector;

pub use projector::{BoardError, BoardProjector, BoardResult};
