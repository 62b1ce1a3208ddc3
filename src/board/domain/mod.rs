//! Domain model for the board view.
//!
//! Column partitioning, drag-and-drop move events, the task form draft, and
//! the board state machine live here, free of any transport concerns.

mod celebration;
mod columns;
mod draft;
mod drag;
mod state;

pub use celebration::{CELEBRATION_MILLIS, Celebration};
pub use columns::{BoardColumns, column_title};
pub use draft::TaskDraft;
pub use drag::{MoveEvent, MoveOutcome};
pub use state::{ActionState, BoardAction, BoardState, FailureKind, FormState, Resolution};
