//! Step definitions for task store behaviour scenarios.

mod given;
mod then;
mod when;
pub mod world;
