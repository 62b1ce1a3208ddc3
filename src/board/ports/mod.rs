//! Port contracts for reaching the task store from the board.

pub mod gateway;

pub use gateway::{TaskGateway, TaskGatewayError, TaskGatewayResult};
