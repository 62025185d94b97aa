//! Backend worker: owns the tokio runtime and the puzzle service.

pub mod commands;
pub mod runtime;
