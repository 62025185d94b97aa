use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell {0} is outside the 9x9 board")]
    OutOfBounds(Coord),
    #[error("cell {0} does not accept this change")]
    InvalidCell(Coord),
    #[error("digit {value} at {coord} is outside 0..=9")]
    InvalidDigit { coord: Coord, value: u8 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    BadRequest,
    Unavailable,
    Internal,
}

/// Error body a puzzle service may return alongside a non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
