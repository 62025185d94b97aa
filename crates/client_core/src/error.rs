use shared::error::GridError;
use thiserror::Error;

/// A validate, win-check or generate call that produced no usable answer.
/// Never commits state; the user simply retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request to {route} failed: {message}")]
    Request { route: &'static str, message: String },
    #[error("{route} answered with status {status}: {message}")]
    Status {
        route: &'static str,
        status: u16,
        message: String,
    },
    #[error("{route} answered with a malformed body: {message}")]
    Malformed { route: &'static str, message: String },
    #[error("puzzle service unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
