//! UI/backend events and error modeling for desktop GUI controller.

use client_core::{PendingLoad, PendingMove, TransportError, WinCheck};
use shared::domain::BoardMatrix;

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    Error(UiError),
    PuzzleLoaded {
        load: PendingLoad,
        result: Result<BoardMatrix, TransportError>,
    },
    MoveValidated {
        pending: PendingMove,
        result: Result<bool, TransportError>,
    },
    WinChecked {
        check: WinCheck,
        result: Result<bool, TransportError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    NewPuzzle,
    ValidateMove,
    CheckWin,
    General,
}

impl UiErrorContext {
    fn label(self) -> &'static str {
        match self {
            UiErrorContext::BackendStartup => "startup",
            UiErrorContext::NewPuzzle => "new puzzle",
            UiErrorContext::ValidateMove => "move check",
            UiErrorContext::CheckWin => "win check",
            UiErrorContext::General => "backend",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("malformed")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("unavailable")
            || message_lower.contains("disconnect")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn from_transport(context: UiErrorContext, err: &TransportError) -> Self {
        let category = match err {
            TransportError::Request { .. } | TransportError::Unavailable(_) => {
                UiErrorCategory::Transport
            }
            TransportError::Status { status, .. } if *status >= 500 => UiErrorCategory::Transport,
            TransportError::Status { .. } | TransportError::Malformed { .. } => {
                UiErrorCategory::Validation
            }
        };
        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    /// Transport failures go away on their own; validation failures mean the
    /// service and client disagree about the protocol.
    pub fn is_retryable(&self) -> bool {
        self.category == UiErrorCategory::Transport
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn summary(&self) -> String {
        format!("{} failed: {}", self.context.label(), self.message)
    }
}
