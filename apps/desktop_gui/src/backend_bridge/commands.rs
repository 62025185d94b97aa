//! Backend commands queued from UI to backend worker.

use client_core::{PendingLoad, PendingMove, WinCheck};

#[derive(Debug)]
pub enum BackendCommand {
    Generate(PendingLoad),
    ValidateMove(PendingMove),
    CheckWin(WinCheck),
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Generate(_) => "generate",
            BackendCommand::ValidateMove(_) => "validate_move",
            BackendCommand::CheckWin(_) => "check_win",
        }
    }
}
