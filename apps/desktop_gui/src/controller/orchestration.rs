//! Command orchestration helpers from UI actions to backend command queue.

use client_core::TransportError;
use crossbeam_channel::{Sender, TrySendError};

use crate::{backend_bridge::commands::BackendCommand, controller::events::UiEvent};

/// Queues `cmd` for the backend worker. A command that cannot be queued comes
/// back as the failure event the backend would have produced, so the session
/// never waits on a request that was never sent.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), UiEvent> {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(cmd)) => Err(undelivered(
            cmd,
            "UI command queue is full; please retry".to_string(),
        )),
        Err(TrySendError::Disconnected(cmd)) => Err(undelivered(
            cmd,
            "Backend command processor disconnected (possible startup/runtime failure)".to_string(),
        )),
    }
}

fn undelivered(cmd: BackendCommand, reason: String) -> UiEvent {
    tracing::warn!(command = cmd.name(), "{reason}");
    let err = TransportError::Unavailable(reason);
    match cmd {
        BackendCommand::Generate(load) => UiEvent::PuzzleLoaded {
            load,
            result: Err(err),
        },
        BackendCommand::ValidateMove(pending) => UiEvent::MoveValidated {
            pending,
            result: Err(err),
        },
        BackendCommand::CheckWin(check) => UiEvent::WinChecked {
            check,
            result: Err(err),
        },
    }
}
