//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::PuzzleService;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(
    service: Arc<dyn PuzzleService>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));
            while let Ok(cmd) = cmd_rx.recv() {
                tracing::debug!(command = cmd.name(), "backend picked up command");
                tokio::spawn(run_command(service.clone(), cmd, ui_tx.clone()));
            }
            tracing::info!("ui command queue closed; backend worker exiting");
        });
    });
}

async fn run_command(service: Arc<dyn PuzzleService>, cmd: BackendCommand, ui_tx: Sender<UiEvent>) {
    let event = execute(service.as_ref(), cmd).await;

    // Results must reach the session; a dropped validation would leave it
    // waiting forever. The UI drains the queue every frame, so block for room.
    let delivered = tokio::task::spawn_blocking(move || ui_tx.send(event).is_ok()).await;
    if !matches!(delivered, Ok(true)) {
        tracing::debug!("ui closed; dropping result");
    }
}

async fn execute(service: &dyn PuzzleService, cmd: BackendCommand) -> UiEvent {
    match cmd {
        BackendCommand::Generate(load) => {
            let result = service.generate(load.request).await;
            UiEvent::PuzzleLoaded { load, result }
        }
        BackendCommand::ValidateMove(pending) => {
            let result = service.validate_move(&pending.request).await;
            UiEvent::MoveValidated { pending, result }
        }
        BackendCommand::CheckWin(check) => {
            let result = service.check_win(&check.request).await;
            UiEvent::WinChecked { check, result }
        }
    }
}
