use std::sync::Arc;

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::{
    config::{load_settings, Settings},
    HttpPuzzleService, PuzzleService, UnavailablePuzzleService,
};
use crossbeam_channel::bounded;
use eframe::egui;
use shared::domain::Difficulty;

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::events::{UiError, UiErrorContext, UiEvent},
    ui::SudokuApp,
};

#[derive(Parser, Debug)]
struct Args {
    /// Overrides `server_url` from sudoku.toml / APP__SERVER_URL.
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long)]
    difficulty: Option<Difficulty>,
}

fn resolve_settings(args: Args) -> Settings {
    let mut settings = load_settings();
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    if let Some(difficulty) = args.difficulty {
        settings.default_difficulty = difficulty;
    }
    settings
}

fn build_service(settings: &Settings) -> (Arc<dyn PuzzleService>, Option<UiError>) {
    match HttpPuzzleService::from_settings(settings) {
        Ok(service) => {
            tracing::info!(server_url = %service.base_url(), "using puzzle service");
            (Arc::new(service), None)
        }
        Err(err) => {
            tracing::error!("puzzle service unavailable: {err}");
            let ui_error = UiError::from_transport(UiErrorContext::BackendStartup, &err);
            (
                Arc::new(UnavailablePuzzleService::new(err.to_string())),
                Some(ui_error),
            )
        }
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let settings = resolve_settings(Args::parse());
    let (service, startup_error) = build_service(&settings);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    if let Some(err) = startup_error {
        let _ = ui_tx.try_send(UiEvent::Error(err));
    }
    backend_bridge::runtime::launch(service, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sudoku")
            .with_inner_size([560.0, 680.0])
            .with_min_inner_size([420.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Sudoku",
        options,
        Box::new(move |_cc| Ok(Box::new(SudokuApp::new(cmd_tx, ui_rx, &settings)))),
    )
}
