use std::time::Duration;

use client_core::{
    config::Settings, EntryAction, GameKey, GameSession, KeyEffect, LoadOutcome, MoveOutcome,
    WinOutcome,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::Difficulty;

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::{UiError, UiErrorContext, UiEvent},
        orchestration::dispatch_backend_command,
    },
    ui::board::show_board,
};

pub struct SudokuApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    session: GameSession,
    difficulty: Difficulty,
    server_url: String,
    notice: String,
    last_error: Option<UiError>,
    shift_down: bool,
}

impl SudokuApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>, settings: &Settings) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            session: GameSession::new(),
            difficulty: settings.default_difficulty,
            server_url: settings.server_url.clone(),
            notice: "Backend worker starting...".to_string(),
            last_error: None,
            shift_down: false,
        };
        app.start_new_game();
        app
    }

    fn start_new_game(&mut self) {
        let load = self.session.begin_load(self.difficulty);
        self.notice = format!("Loading a {} puzzle...", load.difficulty);
        self.queue(BackendCommand::Generate(load));
    }

    fn queue(&mut self, cmd: BackendCommand) {
        if let Err(failed) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.apply_event(failed);
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => self.notice = message,
            UiEvent::Error(err) => self.record_error(err),
            UiEvent::PuzzleLoaded { load, result } => {
                match self.session.install_puzzle(&load, result) {
                    LoadOutcome::Installed(_) => {
                        self.last_error = None;
                        self.notice = format!("{} puzzle ready", load.difficulty);
                    }
                    LoadOutcome::Superseded => {}
                    LoadOutcome::Failed(err) => {
                        self.record_error(UiError::from_transport(UiErrorContext::NewPuzzle, &err))
                    }
                    LoadOutcome::Invalid(err) => self.record_error(UiError::from_message(
                        UiErrorContext::NewPuzzle,
                        format!("invalid board from service: {err}"),
                    )),
                }
            }
            UiEvent::MoveValidated { pending, result } => {
                match self.session.resolve_validation(&pending, result) {
                    MoveOutcome::Accepted(check) => {
                        self.last_error = None;
                        self.queue(BackendCommand::CheckWin(check));
                    }
                    MoveOutcome::Failed(err) => self.record_error(UiError::from_transport(
                        UiErrorContext::ValidateMove,
                        &err,
                    )),
                    MoveOutcome::Rejected => self.last_error = None,
                    MoveOutcome::Stale => {}
                }
            }
            UiEvent::WinChecked { check, result } => {
                match self.session.resolve_win_check(&check, result) {
                    WinOutcome::Won => self.notice = format!("Solved in {}", self.session.clock()),
                    WinOutcome::Failed(err) => self.record_error(UiError::from_transport(
                        UiErrorContext::CheckWin,
                        &err,
                    )),
                    WinOutcome::NotYet | WinOutcome::Stale => {}
                }
            }
        }
    }

    fn record_error(&mut self, err: UiError) {
        tracing::warn!(context = ?err.context(), category = ?err.category(), "{}", err.message());
        self.last_error = Some(err);
    }

    fn apply_key(&mut self, key: GameKey) {
        match self.session.handle_key(key) {
            KeyEffect::Entry(EntryAction::Validate(pending)) => {
                self.queue(BackendCommand::ValidateMove(pending))
            }
            KeyEffect::Entry(EntryAction::MarkToggled { .. }) => self.last_error = None,
            effect => tracing::debug!(?effect, "key handled locally"),
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let (shift, keys) = ctx.input(|i| {
            let keys: Vec<GameKey> = i
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } => Some(GameKey::from_name(key.name())),
                    _ => None,
                })
                .collect();
            (i.modifiers.shift, keys)
        });

        // Shift is a modifier in egui, so toggle on its rising edge.
        if shift && !self.shift_down {
            self.apply_key(GameKey::Shift);
        }
        self.shift_down = shift;

        for key in keys {
            self.apply_key(key);
        }
    }

    fn show_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_salt("difficulty")
                .selected_text(self.difficulty.label())
                .show_ui(ui, |ui| {
                    for difficulty in Difficulty::ALL {
                        ui.selectable_value(&mut self.difficulty, difficulty, difficulty.label());
                    }
                });
            if ui.button("New game").clicked() {
                self.start_new_game();
            }

            let pencil = self.session.pencil_mode();
            if ui
                .selectable_label(pencil, "✏ Pencil")
                .on_hover_text("Shift toggles pencil mode")
                .clicked()
            {
                self.session.set_pencil_mode(!pencil);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.monospace(self.session.clock().to_string());
            });
        });
    }

    fn show_status(&self, ui: &mut egui::Ui) {
        let status = self.session.status();
        ui.horizontal(|ui| {
            ui.strong(status.text());
            if let Some(err) = &self.last_error {
                let text = if err.is_retryable() {
                    format!("{} (retry)", err.summary())
                } else {
                    err.summary()
                };
                ui.small(text).on_hover_text(&self.server_url);
            }
        });
        ui.weak(&self.notice);
    }
}

impl eframe::App for SudokuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.handle_keyboard(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.show_toolbar(ui));
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| self.show_status(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                if let Some(coord) = show_board(ui, &self.session) {
                    if let Err(err) = self.session.select(coord) {
                        tracing::debug!("selection refused: {err}");
                    }
                }
            });
        });

        // Backend results and the clock are both polled.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::{StatusMessage, TransportError};
    use crossbeam_channel::bounded;
    use shared::domain::{Coord, EMPTY_MATRIX};

    fn app_with_puzzle() -> (SudokuApp, Receiver<BackendCommand>) {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (_ui_tx, ui_rx) = bounded(8);
        let mut app = SudokuApp::new(cmd_tx, ui_rx, &Settings::default());
        let Ok(BackendCommand::Generate(load)) = cmd_rx.try_recv() else {
            panic!("startup should request a puzzle");
        };
        app.apply_event(UiEvent::PuzzleLoaded {
            load,
            result: Ok(EMPTY_MATRIX),
        });
        app.session.select(Coord::new(0, 0)).expect("select");
        (app, cmd_rx)
    }

    fn answer_next_move(
        app: &mut SudokuApp,
        cmd_rx: &Receiver<BackendCommand>,
        result: Result<bool, TransportError>,
    ) {
        app.apply_key(GameKey::Digit(5));
        let Ok(BackendCommand::ValidateMove(pending)) = cmd_rx.try_recv() else {
            panic!("digit should be sent for validation");
        };
        app.apply_event(UiEvent::MoveValidated { pending, result });
    }

    #[test]
    fn rejection_replaces_an_earlier_transport_error() {
        let (mut app, cmd_rx) = app_with_puzzle();
        answer_next_move(
            &mut app,
            &cmd_rx,
            Err(TransportError::Unavailable("offline".into())),
        );
        assert!(app.last_error.is_some());
        assert_eq!(app.session.status(), StatusMessage::ServiceFailure);

        answer_next_move(&mut app, &cmd_rx, Ok(false));
        assert!(app.last_error.is_none());
        assert_eq!(app.session.status(), StatusMessage::IllegalMove);
    }

    #[test]
    fn toggling_a_mark_clears_a_stale_error() {
        let (mut app, cmd_rx) = app_with_puzzle();
        answer_next_move(
            &mut app,
            &cmd_rx,
            Err(TransportError::Unavailable("offline".into())),
        );
        app.apply_key(GameKey::Shift);
        app.apply_key(GameKey::Digit(3));
        assert!(app.last_error.is_none());
        assert!(cmd_rx.try_recv().is_err());
    }
}
