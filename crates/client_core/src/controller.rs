use std::sync::Arc;

use shared::domain::{Coord, Difficulty};
use tracing::debug;

use crate::{
    error::TransportError,
    input::GameKey,
    service::PuzzleService,
    session::{
        EntryAction, GameSession, IgnoredEntry, LoadOutcome, MoveOutcome, PendingMove, WinOutcome,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveReport {
    Ignored(IgnoredEntry),
    MarkToggled {
        coord: Coord,
        digit: u8,
        present: bool,
    },
    Rejected,
    Failed(TransportError),
    Stale,
    Committed(WinOutcome),
}

/// Drives a [`GameSession`] against a puzzle service with plain sequential
/// awaits. Suitable whenever the caller can hold the session across the
/// service round-trips.
pub struct GameController {
    service: Arc<dyn PuzzleService>,
    session: GameSession,
}

impl GameController {
    pub fn new(service: Arc<dyn PuzzleService>) -> Self {
        Self {
            service,
            session: GameSession::new(),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub async fn new_puzzle(&mut self, difficulty: Difficulty) -> LoadOutcome {
        let load = self.session.begin_load(difficulty);
        let result = self.service.generate(load.request).await;
        self.session.install_puzzle(&load, result)
    }

    pub async fn enter_digit(&mut self, digit: u8) -> MoveReport {
        match self.session.enter_digit(digit) {
            EntryAction::Ignored(reason) => MoveReport::Ignored(reason),
            EntryAction::MarkToggled {
                coord,
                digit,
                present,
            } => MoveReport::MarkToggled {
                coord,
                digit,
                present,
            },
            EntryAction::Validate(pending) => self.validate(pending).await,
        }
    }

    pub async fn handle_key(&mut self, key: GameKey) -> Option<MoveReport> {
        match key {
            GameKey::Digit(digit) => Some(self.enter_digit(digit).await),
            other => {
                let effect = self.session.handle_key(other);
                debug!(?effect, "key handled locally");
                None
            }
        }
    }

    async fn validate(&mut self, pending: PendingMove) -> MoveReport {
        let verdict = self.service.validate_move(&pending.request).await;
        match self.session.resolve_validation(&pending, verdict) {
            MoveOutcome::Accepted(check) => {
                let result = self.service.check_win(&check.request).await;
                MoveReport::Committed(self.session.resolve_win_check(&check, result))
            }
            MoveOutcome::Rejected => MoveReport::Rejected,
            MoveOutcome::Failed(err) => MoveReport::Failed(err),
            MoveOutcome::Stale => MoveReport::Stale,
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
