//! The session context: one live board, one selection, the pencil-mode flag,
//! the status line and the clock, plus the split-phase move commitment
//! protocol that runs on top of them.
//!
//! Network work never happens in here. Operations that need the puzzle
//! service hand back a request value ([`PendingLoad`], [`PendingMove`],
//! [`WinCheck`]); the caller performs the call wherever it likes and feeds
//! the result into the matching `install_*` / `resolve_*` method. Results
//! are tagged with the board generation they were issued for, so anything
//! that comes back after a reload is dropped.

use std::fmt;

use shared::{
    domain::{BoardMatrix, Coord, Difficulty},
    error::GridError,
    protocol::{CheckWinRequest, GenerateRequest, ValidateMoveRequest},
};
use tracing::{debug, info, warn};

use crate::{
    error::TransportError,
    grid::{is_digit, Board},
    highlight::HighlightSet,
    selection::Selection,
    timer::{ClockReading, SessionTimer},
};

pub const ILLEGAL_MOVE_MESSAGE: &str = "Illegal move!";
pub const WIN_MESSAGE: &str = "You win!";
pub const SERVICE_FAILURE_MESSAGE: &str = "Could not reach the puzzle service, try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusMessage {
    #[default]
    None,
    IllegalMove,
    Win,
    ServiceFailure,
}

impl StatusMessage {
    pub fn text(self) -> &'static str {
        match self {
            StatusMessage::None => "",
            StatusMessage::IllegalMove => ILLEGAL_MOVE_MESSAGE,
            StatusMessage::Win => WIN_MESSAGE,
            StatusMessage::ServiceFailure => SERVICE_FAILURE_MESSAGE,
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Identifies one installed puzzle. Bumped on every install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLoad {
    pub ticket: LoadTicket,
    pub difficulty: Difficulty,
    pub request: GenerateRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMove {
    pub generation: Generation,
    pub coord: Coord,
    pub value: u8,
    pub request: ValidateMoveRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinCheck {
    pub generation: Generation,
    pub request: CheckWinRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredEntry {
    NotADigit,
    NoSelection,
    NotEditable,
    AwaitingValidation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryAction {
    Ignored(IgnoredEntry),
    MarkToggled {
        coord: Coord,
        digit: u8,
        present: bool,
    },
    /// Send `request` to the validator, then call
    /// [`GameSession::resolve_validation`].
    Validate(PendingMove),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Installed(Generation),
    Superseded,
    Failed(TransportError),
    Invalid(GridError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Committed; send the win check next.
    Accepted(WinCheck),
    Rejected,
    Failed(TransportError),
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WinOutcome {
    Won,
    NotYet,
    Failed(TransportError),
    Stale,
}

#[derive(Debug, Default)]
pub struct GameSession {
    board: Board,
    selection: Selection,
    highlights: HighlightSet,
    pencil_mode: bool,
    status: StatusMessage,
    timer: SessionTimer,
    generation: Generation,
    latest_ticket: u64,
    in_flight: Option<Coord>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> Option<Coord> {
        self.selection.current()
    }

    pub fn highlights(&self) -> &HighlightSet {
        &self.highlights
    }

    pub fn pencil_mode(&self) -> bool {
        self.pencil_mode
    }

    pub fn status(&self) -> StatusMessage {
        self.status
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    pub fn clock(&self) -> ClockReading {
        self.timer.reading()
    }

    /// The cell whose validation is still outstanding, if any.
    pub fn awaiting_validation(&self) -> Option<Coord> {
        self.in_flight
    }

    pub fn begin_load(&mut self, difficulty: Difficulty) -> PendingLoad {
        self.latest_ticket += 1;
        let request = GenerateRequest::for_difficulty(difficulty);
        debug!(
            ticket = self.latest_ticket,
            %difficulty,
            clue_budget = request.clue_budget,
            "puzzle load requested"
        );
        PendingLoad {
            ticket: LoadTicket(self.latest_ticket),
            difficulty,
            request,
        }
    }

    /// Installs a generated puzzle if `load` is still the newest request.
    pub fn install_puzzle(
        &mut self,
        load: &PendingLoad,
        result: Result<BoardMatrix, TransportError>,
    ) -> LoadOutcome {
        if load.ticket.0 != self.latest_ticket {
            debug!(ticket = load.ticket.0, "dropping superseded puzzle load");
            return LoadOutcome::Superseded;
        }

        let matrix = match result {
            Ok(matrix) => matrix,
            Err(err) => {
                warn!("puzzle load failed: {err}");
                self.status = StatusMessage::ServiceFailure;
                return LoadOutcome::Failed(err);
            }
        };

        if let Err(err) = self.board.load(&matrix) {
            warn!("puzzle service sent an unusable board: {err}");
            self.status = StatusMessage::ServiceFailure;
            return LoadOutcome::Invalid(err);
        }

        self.generation = Generation(self.generation.0 + 1);
        self.selection.deselect();
        self.highlights.clear();
        self.in_flight = None;
        self.status = StatusMessage::None;
        self.timer.start();
        info!(
            generation = self.generation.0,
            difficulty = %load.difficulty,
            "puzzle installed"
        );
        LoadOutcome::Installed(self.generation)
    }

    pub fn select(&mut self, coord: Coord) -> Result<(), GridError> {
        self.selection.select(coord)?;
        self.refresh_highlights();
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selection.deselect();
        self.highlights.clear();
    }

    pub fn toggle_pencil_mode(&mut self) -> bool {
        self.pencil_mode = !self.pencil_mode;
        debug!(pencil_mode = self.pencil_mode, "pencil mode toggled");
        self.pencil_mode
    }

    pub fn set_pencil_mode(&mut self, enabled: bool) {
        self.pencil_mode = enabled;
    }

    /// First phase of a move: toggles a pencil mark locally, or prepares the
    /// validation request for a committed value.
    pub fn enter_digit(&mut self, digit: u8) -> EntryAction {
        if !is_digit(digit) {
            return EntryAction::Ignored(IgnoredEntry::NotADigit);
        }
        let Some(coord) = self.selection.current() else {
            return EntryAction::Ignored(IgnoredEntry::NoSelection);
        };
        let Ok(cell) = self.board.get(coord) else {
            return EntryAction::Ignored(IgnoredEntry::NoSelection);
        };
        if cell.is_predefined() {
            return EntryAction::Ignored(IgnoredEntry::NotEditable);
        }

        if self.pencil_mode {
            return match self.board.toggle_mark(coord, digit) {
                Ok(present) => EntryAction::MarkToggled {
                    coord,
                    digit,
                    present,
                },
                Err(err) => {
                    debug!("pencil mark refused: {err}");
                    EntryAction::Ignored(IgnoredEntry::NotEditable)
                }
            };
        }

        if let Some(pending) = self.in_flight {
            debug!(%pending, "validation already in flight");
            return EntryAction::Ignored(IgnoredEntry::AwaitingValidation);
        }

        self.in_flight = Some(coord);
        EntryAction::Validate(PendingMove {
            generation: self.generation,
            coord,
            value: digit,
            request: ValidateMoveRequest::new(self.board.matrix(), coord, digit),
        })
    }

    /// Second phase of a move: applies the validator's verdict.
    pub fn resolve_validation(
        &mut self,
        pending: &PendingMove,
        result: Result<bool, TransportError>,
    ) -> MoveOutcome {
        if pending.generation != self.generation {
            debug!(
                issued = pending.generation.0,
                live = self.generation.0,
                "dropping stale validation response"
            );
            return MoveOutcome::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(true) => self.commit(pending),
            Ok(false) => {
                debug!(coord = %pending.coord, value = pending.value, "move rejected");
                self.status = StatusMessage::IllegalMove;
                MoveOutcome::Rejected
            }
            Err(err) => {
                warn!("move validation failed: {err}");
                self.status = StatusMessage::ServiceFailure;
                MoveOutcome::Failed(err)
            }
        }
    }

    fn commit(&mut self, pending: &PendingMove) -> MoveOutcome {
        if let Err(err) = self.board.set_value(pending.coord, pending.value) {
            warn!("accepted move no longer applies: {err}");
            return MoveOutcome::Stale;
        }
        if let Ok(removed) = self
            .board
            .remove_mark_from_peers(pending.coord, pending.value)
        {
            debug!(removed, "cleared committed digit from peer marks");
        }

        if self.selection.is_selected(pending.coord) {
            self.deselect();
        } else {
            self.refresh_highlights();
        }
        self.status = StatusMessage::None;
        debug!(coord = %pending.coord, value = pending.value, "move committed");

        MoveOutcome::Accepted(WinCheck {
            generation: self.generation,
            request: CheckWinRequest {
                board: self.board.matrix(),
            },
        })
    }

    pub fn resolve_win_check(
        &mut self,
        check: &WinCheck,
        result: Result<bool, TransportError>,
    ) -> WinOutcome {
        if check.generation != self.generation {
            debug!(issued = check.generation.0, "dropping stale win check");
            return WinOutcome::Stale;
        }

        match result {
            Ok(true) => {
                self.timer.stop();
                self.status = StatusMessage::Win;
                info!(elapsed = %self.timer.reading(), "puzzle solved");
                WinOutcome::Won
            }
            Ok(false) => WinOutcome::NotYet,
            Err(err) => {
                warn!("win check failed: {err}");
                self.status = StatusMessage::ServiceFailure;
                WinOutcome::Failed(err)
            }
        }
    }

    /// Clears the selected cell's value and marks. Predefined cells and an
    /// empty selection are left alone.
    pub fn clear_selected(&mut self) -> bool {
        let Some(coord) = self.selection.current() else {
            return false;
        };
        match self.board.clear_value(coord) {
            Ok(()) => {
                self.deselect();
                true
            }
            Err(err) => {
                debug!("clear refused: {err}");
                false
            }
        }
    }

    fn refresh_highlights(&mut self) {
        self.highlights = HighlightSet::derive(&self.board, self.selection.current());
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
