//! Client-side state machine for an interactive Sudoku grid.
//!
//! The board, selection, pencil marks and highlights live in a
//! [`GameSession`]. Every committed value goes through a remote
//! [`PuzzleService`] first; see [`session`] for the split-phase protocol and
//! [`GameController`] for the awaited composition of it.

pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod highlight;
pub mod input;
pub mod selection;
pub mod service;
pub mod session;
pub mod timer;

pub use controller::{GameController, MoveReport};
pub use error::{ClientError, TransportError};
pub use grid::{Board, Cell, CellOrigin, MarkSet};
pub use highlight::{peers, HighlightSet};
pub use input::{GameKey, KeyEffect};
pub use selection::Selection;
pub use service::{HttpPuzzleService, PuzzleService, UnavailablePuzzleService};
pub use session::{
    EntryAction, GameSession, Generation, IgnoredEntry, LoadOutcome, LoadTicket, MoveOutcome,
    PendingLoad, PendingMove, StatusMessage, WinCheck, WinOutcome,
};
pub use timer::{ClockReading, SessionTimer};
