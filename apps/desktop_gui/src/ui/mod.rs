//! UI layer for the desktop GUI: app shell and the board widget.

pub mod app;
pub mod board;

pub use app::SudokuApp;
