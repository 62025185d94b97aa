use serde::{Deserialize, Serialize};

use crate::domain::{BoardMatrix, Coord, Difficulty, BOARD_SIZE};

pub fn generate_route() -> &'static str {
    "/sudoku"
}

pub fn validate_move_route() -> &'static str {
    "/isSafe"
}

pub fn check_win_route() -> &'static str {
    "/isWin"
}

/// Query string of the generate call: `/sudoku?N=9&K=50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(rename = "N")]
    pub size: usize,
    #[serde(rename = "K")]
    pub clue_budget: u32,
}

impl GenerateRequest {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            size: BOARD_SIZE,
            clue_budget: difficulty.clue_budget(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateMoveRequest {
    pub board: BoardMatrix,
    pub row: usize,
    pub col: usize,
    pub value: u8,
}

impl ValidateMoveRequest {
    pub fn new(board: BoardMatrix, coord: Coord, value: u8) -> Self {
        Self {
            board,
            row: coord.row,
            col: coord.col,
            value,
        }
    }

    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckWinRequest {
    pub board: BoardMatrix,
}
