//! Highlight Engine. Everything here is a pure function of the board and the
//! current selection.

use std::collections::BTreeSet;

use shared::domain::{Coord, BOARD_SIZE, BOX_SIZE};

use crate::grid::Board;

/// Row, column and 3x3 block of `coord`, the cell itself included.
pub fn peers(coord: Coord) -> BTreeSet<Coord> {
    let mut out = BTreeSet::new();
    for i in 0..BOARD_SIZE {
        out.insert(Coord::new(coord.row, i));
        out.insert(Coord::new(i, coord.col));
    }
    let origin = coord.block_origin();
    for row in origin.row..origin.row + BOX_SIZE {
        for col in origin.col..origin.col + BOX_SIZE {
            out.insert(Coord::new(row, col));
        }
    }
    out
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
    cells: BTreeSet<Coord>,
}

impl HighlightSet {
    /// Peers of the selected cell, plus the peers of every cell sharing its
    /// committed value. Blank or pencil-marked selections only get their own
    /// peers.
    pub fn derive(board: &Board, selection: Option<Coord>) -> Self {
        let Some(selected) = selection else {
            return Self::default();
        };
        let Ok(reference) = board.get(selected) else {
            return Self::default();
        };

        let mut cells = peers(selected);
        if reference.has_value() {
            let value = reference.value();
            for cell in board.cells().filter(|cell| cell.value() == value) {
                cells.extend(peers(cell.coord()));
            }
        }
        Self { cells }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }
}

#[cfg(test)]
#[path = "tests/highlight_tests.rs"]
mod tests;
