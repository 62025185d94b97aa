//! Grid State Model: the live 9x9 board and its per-cell annotation sets.
//!
//! A cell is blank, holds a committed value, or holds pencil marks, never two
//! of those at once. Every mutation path below keeps that invariant.

use std::array;

use shared::{
    domain::{BoardMatrix, Coord, BOARD_SIZE},
    error::GridError,
};

use crate::highlight::peers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellOrigin {
    /// Given by the puzzle; immutable for the rest of the session.
    Predefined,
    #[default]
    Empty,
}

/// Candidate digits 1..=9 packed into bits 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkSet(u16);

impl MarkSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn contains(self, digit: u8) -> bool {
        is_digit(digit) && self.0 & (1 << digit) != 0
    }

    /// Flips membership of `digit` and returns whether it is now present.
    pub fn toggle(&mut self, digit: u8) -> bool {
        if !is_digit(digit) {
            return false;
        }
        self.0 ^= 1 << digit;
        self.contains(digit)
    }

    pub fn remove(&mut self, digit: u8) -> bool {
        let present = self.contains(digit);
        if present {
            self.0 &= !(1 << digit);
        }
        present
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=9u8).filter(move |digit| self.contains(*digit))
    }
}

pub(crate) fn is_digit(value: u8) -> bool {
    (1..=9).contains(&value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    row: usize,
    col: usize,
    value: u8,
    origin: CellOrigin,
    marks: MarkSet,
}

impl Cell {
    fn new(coord: Coord, value: u8) -> Self {
        Self {
            row: coord.row,
            col: coord.col,
            value,
            origin: if value == 0 {
                CellOrigin::Empty
            } else {
                CellOrigin::Predefined
            },
            marks: MarkSet::empty(),
        }
    }

    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    /// Committed value, 0 when blank.
    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn origin(&self) -> CellOrigin {
        self.origin
    }

    pub fn marks(&self) -> MarkSet {
        self.marks
    }

    pub fn is_predefined(&self) -> bool {
        self.origin == CellOrigin::Predefined
    }

    pub fn has_value(&self) -> bool {
        self.value != 0
    }

    pub fn has_marks(&self) -> bool {
        !self.marks.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: array::from_fn(|row| array::from_fn(|col| Cell::new(Coord::new(row, col), 0))),
        }
    }
}

impl Board {
    pub fn from_matrix(matrix: &BoardMatrix) -> Result<Self, GridError> {
        for coord in Coord::all() {
            let value = matrix[coord.row][coord.col];
            if value > 9 {
                return Err(GridError::InvalidDigit { coord, value });
            }
        }

        Ok(Self {
            cells: array::from_fn(|row| {
                array::from_fn(|col| Cell::new(Coord::new(row, col), matrix[row][col]))
            }),
        })
    }

    /// Replaces the whole board. On error the previous board is kept.
    pub fn load(&mut self, matrix: &BoardMatrix) -> Result<(), GridError> {
        *self = Self::from_matrix(matrix)?;
        Ok(())
    }

    pub fn get(&self, coord: Coord) -> Result<&Cell, GridError> {
        if !coord.in_bounds() {
            return Err(GridError::OutOfBounds(coord));
        }
        Ok(&self.cells[coord.row][coord.col])
    }

    fn writable_mut(&mut self, coord: Coord) -> Result<&mut Cell, GridError> {
        if !coord.in_bounds() {
            return Err(GridError::OutOfBounds(coord));
        }
        let cell = &mut self.cells[coord.row][coord.col];
        if cell.is_predefined() {
            return Err(GridError::InvalidCell(coord));
        }
        Ok(cell)
    }

    pub fn set_value(&mut self, coord: Coord, value: u8) -> Result<(), GridError> {
        if !is_digit(value) {
            return Err(GridError::InvalidDigit { coord, value });
        }
        let cell = self.writable_mut(coord)?;
        cell.value = value;
        cell.marks.clear();
        Ok(())
    }

    pub fn clear_value(&mut self, coord: Coord) -> Result<(), GridError> {
        let cell = self.writable_mut(coord)?;
        cell.value = 0;
        cell.marks.clear();
        Ok(())
    }

    /// Flips a pencil mark on a blank cell and returns the new membership.
    pub fn toggle_mark(&mut self, coord: Coord, digit: u8) -> Result<bool, GridError> {
        if !is_digit(digit) {
            return Err(GridError::InvalidDigit {
                coord,
                value: digit,
            });
        }
        let cell = self.writable_mut(coord)?;
        if cell.has_value() {
            return Err(GridError::InvalidCell(coord));
        }
        Ok(cell.marks.toggle(digit))
    }

    /// Drops `digit` from the marks of every row, column and block peer of
    /// `coord`. Returns how many cells lost the mark.
    pub fn remove_mark_from_peers(&mut self, coord: Coord, digit: u8) -> Result<usize, GridError> {
        if !coord.in_bounds() {
            return Err(GridError::OutOfBounds(coord));
        }
        let mut removed = 0;
        for peer in peers(coord) {
            if self.cells[peer.row][peer.col].marks.remove(digit) {
                removed += 1;
            }
        }
        Ok(removed)
    }

    pub fn matrix(&self) -> BoardMatrix {
        array::from_fn(|row| array::from_fn(|col| self.cells[row][col].value))
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }
}

#[cfg(test)]
#[path = "tests/grid_tests.rs"]
mod tests;
