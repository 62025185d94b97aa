use shared::{domain::Coord, error::GridError};

/// At most one active cell. Selecting replaces, never adds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<Coord>,
}

impl Selection {
    /// Returns the previously selected cell, if any.
    pub fn select(&mut self, coord: Coord) -> Result<Option<Coord>, GridError> {
        if !coord.in_bounds() {
            return Err(GridError::OutOfBounds(coord));
        }
        Ok(self.current.replace(coord))
    }

    pub fn deselect(&mut self) -> Option<Coord> {
        self.current.take()
    }

    pub fn current(&self) -> Option<Coord> {
        self.current
    }

    pub fn is_selected(&self, coord: Coord) -> bool {
        self.current == Some(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_replaces_previous_cell() {
        let mut selection = Selection::default();
        assert_eq!(selection.select(Coord::new(1, 1)), Ok(None));
        assert_eq!(
            selection.select(Coord::new(4, 5)),
            Ok(Some(Coord::new(1, 1)))
        );
        assert_eq!(selection.current(), Some(Coord::new(4, 5)));
        assert!(!selection.is_selected(Coord::new(1, 1)));
    }

    #[test]
    fn out_of_bounds_selection_keeps_current() {
        let mut selection = Selection::default();
        selection.select(Coord::new(0, 0)).expect("select");
        assert_eq!(
            selection.select(Coord::new(9, 0)),
            Err(GridError::OutOfBounds(Coord::new(9, 0)))
        );
        assert_eq!(selection.current(), Some(Coord::new(0, 0)));
    }

    #[test]
    fn deselect_returns_cleared_cell() {
        let mut selection = Selection::default();
        selection.select(Coord::new(2, 3)).expect("select");
        assert_eq!(selection.deselect(), Some(Coord::new(2, 3)));
        assert_eq!(selection.deselect(), None);
        assert_eq!(selection.current(), None);
    }
}
