use super::*;
use shared::domain::EMPTY_MATRIX;

fn sample_matrix() -> BoardMatrix {
    let mut matrix = EMPTY_MATRIX;
    matrix[0][1] = 7;
    matrix[4][4] = 5;
    matrix[8][8] = 9;
    matrix
}

fn assert_exclusive(board: &Board) {
    for cell in board.cells() {
        assert!(
            !(cell.has_value() && cell.has_marks()),
            "cell {} holds a value and marks",
            cell.coord()
        );
    }
}

#[test]
fn load_classifies_origin_from_matrix() {
    let board = Board::from_matrix(&sample_matrix()).expect("load");
    let given = board.get(Coord::new(0, 1)).expect("cell");
    assert_eq!(given.origin(), CellOrigin::Predefined);
    assert_eq!(given.value(), 7);

    let blank = board.get(Coord::new(0, 0)).expect("cell");
    assert_eq!(blank.origin(), CellOrigin::Empty);
    assert_eq!(blank.value(), 0);
    assert!(blank.marks().is_empty());
    assert_eq!(blank.coord(), Coord::new(0, 0));
}

#[test]
fn load_replaces_board_wholesale() {
    let mut board = Board::from_matrix(&sample_matrix()).expect("load");
    board.set_value(Coord::new(0, 0), 3).expect("write");
    board.toggle_mark(Coord::new(1, 1), 2).expect("mark");

    board.load(&EMPTY_MATRIX).expect("reload");
    assert_eq!(board, Board::default());
    assert_eq!(board.matrix(), EMPTY_MATRIX);
}

#[test]
fn load_rejects_digits_above_nine_and_keeps_previous_board() {
    let mut board = Board::from_matrix(&sample_matrix()).expect("load");
    let mut bad = EMPTY_MATRIX;
    bad[3][2] = 12;
    assert_eq!(
        board.load(&bad),
        Err(GridError::InvalidDigit {
            coord: Coord::new(3, 2),
            value: 12
        })
    );
    assert_eq!(board.matrix(), sample_matrix());
}

#[test]
fn out_of_range_coordinates_fail_fast() {
    let mut board = Board::default();
    let outside = Coord::new(9, 0);
    assert_eq!(board.get(outside).err(), Some(GridError::OutOfBounds(outside)));
    assert_eq!(
        board.set_value(Coord::new(0, 9), 1),
        Err(GridError::OutOfBounds(Coord::new(0, 9)))
    );
    assert_eq!(
        board.clear_value(outside),
        Err(GridError::OutOfBounds(outside))
    );
    assert_eq!(
        board.toggle_mark(outside, 1),
        Err(GridError::OutOfBounds(outside))
    );
}

#[test]
fn predefined_cells_refuse_every_mutation() {
    let mut board = Board::from_matrix(&sample_matrix()).expect("load");
    let given = Coord::new(0, 1);
    assert_eq!(board.set_value(given, 3), Err(GridError::InvalidCell(given)));
    assert_eq!(board.clear_value(given), Err(GridError::InvalidCell(given)));
    assert_eq!(board.toggle_mark(given, 3), Err(GridError::InvalidCell(given)));
    assert_eq!(board.get(given).expect("cell").value(), 7);
}

#[test]
fn writing_a_value_erases_marks() {
    let mut board = Board::default();
    let coord = Coord::new(2, 2);
    board.toggle_mark(coord, 1).expect("mark");
    board.toggle_mark(coord, 4).expect("mark");
    assert_eq!(board.get(coord).expect("cell").marks().len(), 2);

    board.set_value(coord, 6).expect("write");
    let cell = board.get(coord).expect("cell");
    assert_eq!(cell.value(), 6);
    assert!(cell.marks().is_empty());
    assert_exclusive(&board);

    board.set_value(coord, 8).expect("overwrite");
    assert!(board.get(coord).expect("cell").marks().is_empty());
}

#[test]
fn clearing_a_cell_erases_value_and_marks() {
    let mut board = Board::default();
    let coord = Coord::new(5, 5);
    board.toggle_mark(coord, 9).expect("mark");
    board.clear_value(coord).expect("clear");
    assert!(board.get(coord).expect("cell").marks().is_empty());

    board.set_value(coord, 2).expect("write");
    board.clear_value(coord).expect("clear");
    let cell = board.get(coord).expect("cell");
    assert_eq!(cell.value(), 0);
    assert_eq!(cell.origin(), CellOrigin::Empty);
}

#[test]
fn toggling_a_mark_twice_restores_membership() {
    let mut board = Board::default();
    let coord = Coord::new(2, 2);
    board.toggle_mark(coord, 3).expect("seed");

    assert_eq!(board.toggle_mark(coord, 5), Ok(true));
    assert_eq!(board.toggle_mark(coord, 5), Ok(false));
    let marks = board.get(coord).expect("cell").marks();
    assert!(!marks.contains(5));
    assert!(marks.contains(3));
}

#[test]
fn marks_are_refused_on_cells_holding_a_value() {
    let mut board = Board::default();
    let coord = Coord::new(7, 3);
    board.set_value(coord, 4).expect("write");
    assert_eq!(board.toggle_mark(coord, 4), Err(GridError::InvalidCell(coord)));
    assert_exclusive(&board);
}

#[test]
fn rejects_non_digit_values() {
    let mut board = Board::default();
    let coord = Coord::new(0, 0);
    assert_eq!(
        board.set_value(coord, 0),
        Err(GridError::InvalidDigit { coord, value: 0 })
    );
    assert_eq!(
        board.toggle_mark(coord, 10),
        Err(GridError::InvalidDigit { coord, value: 10 })
    );
}

#[test]
fn committed_digit_is_removed_from_peer_marks_only() {
    let mut board = Board::default();
    let target = Coord::new(4, 4);
    let same_row = Coord::new(4, 0);
    let same_col = Coord::new(8, 4);
    let same_block = Coord::new(3, 5);
    let unrelated = Coord::new(0, 0);
    for coord in [same_row, same_col, same_block, unrelated] {
        board.toggle_mark(coord, 6).expect("mark");
        board.toggle_mark(coord, 2).expect("mark");
    }

    board.set_value(target, 6).expect("write");
    assert_eq!(board.remove_mark_from_peers(target, 6), Ok(3));

    for coord in [same_row, same_col, same_block] {
        let marks = board.get(coord).expect("cell").marks();
        assert!(!marks.contains(6), "{coord} kept the committed digit");
        assert!(marks.contains(2));
    }
    assert!(board.get(unrelated).expect("cell").marks().contains(6));
}

#[test]
fn mark_set_iterates_in_digit_order() {
    let mut marks = MarkSet::empty();
    for digit in [9, 1, 5] {
        marks.toggle(digit);
    }
    assert_eq!(marks.iter().collect::<Vec<_>>(), vec![1, 5, 9]);
    assert!(!marks.toggle(0));
    assert!(!marks.contains(0));
    assert!(marks.remove(5));
    assert!(!marks.remove(5));
    marks.clear();
    assert!(marks.is_empty());
}
