use super::*;
use shared::domain::EMPTY_MATRIX;

fn union_of_peers(coords: &[Coord]) -> BTreeSet<Coord> {
    coords.iter().flat_map(|coord| peers(*coord)).collect()
}

#[test]
fn peers_cover_row_column_and_block() {
    let set = peers(Coord::new(4, 4));
    // 9 row + 9 column - 1 shared + 4 block cells outside row/column
    assert_eq!(set.len(), 21);
    assert!(set.contains(&Coord::new(4, 4)));
    assert!(set.contains(&Coord::new(4, 0)));
    assert!(set.contains(&Coord::new(0, 4)));
    assert!(set.contains(&Coord::new(3, 3)));
    assert!(set.contains(&Coord::new(5, 5)));
    assert!(!set.contains(&Coord::new(2, 2)));
    assert!(!set.contains(&Coord::new(6, 6)));
}

#[test]
fn nothing_selected_highlights_nothing() {
    let board = Board::default();
    assert!(HighlightSet::derive(&board, None).is_empty());
}

#[test]
fn blank_selection_highlights_only_its_peers() {
    let mut matrix = EMPTY_MATRIX;
    matrix[0][8] = 3;
    matrix[8][0] = 3;
    let board = Board::from_matrix(&matrix).expect("load");

    let highlights = HighlightSet::derive(&board, Some(Coord::new(4, 4)));
    assert_eq!(
        highlights.iter().collect::<BTreeSet<_>>(),
        peers(Coord::new(4, 4))
    );
}

#[test]
fn predefined_selection_highlights_same_value_cells_and_their_peers() {
    let mut matrix = EMPTY_MATRIX;
    matrix[0][0] = 5;
    matrix[4][4] = 5;
    matrix[8][7] = 5;
    matrix[2][6] = 1;
    let board = Board::from_matrix(&matrix).expect("load");

    let highlights = HighlightSet::derive(&board, Some(Coord::new(0, 0)));
    let expected = union_of_peers(&[Coord::new(0, 0), Coord::new(4, 4), Coord::new(8, 7)]);
    assert_eq!(highlights.iter().collect::<BTreeSet<_>>(), expected);
    assert!(highlights.contains(Coord::new(8, 2)));
    assert!(!highlights.contains(Coord::new(2, 5)));
}

#[test]
fn user_committed_values_also_match() {
    let mut matrix = EMPTY_MATRIX;
    matrix[1][1] = 4;
    let mut board = Board::from_matrix(&matrix).expect("load");
    board.set_value(Coord::new(7, 7), 4).expect("write");

    let highlights = HighlightSet::derive(&board, Some(Coord::new(7, 7)));
    assert_eq!(
        highlights.iter().collect::<BTreeSet<_>>(),
        union_of_peers(&[Coord::new(1, 1), Coord::new(7, 7)])
    );
}

#[test]
fn pencil_marked_cells_never_match_same_value() {
    let mut matrix = EMPTY_MATRIX;
    matrix[0][0] = 2;
    let mut board = Board::from_matrix(&matrix).expect("load");
    board.toggle_mark(Coord::new(8, 8), 2).expect("mark");

    let highlights = HighlightSet::derive(&board, Some(Coord::new(0, 0)));
    assert!(!highlights.contains(Coord::new(8, 8)));
    assert!(!highlights.contains(Coord::new(7, 7)));

    let marked = HighlightSet::derive(&board, Some(Coord::new(8, 8)));
    assert_eq!(
        marked.iter().collect::<BTreeSet<_>>(),
        peers(Coord::new(8, 8))
    );
}

#[test]
fn derivation_does_not_accumulate_across_selections() {
    let mut matrix = EMPTY_MATRIX;
    matrix[0][0] = 9;
    matrix[5][5] = 9;
    let board = Board::from_matrix(&matrix).expect("load");

    let first = HighlightSet::derive(&board, Some(Coord::new(0, 0)));
    let second = HighlightSet::derive(&board, Some(Coord::new(3, 1)));
    assert!(first.contains(Coord::new(8, 5)));
    assert!(!second.contains(Coord::new(8, 5)));
    assert_eq!(second.len(), peers(Coord::new(3, 1)).len());
}
