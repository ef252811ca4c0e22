use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Some(Stone::White));
    assert_eq!(Stone::White.opponent(), Some(Stone::Black));
    assert_eq!(Stone::Empty.opponent(), None);
    assert_eq!(Color::Black.opponent(), Color::White);
    assert_eq!(Color::White.opponent(), Color::Black);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(3, 9);
    assert_eq!(pos.col, 3);
    assert_eq!(pos.row, 9);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center of 15x15
    assert_eq!(pos.to_index(15), 7 * 15 + 7);
    assert_eq!(pos.to_index(15), 112);

    let pos2 = Pos::from_index(112, 15);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0, 15));
    assert!(Pos::is_valid(14, 14, 15));
    assert!(!Pos::is_valid(-1, 0, 15));
    assert!(!Pos::is_valid(0, -1, 15));
    assert!(!Pos::is_valid(15, 0, 15));
    assert!(Pos::is_valid(18, 18, 19));
    assert_eq!(Pos::checked(3, 4, 15), Some(Pos::new(3, 4)));
    assert_eq!(Pos::checked(3, 15, 15), None);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(1, 0);
    let pos3 = Pos::new(0, 1);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_distance() {
    assert_eq!(Pos::new(7, 7).distance(Pos::new(7, 7)), 0);
    assert_eq!(Pos::new(7, 7).distance(Pos::new(5, 10)), 5);
}

#[test]
fn test_by_color_indexing() {
    let mut counts = ByColor::new(1, 2);
    counts[Color::White] += 10;
    assert_eq!(counts[Color::Black], 1);
    assert_eq!(counts[Color::White], 12);
    let colors: Vec<Color> = counts.iter().map(|(c, _)| c).collect();
    assert_eq!(colors, vec![Color::Black, Color::White]);
}

#[test]
fn test_put_stone_records_history() {
    let mut board = Board::new(15);
    assert!(board.last_move().is_none());
    assert!(board.is_board_empty());

    let first = board.put_stone(Pos::new(7, 7), Color::Black);
    let second = board.put_stone(Pos::new(8, 7), Color::White);

    assert_eq!(first.seq, 1);
    assert_eq!(second.seq, 2);
    assert_eq!(board.last_move(), Some(&second));
    assert_eq!(board.history(), &[first, second]);
    assert_eq!(board.get(Pos::new(7, 7)), Stone::Black);
    assert_eq!(board.get(Pos::new(8, 7)), Stone::White);
    assert!(board.is_empty(Pos::new(9, 7)));
    assert_eq!(board.stone_count(), 2);
    assert_eq!(board.positions(Color::White).collect::<Vec<_>>(), vec![Pos::new(8, 7)]);
}

#[test]
#[should_panic(expected = "already holds")]
fn test_put_stone_on_occupied_cell_panics() {
    let mut board = Board::new(15);
    board.put_stone(Pos::new(7, 7), Color::Black);
    board.put_stone(Pos::new(7, 7), Color::White);
}

#[test]
#[should_panic(expected = "outside")]
fn test_get_off_board_panics() {
    let board = Board::new(15);
    board.get(Pos::new(15, 0));
}

#[test]
fn test_is_full() {
    let mut board = Board::new(5);
    let cells: Vec<Pos> = board.cells().collect();
    assert_eq!(cells.len(), 25);
    for (i, pos) in cells.into_iter().enumerate() {
        assert!(!board.is_full());
        let color = if i % 2 == 0 { Color::Black } else { Color::White };
        board.put_stone(pos, color);
    }
    assert!(board.is_full());
}

#[test]
fn test_display_marks_stones() {
    let mut board = Board::new(5);
    board.put_stone(Pos::new(0, 0), Color::Black);
    board.put_stone(Pos::new(4, 4), Color::White);
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "   A B C D E");
    assert_eq!(lines[1], " 0 x . . . .");
    assert_eq!(lines[5], " 4 . . . . o");
}
