use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Player::White.opponent(), Player::Black);
    assert_eq!(Stone::from(Player::White), Stone::White);
    assert_eq!(Stone::Empty.player(), None);
    assert_eq!(Stone::Black.player(), Some(Player::Black));
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(9, 9); // Center
    assert_eq!(pos.to_index(), 180);
    assert_eq!(Pos::from_index(180), pos);
    assert_eq!(Pos::center(), pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(18, 18));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, 19));
    assert_eq!(Pos::checked(19, 0), None);
    assert!(!Pos { row: 19, col: 3 }.in_bounds());
}

#[test]
fn test_pos_offset_and_distance() {
    let pos = Pos::new(2, 2);
    assert_eq!(pos.offset(1, -1, 2), Some(Pos::new(4, 0)));
    assert_eq!(pos.offset(1, -1, 3), None);
    assert_eq!(pos.chebyshev(Pos::new(5, 3)), 3);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 18) < Pos::new(1, 0));
}

#[test]
fn test_corners() {
    let corners = Pos::corners();
    let indices: Vec<usize> = corners.iter().map(|p| p.to_index()).collect();
    assert_eq!(indices, vec![0, 18, 360, 342]);
}

#[test]
fn test_new_board_state() {
    let board = Board::new();
    assert!(board.is_board_empty());
    assert_eq!(board.mover(), Player::Black);
    assert_eq!(board.status(), GameStatus::InProgress);
    assert_eq!(board.captures(Player::Black), 0);
    assert_eq!(board.captures(Player::White), 0);
    assert_eq!(board.last_move(), None);
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new();
    let pos = Pos::new(3, 4);
    board.place_stone(pos, Stone::White);
    assert_eq!(board.get(pos), Stone::White);
    // Overwriting keeps exactly one color per cell
    board.place_stone(pos, Stone::Black);
    assert_eq!(board.get(pos), Stone::Black);
    assert!(!board.stones(Player::White).get(pos));
    board.remove_stone(pos);
    assert!(board.is_empty(pos));
    assert_eq!(board.stone_count(), 0);
}

#[test]
fn test_bitboard_iter_row_major() {
    let mut bb = Bitboard::new();
    for pos in [Pos::new(18, 18), Pos::new(0, 5), Pos::new(7, 0)] {
        bb.set(pos);
    }
    let ones: Vec<Pos> = bb.iter_ones().collect();
    assert_eq!(ones, vec![Pos::new(0, 5), Pos::new(7, 0), Pos::new(18, 18)]);
    assert_eq!(bb.count(), 3);
}

#[test]
fn test_key_tracks_mover_and_captures() {
    let mut a = Board::new();
    let mut b = Board::new();
    a.place_stone(Pos::new(9, 9), Stone::Black);
    b.place_stone(Pos::new(9, 9), Stone::Black);
    assert_eq!(a.key(), b.key());

    b.set_mover(Player::White);
    assert_ne!(a.key(), b.key());

    b.set_mover(Player::Black);
    b.set_captures(Player::White, 2);
    assert_ne!(a.key(), b.key());
}

#[test]
fn test_display_marks_last_move() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 0), Stone::Black);
    board.set_last_move(Some(Pos::new(0, 0)));
    let text = board.to_string();
    assert!(text.contains(" >X"));
    assert!(text.ends_with("Black captures: 0  White captures: 0"));
}
