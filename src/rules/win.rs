//! Five-in-a-row detection
//!
//! Win conditions:
//! 1. Five or more stones in a row (overlines count)
//! 2. 10 captured stones, handled by move application
//!
//! Optional endgame capture rule: a five only wins if the opponent
//! cannot break it by capturing a pair out of the line.

use crate::board::{Board, Player, Pos};

use super::capture::get_captured_positions;
use super::forbidden::is_double_three;
use super::DIRECTIONS;

/// Stones of `player` running from `pos` (exclusive) along `(dr, dc)`
#[inline]
fn run_length(board: &Board, pos: Pos, player: Player, dr: i32, dc: i32) -> i32 {
    let stone = player.stone();
    let mut n = 0;
    while let Some(next) = pos.offset(dr, dc, n + 1) {
        if board.get(next) != stone {
            break;
        }
        n += 1;
    }
    n
}

/// Fast five-in-a-row check through a specific position.
///
/// Only checks the 4 axes through `pos`. No allocation.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, player: Player) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + run_length(board, pos, player, dr, dc) + run_length(board, pos, player, -dr, -dc) >= 5
    })
}

/// The full line of a five (or longer) through `pos`, if any
pub fn five_line_at_pos(board: &Board, pos: Pos, player: Player) -> Option<Vec<Pos>> {
    DIRECTIONS.iter().find_map(|&(dr, dc)| {
        let back = run_length(board, pos, player, -dr, -dc);
        let fwd = run_length(board, pos, player, dr, dc);
        if 1 + back + fwd < 5 {
            return None;
        }
        (-back..=fwd)
            .map(|i| pos.offset(dr, dc, i))
            .collect::<Option<Vec<_>>>()
    })
}

/// Find the positions of any 5-in-a-row for `player`
pub fn find_five_positions(board: &Board, player: Player) -> Option<Vec<Pos>> {
    board
        .stones(player)
        .iter_ones()
        .find_map(|pos| five_line_at_pos(board, pos, player))
}

/// Check if the opponent can break the line by capture.
///
/// A pair holding a line stone can be closed one or two cells away from
/// that stone, so both distances are tried on every axis. The closing cell
/// must be a legal move for the opponent.
pub fn can_break_five_by_capture(board: &Board, line: &[Pos], owner: Player) -> bool {
    let opponent = owner.opponent();

    line.iter().any(|&pos| {
        DIRECTIONS.iter().any(|&(dr, dc)| {
            [-2, -1, 1, 2].into_iter().any(|step| {
                let Some(cell) = pos.offset(dr, dc, step) else {
                    return false;
                };
                board.is_empty(cell)
                    && get_captured_positions(board, cell, opponent)
                        .iter()
                        .any(|cap| line.contains(&cap))
                    && !is_double_three(board, cell, opponent)
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_five_horizontal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        assert!(has_five_at_pos(&board, Pos::new(9, 2), Player::Black));
        assert!(!has_five_at_pos(&board, Pos::new(9, 2), Player::White));
        assert!(find_five_positions(&board, Player::Black).is_some());
        assert!(find_five_positions(&board, Player::White).is_none());
    }

    #[test]
    fn test_five_diagonal_sw() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(4 + i, 14 - i), Stone::White);
        }
        let line = five_line_at_pos(&board, Pos::new(6, 12), Player::White).unwrap();
        assert_eq!(line.len(), 5);
        assert!(line.contains(&Pos::new(4, 14)));
        assert!(line.contains(&Pos::new(8, 10)));
    }

    #[test]
    fn test_four_is_not_five() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        assert!(!has_five_at_pos(&board, Pos::new(9, 3), Player::Black));
    }

    #[test]
    fn test_overline_counts() {
        let mut board = Board::new();
        for i in 3..9 {
            board.place_stone(Pos::new(i, 9), Stone::Black);
        }
        let line = five_line_at_pos(&board, Pos::new(5, 9), Player::Black).unwrap();
        assert_eq!(line.len(), 6);
    }

    #[test]
    fn test_broken_line_is_not_five() {
        let mut board = Board::new();
        for col in [0, 1, 3, 4, 5] {
            board.place_stone(Pos::new(2, col), Stone::Black);
        }
        assert!(!has_five_at_pos(&board, Pos::new(2, 1), Player::Black));
    }

    #[test]
    fn test_breakable_five() {
        let mut board = Board::new();
        for col in 5..10 {
            board.place_stone(Pos::new(9, col), Stone::Black);
        }
        // White can bracket (10,7)-(9,7)? Build W at (11,7), B at (10,7):
        // W(11,7) B(10,7) B(9,7) _(8,7) -> White at (8,7) captures (9,7),(10,7)
        board.place_stone(Pos::new(10, 7), Stone::Black);
        board.place_stone(Pos::new(11, 7), Stone::White);

        let line = five_line_at_pos(&board, Pos::new(9, 7), Player::Black).unwrap();
        assert!(can_break_five_by_capture(&board, &line, Player::Black));
    }

    #[test]
    fn test_breakable_five_closed_two_cells_away() {
        let mut board = Board::new();
        for col in 5..10 {
            board.place_stone(Pos::new(9, col), Stone::Black);
        }
        // W(8,7) B(9,7) B(10,7) _(11,7): the closing cell is off the line
        board.place_stone(Pos::new(10, 7), Stone::Black);
        board.place_stone(Pos::new(8, 7), Stone::White);

        let line = five_line_at_pos(&board, Pos::new(9, 7), Player::Black).unwrap();
        assert!(can_break_five_by_capture(&board, &line, Player::Black));
    }

    #[test]
    fn test_break_needs_legal_capture_cell() {
        let mut board = Board::new();
        for col in 5..10 {
            board.place_stone(Pos::new(9, col), Stone::Black);
        }
        // Only break: White at (11,7) captures (10,7),(9,7)
        board.place_stone(Pos::new(10, 7), Stone::Black);
        board.place_stone(Pos::new(8, 7), Stone::White);
        let line = five_line_at_pos(&board, Pos::new(9, 7), Player::Black).unwrap();

        // (11,7) is a double-three for White: _X_WW_ on row 11 and
        // _XWW_ on the diagonal
        for (r, c) in [(11, 9), (11, 10), (12, 8), (13, 9)] {
            board.place_stone(Pos::new(r, c), Stone::White);
        }

        assert!(is_double_three(&board, Pos::new(11, 7), Player::White));
        assert!(!can_break_five_by_capture(&board, &line, Player::Black));
    }

    #[test]
    fn test_unbreakable_five() {
        let mut board = Board::new();
        for col in 5..10 {
            board.place_stone(Pos::new(9, col), Stone::Black);
        }
        let line = five_line_at_pos(&board, Pos::new(9, 5), Player::Black).unwrap();
        assert!(!can_break_five_by_capture(&board, &line, Player::Black));
    }
}
