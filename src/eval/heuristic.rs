//! Heuristic evaluation function for Gomoku board positions
//!
//! This module provides the static evaluation used at search leaves.
//! Scores are computed from Black's point of view and negated for White, so
//! `evaluate(board, Black) == -evaluate(board, White)` always holds.
//!
//! Components:
//! - Terminal status (±`PatternScore::WIN`, 0 for a draw)
//! - Capture difference
//! - Run patterns through every stone on every axis
//! - Center proximity and corner occupation
//! - Mobility: cells the double-three rule takes away from each side

use crate::board::{Bitboard, Board, GameStatus, Player, Pos, Stone};
use crate::rules::{is_double_three, DIRECTIONS};

use super::patterns::{run_score, PatternScore, RunKind};

/// Chebyshev radius of the center region that earns position points
const CENTER_RADIUS: u8 = 3;

/// Farthest cell on an axis a free-three template can reach from a stone
const THREE_REACH: i32 = 4;

/// Evaluate the board from the perspective of the given player.
///
/// Positive values favor `perspective`.
#[must_use]
pub fn evaluate(board: &Board, perspective: Player) -> i32 {
    let score = match board.status() {
        GameStatus::Won(Player::Black) => PatternScore::WIN,
        GameStatus::Won(Player::White) => -PatternScore::WIN,
        GameStatus::Draw => 0,
        GameStatus::InProgress => {
            capture_score(board) + pattern_score(board) + position_score(board) + mobility_score(board)
        }
    };

    match perspective {
        Player::Black => score,
        Player::White => -score,
    }
}

fn capture_score(board: &Board) -> i32 {
    let diff = i32::from(board.captures(Player::Black)) - i32::from(board.captures(Player::White));
    diff * PatternScore::CAPTURE
}

/// Length of the run through `pos` on one axis and how many ends are open.
///
/// An end is open only if the next cell is on the board and empty.
fn measure_run(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> (u32, u8) {
    let mut len = 1;
    let mut open_ends = 0;

    for sign in [1i32, -1i32] {
        let mut step = 1;
        loop {
            match pos.offset(dr * sign, dc * sign, step).map(|p| board.get(p)) {
                Some(s) if s == stone => {
                    len += 1;
                    step += 1;
                }
                Some(Stone::Empty) => {
                    open_ends += 1;
                    break;
                }
                _ => break,
            }
        }
    }

    (len, open_ends)
}

/// Sum of run scores through every stone, Black minus White.
///
/// Each stone scores the run it sits in, so a run of three contributes
/// three times.
fn pattern_score(board: &Board) -> i32 {
    let mut score = 0;

    for (pos, stone) in board.occupied() {
        let sign = if stone == Stone::Black { 1 } else { -1 };
        for &(dr, dc) in &DIRECTIONS {
            let (len, open_ends) = measure_run(board, pos, stone, dr, dc);
            score += sign * run_score(len, open_ends);
        }
    }

    score
}

/// Center proximity and corner occupation, Black minus White
fn position_score(board: &Board) -> i32 {
    let center = Pos::center();
    let corners = Pos::corners();
    let mut score = 0;

    for (pos, stone) in board.occupied() {
        let mut value = 0;
        if pos.chebyshev(center) <= CENTER_RADIUS {
            let manhattan = i32::from(pos.row.abs_diff(center.row)) + i32::from(pos.col.abs_diff(center.col));
            value += (i32::from(CENTER_RADIUS) - manhattan).max(0);
        }
        if corners.contains(&pos) {
            value += PatternScore::CORNER;
        }
        score += if stone == Stone::Black { value } else { -value };
    }

    score * PatternScore::POSITION_WEIGHT
}

/// Legal cells for Black minus legal cells for White.
///
/// Empty cells count for both sides unless the double-three rule forbids
/// them, and a cell with no stone within reach on any axis can never be
/// forbidden, so only cells near stones are examined.
fn mobility_score(board: &Board) -> i32 {
    let mut near = Bitboard::new();
    for (pos, _) in board.occupied() {
        for &(dr, dc) in &DIRECTIONS {
            for step in -THREE_REACH..=THREE_REACH {
                if let Some(p) = pos.offset(dr, dc, step) {
                    if board.is_empty(p) {
                        near.set(p);
                    }
                }
            }
        }
    }

    let mut diff = 0;
    for pos in near.iter_ones() {
        if is_double_three(board, pos, Player::White) {
            diff += 1;
        }
        if is_double_three(board, pos, Player::Black) {
            diff -= 1;
        }
    }

    diff * PatternScore::MOBILITY_WEIGHT
}

/// Per-color count of run shapes, one entry per stone and axis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternCounts {
    black: [u32; RunKind::ALL.len()],
    white: [u32; RunKind::ALL.len()],
}

impl PatternCounts {
    pub fn get(&self, player: Player, kind: RunKind) -> u32 {
        match player {
            Player::Black => self.black[kind.index()],
            Player::White => self.white[kind.index()],
        }
    }
}

/// Census of run shapes on the board, for diagnostics
pub fn pattern_counts(board: &Board) -> PatternCounts {
    let mut counts = PatternCounts::default();

    for (pos, stone) in board.occupied() {
        let slots = if stone == Stone::Black {
            &mut counts.black
        } else {
            &mut counts.white
        };
        for &(dr, dc) in &DIRECTIONS {
            let (len, open_ends) = measure_run(board, pos, stone, dr, dc);
            slots[RunKind::classify(len, open_ends).index()] += 1;
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Player::Black), 0);
        assert_eq!(evaluate(&board, Player::White), 0);
    }

    #[test]
    fn test_evaluate_center_stone() {
        let mut board = Board::new();
        board.place_stone(Pos::center(), Stone::Black);
        // 4 singletons + (3 - 0) * 5 position
        assert_eq!(evaluate(&board, Player::Black), 4 + 15);
        assert_eq!(evaluate(&board, Player::White), -19);
    }

    #[test]
    fn test_evaluate_corner_stone() {
        let mut board = Board::new();
        board.place_stone(Pos::new(18, 18), Stone::White);
        // 4 singletons + corner bonus 10 * 5, all for White
        assert_eq!(evaluate(&board, Player::Black), -(4 + 50));
        assert_eq!(evaluate(&board, Player::White), 54);
    }

    #[test]
    fn test_evaluate_open_three() {
        let mut board = Board::new();
        for col in 1..4 {
            board.place_stone(Pos::new(9, col), Stone::Black);
        }
        // 3 stones * live three + 3 stones * 3 other axes * singleton
        assert_eq!(evaluate(&board, Player::Black), 3 * 500 + 9);
    }

    #[test]
    fn test_edge_blocks_run() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::Black);
        board.place_stone(Pos::new(0, 1), Stone::Black);
        // Dead two twice, 6 singletons, one corner
        assert_eq!(evaluate(&board, Player::Black), 2 * 10 + 6 + 10 * 5);
    }

    #[test]
    fn test_opponent_blocks_run() {
        let mut board = Board::new();
        board.place_stone(Pos::new(5, 5), Stone::White);
        board.place_stone(Pos::new(5, 6), Stone::Black);
        board.place_stone(Pos::new(5, 7), Stone::Black);
        board.place_stone(Pos::new(5, 8), Stone::Black);

        let counts = pattern_counts(&board);
        assert_eq!(counts.get(Player::Black, RunKind::DeadThree), 3);
        assert_eq!(counts.get(Player::Black, RunKind::LiveThree), 0);
        assert_eq!(counts.get(Player::White, RunKind::Single), 4);
    }

    #[test]
    fn test_evaluate_terminal() {
        let mut board = Board::new();
        board.set_status(GameStatus::Won(Player::White));
        assert_eq!(evaluate(&board, Player::Black), -PatternScore::WIN);
        assert_eq!(evaluate(&board, Player::White), PatternScore::WIN);

        board.set_status(GameStatus::Draw);
        assert_eq!(evaluate(&board, Player::Black), 0);
    }

    #[test]
    fn test_evaluate_captures() {
        let mut board = Board::new();
        board.set_captures(Player::Black, 4);
        board.set_captures(Player::White, 2);
        assert_eq!(evaluate(&board, Player::Black), 2 * 200);
    }

    #[test]
    fn test_evaluate_zero_sum() {
        let mut board = Board::new();
        board.place_stone(Pos::new(9, 7), Stone::Black);
        board.place_stone(Pos::new(9, 8), Stone::Black);
        board.place_stone(Pos::new(9, 9), Stone::Black);
        board.place_stone(Pos::new(5, 5), Stone::White);
        board.place_stone(Pos::new(5, 6), Stone::White);
        board.set_captures(Player::White, 2);

        assert_eq!(
            evaluate(&board, Player::Black),
            -evaluate(&board, Player::White)
        );
    }

    #[test]
    fn test_mobility_counts_forbidden_cells() {
        let mut board = Board::new();
        // Cross setup: (9,9) is a double-three for Black only
        board.place_stone(Pos::new(9, 7), Stone::Black);
        board.place_stone(Pos::new(9, 8), Stone::Black);
        board.place_stone(Pos::new(7, 9), Stone::Black);
        board.place_stone(Pos::new(8, 9), Stone::Black);

        let forbidden_black = (0..BOARD_SIZE * BOARD_SIZE)
            .map(Pos::from_index)
            .filter(|&p| board.is_empty(p) && is_double_three(&board, p, Player::Black))
            .count() as i32;
        assert!(forbidden_black >= 1);
        assert_eq!(mobility_score(&board), -forbidden_black * PatternScore::MOBILITY_WEIGHT);
    }
}
