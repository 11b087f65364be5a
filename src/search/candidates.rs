//! Candidate move generation and root ordering
//!
//! A full 19x19 board is too wide to search, so each node only looks at
//! legal cells close to existing stones.

use std::cmp::Reverse;

use crate::board::{Bitboard, Board, GameStatus, Player, Pos, Stone};
use crate::rules::{apply, get_captured_positions, is_double_three, is_legal, revert, DIRECTIONS};

/// Ordering bonus for a move that wins on the spot
const WIN_BONUS: i32 = 10_000;
/// Ordering bonus per stone the move captures
const CAPTURE_BONUS: i32 = 100;
/// Ordering bonus for a move clear of the double-three restriction
const FREE_BONUS: i32 = 50;
/// Contact bonus per stone a cell would capture
const CAPTURE_CONTACT: i32 = 30;

/// Up to `limit` legal moves for the side to move, in row-major order
fn first_legal(board: &Board, limit: usize) -> Vec<Pos> {
    board
        .empty_cells()
        .filter(|&pos| is_legal(board, pos))
        .take(limit)
        .collect()
}

/// Empty cells within Chebyshev distance `radius` of any stone
fn near_stones(board: &Board, radius: u8) -> Bitboard {
    let radius = i32::from(radius);
    let mut near = Bitboard::new();

    for (pos, _) in board.occupied() {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if let Some(p) = Pos::checked(i32::from(pos.row) + dr, i32::from(pos.col) + dc) {
                    if board.is_empty(p) {
                        near.set(p);
                    }
                }
            }
        }
    }

    near
}

/// Stones of `stone` touching `pos` along one axis, both sides combined
fn line_contact(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> i32 {
    let mut len = 0;
    for sign in [1, -1] {
        len += (1..5)
            .take_while(|&n| pos.offset(dr * sign, dc * sign, n).map(|p| board.get(p)) == Some(stone))
            .count() as i32;
    }
    len
}

/// How strongly an empty cell touches existing lines.
///
/// Own lines weigh double, so completing a four outranks blocking one and
/// blocking a four outranks extending a three.
fn contact_score(board: &Board, pos: Pos, mover: Player) -> i32 {
    let mut score = 0;
    for &(dr, dc) in &DIRECTIONS {
        let own = line_contact(board, pos, mover.stone(), dr, dc);
        let theirs = line_contact(board, pos, mover.opponent().stone(), dr, dc);
        score += 2 * own.pow(3) + theirs.pow(3);
    }
    score + CAPTURE_CONTACT * get_captured_positions(board, pos, mover).len() as i32
}

/// Moves worth searching from this position.
///
/// When at most `max` legal moves remain they are all returned. Otherwise
/// the legal cells within `proximity` of a stone are used, in row-major
/// order; if there are more than `max` of them the `max` cells with the
/// strongest line contact are kept. With no stone on the board the legal
/// members of center and the four corners are used instead.
pub fn select(board: &Board, max: usize, proximity: u8) -> Vec<Pos> {
    let legal = first_legal(board, max + 1);
    if legal.len() <= max {
        return legal;
    }

    let mut near: Vec<Pos> = near_stones(board, proximity)
        .iter_ones()
        .filter(|&pos| is_legal(board, pos))
        .collect();
    if near.len() > max {
        let mover = board.mover();
        near.sort_by_cached_key(|&pos| Reverse(contact_score(board, pos, mover)));
        near.truncate(max);
    }
    if !near.is_empty() {
        return near;
    }

    let fallback: Vec<Pos> = std::iter::once(Pos::center())
        .chain(Pos::corners())
        .filter(|&pos| is_legal(board, pos))
        .collect();
    if fallback.is_empty() {
        // Every anchor cell is taken or forbidden
        return legal.into_iter().take(max).collect();
    }
    fallback
}

/// One-ply proxy score of `pos` for the side to move, from Black's view
fn proxy_score(board: &mut Board, pos: Pos) -> i32 {
    let mover = board.mover();
    let mut score = 0;

    if !is_double_three(board, pos, mover) {
        score += FREE_BONUS;
    }
    if let Ok(applied) = apply(board, pos) {
        if applied.status == GameStatus::Won(mover) {
            score += WIN_BONUS;
        }
        score += CAPTURE_BONUS * applied.captured.len() as i32;
        revert(board, &applied);
    }

    match mover {
        Player::Black => score,
        Player::White => -score,
    }
}

/// Order root moves by proxy score: descending for Black, ascending for
/// White. Ties keep their input order. The board is left as it was.
pub fn order(board: &mut Board, moves: Vec<Pos>) -> Vec<Pos> {
    let mut scored: Vec<(Pos, i32)> = moves
        .into_iter()
        .map(|pos| (pos, proxy_score(board, pos)))
        .collect();

    match board.mover() {
        Player::Black => scored.sort_by_key(|&(_, score)| Reverse(score)),
        Player::White => scored.sort_by_key(|&(_, score)| score),
    }

    scored.into_iter().map(|(pos, _)| pos).collect()
}
