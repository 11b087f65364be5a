//! Move legality, application and reversal
//!
//! `apply` is the only rule-aware way to change a board. It returns an
//! [`AppliedMove`] holding everything `revert` needs to put the board back
//! exactly as it was, which is what the search does at every node.

use log::debug;

use crate::board::{Board, GameStatus, Player, Pos, CAPTURE_WIN_STONES};
use crate::error::GameError;

use super::capture::{execute_captures, CaptureSet};
use super::forbidden::is_double_three;
use super::win::{can_break_five_by_capture, find_five_positions, five_line_at_pos, has_five_at_pos};

/// Record of one applied move: the move, its author, the stones it captured
/// and the state it replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub pos: Pos,
    pub player: Player,
    pub captured: CaptureSet,
    /// Status after the move
    pub status: GameStatus,
    prev_status: GameStatus,
    prev_last_move: Option<Pos>,
}

/// Check a move, reporting which rule it breaks
pub fn check_move(board: &Board, pos: Pos) -> Result<(), GameError> {
    if !pos.in_bounds() {
        return Err(GameError::OutOfBounds {
            row: i32::from(pos.row),
            col: i32::from(pos.col),
        });
    }
    if board.is_over() {
        return Err(GameError::GameOver);
    }
    if !board.is_empty(pos) {
        return Err(GameError::Occupied(pos));
    }
    if is_double_three(board, pos, board.mover()) {
        return Err(GameError::DoubleThree(pos));
    }
    Ok(())
}

/// Whether the side to move may play at `pos`
#[inline]
pub fn is_legal(board: &Board, pos: Pos) -> bool {
    check_move(board, pos).is_ok()
}

/// Every legal move for the side to move, in row-major order
pub fn legal_moves(board: &Board) -> Vec<Pos> {
    if board.is_over() {
        return Vec::new();
    }
    let mover = board.mover();
    board
        .empty_cells()
        .filter(|&pos| !is_double_three(board, pos, mover))
        .collect()
}

/// Whether the side to move has at least one legal move
pub fn has_legal_move(board: &Board) -> bool {
    if board.is_over() {
        return false;
    }
    let mover = board.mover();
    board
        .empty_cells()
        .any(|pos| !is_double_three(board, pos, mover))
}

/// Status after `player` placed at `pos` and its captures were taken
fn resolve_status(board: &Board, pos: Pos, player: Player) -> GameStatus {
    if board.captures(player) >= CAPTURE_WIN_STONES {
        return GameStatus::Won(player);
    }

    if !board.rules().five_breakable_by_capture {
        return if has_five_at_pos(board, pos, player) {
            GameStatus::Won(player)
        } else {
            GameStatus::InProgress
        };
    }

    if let Some(line) = five_line_at_pos(board, pos, player) {
        if !can_break_five_by_capture(board, &line, player) {
            return GameStatus::Won(player);
        }
    }
    // A five left standing last turn that this move did not break
    let opponent = player.opponent();
    if find_five_positions(board, opponent).is_some() {
        return GameStatus::Won(opponent);
    }
    GameStatus::InProgress
}

/// Play `pos` for the side to move.
///
/// Places the stone, removes bracketed pairs, settles win/draw status and
/// passes the move. An illegal move leaves the board untouched.
pub fn apply(board: &mut Board, pos: Pos) -> Result<AppliedMove, GameError> {
    if let Err(err) = check_move(board, pos) {
        debug!("rejected move {pos}: {err}");
        return Err(err);
    }

    let player = board.mover();
    let prev_status = board.status();
    let prev_last_move = board.last_move();

    board.place_stone(pos, player.stone());
    let captured = execute_captures(board, pos, player);
    board.set_last_move(Some(pos));
    board.set_status(resolve_status(board, pos, player));
    board.set_mover(player.opponent());

    if !board.is_over() && !has_legal_move(board) {
        board.set_status(GameStatus::Draw);
    }

    Ok(AppliedMove {
        pos,
        player,
        captured,
        status: board.status(),
        prev_status,
        prev_last_move,
    })
}

/// Undo `applied`, which must be the last move applied to `board`
pub fn revert(board: &mut Board, applied: &AppliedMove) {
    debug_assert_eq!(board.get(applied.pos), applied.player.stone());

    board.remove_stone(applied.pos);
    let opponent = applied.player.opponent().stone();
    for pos in applied.captured.iter() {
        board.place_stone(pos, opponent);
    }
    board.sub_captures(applied.player, applied.captured.len() as u8);
    board.set_mover(applied.player);
    board.set_status(applied.prev_status);
    board.set_last_move(applied.prev_last_move);
}
