//! Game session: a board plus the moves that produced it
//!
//! `Game` is what a front end drives. Every move goes through the rules,
//! so the board can only ever hold positions reachable by legal play, and
//! `undo` walks the history back exactly.

use log::debug;

use crate::board::{Board, GameStatus, Player, Pos};
use crate::error::GameError;
use crate::rules::{self, AppliedMove, RuleSet};

/// A game in progress
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    history: Vec<AppliedMove>,
}

impl Game {
    pub fn new() -> Self {
        Self::with_rules(RuleSet::default())
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            board: Board::with_rules(rules),
            history: Vec::new(),
        }
    }

    /// Play `pos` for the side to move.
    ///
    /// A rejected move leaves the game untouched.
    pub fn play(&mut self, pos: Pos) -> Result<AppliedMove, GameError> {
        let applied = rules::apply(&mut self.board, pos)?;
        debug!(
            "move {}: {} at {} captured {}",
            self.history.len() + 1,
            applied.player,
            pos,
            applied.captured.len()
        );
        self.history.push(applied);
        Ok(applied)
    }

    /// Play from signed coordinates, as typed by a user
    pub fn play_at(&mut self, row: i32, col: i32) -> Result<AppliedMove, GameError> {
        let pos = Pos::checked(row, col).ok_or(GameError::OutOfBounds { row, col })?;
        self.play(pos)
    }

    /// Take back the last move
    pub fn undo(&mut self) -> Result<AppliedMove, GameError> {
        let applied = self.history.pop().ok_or(GameError::NothingToUndo)?;
        rules::revert(&mut self.board, &applied);
        Ok(applied)
    }

    /// Start over with the same rule set
    pub fn reset(&mut self) {
        self.board = Board::with_rules(self.board.rules());
        self.history.clear();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Independent copy of the current position
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    pub fn mover(&self) -> Player {
        self.board.mover()
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn is_over(&self) -> bool {
        self.board.is_over()
    }

    pub fn winner(&self) -> Option<Player> {
        self.board.winner()
    }

    pub fn captures(&self, player: Player) -> u8 {
        self.board.captures(player)
    }

    pub fn legal_moves(&self) -> Vec<Pos> {
        rules::legal_moves(&self.board)
    }

    pub fn is_legal(&self, pos: Pos) -> bool {
        rules::is_legal(&self.board, pos)
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.board.last_move()
    }

    pub fn history(&self) -> &[AppliedMove] {
        &self.history
    }

    /// Five-in-a-row of the winner, if the game was won on the board
    /// rather than by captures
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        let winner = self.winner()?;
        self.last_move()
            .and_then(|pos| rules::five_line_at_pos(&self.board, pos, winner))
            .or_else(|| rules::find_five_positions(&self.board, winner))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
