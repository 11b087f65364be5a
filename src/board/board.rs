//! Board structure with capture tracking and game status

use std::fmt;

use super::bitboard::Bitboard;
use super::{Player, Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::rules::RuleSet;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Exact position identity: stones, side to move and capture tallies.
///
/// Used to verify transposition table hits, so two different positions can
/// never share a stored score even when their hashes collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardKey {
    black: Bitboard,
    white: Bitboard,
    mover: Player,
    captures: [u8; 2],
}

/// Game board with capture tracking.
///
/// Game moves go through [`crate::rules::apply`]; `place_stone` and
/// `remove_stone` are raw setters for building positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
    mover: Player,
    /// Stones removed by each side's brackets, indexed by `Player::index`
    captures: [u8; 2],
    status: GameStatus,
    last_move: Option<Pos>,
    rules: RuleSet,
}

impl Board {
    pub fn new() -> Self {
        Self::with_rules(RuleSet::default())
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
            mover: Player::Black,
            captures: [0; 2],
            status: GameStatus::InProgress,
            last_move: None,
            rules,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(move |&pos| self.is_empty(pos))
    }

    /// Place a stone without any rule processing
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => {
                self.white.clear(pos);
                self.black.set(pos);
            }
            Stone::White => {
                self.black.clear(pos);
                self.white.set(pos);
            }
            Stone::Empty => self.remove_stone(pos),
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Bitboard of one side's stones
    #[inline]
    pub fn stones(&self, player: Player) -> &Bitboard {
        match player {
            Player::Black => &self.black,
            Player::White => &self.white,
        }
    }

    /// Stones captured so far by `player`
    #[inline]
    pub fn captures(&self, player: Player) -> u8 {
        self.captures[player.index()]
    }

    #[inline]
    pub(crate) fn add_captures(&mut self, player: Player, stones: u8) {
        let slot = &mut self.captures[player.index()];
        *slot = slot.saturating_add(stones);
    }

    #[inline]
    pub(crate) fn sub_captures(&mut self, player: Player, stones: u8) {
        let slot = &mut self.captures[player.index()];
        *slot = slot.saturating_sub(stones);
    }

    /// Overwrite a capture tally when setting up a position
    pub fn set_captures(&mut self, player: Player, stones: u8) {
        self.captures[player.index()] = stones;
    }

    /// Side to move
    #[inline]
    pub fn mover(&self) -> Player {
        self.mover
    }

    /// Hand the move to `player` when setting up a position
    #[inline]
    pub fn set_mover(&mut self, player: Player) {
        self.mover = player;
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub(crate) fn set_last_move(&mut self, pos: Option<Pos>) {
        self.last_move = pos;
    }

    #[inline]
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Identity of this position for the transposition table
    #[inline]
    pub fn key(&self) -> BoardKey {
        BoardKey {
            black: self.black,
            white: self.white,
            mover: self.mover,
            captures: self.captures,
        }
    }

    /// Iterate every occupied cell with its stone, black stones first
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.black
            .iter_ones()
            .map(|pos| (pos, Stone::Black))
            .chain(self.white.iter_ones().map(|pos| (pos, Stone::White)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{row:>3}")?;
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                let glyph = match self.get(pos) {
                    Stone::Black => 'X',
                    Stone::White => 'O',
                    Stone::Empty => '.',
                };
                if self.last_move == Some(pos) {
                    write!(f, " >{glyph}")?;
                } else {
                    write!(f, "  {glyph}")?;
                }
            }
            writeln!(f)?;
        }
        write!(
            f,
            "Black captures: {}  White captures: {}",
            self.captures(Player::Black),
            self.captures(Player::White)
        )
    }
}
