//! Pattern scores for Gomoku evaluation
//!
//! A run is a maximal line of same-colored stones on one axis. It is scored
//! by its length and by how many of its two ends are open (empty cell) rather
//! than blocked (opponent stone or board edge).

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row
    pub const FIVE: i32 = 10_000;
    /// Open four: _OOOO_
    pub const LIVE_FOUR: i32 = 5_000;
    /// Four with one end blocked; halved when both are
    pub const DEAD_FOUR: i32 = 1_000;
    /// Open three: _OOO_
    pub const LIVE_THREE: i32 = 500;
    pub const DEAD_THREE: i32 = 100;
    /// Open two: _OO_
    pub const LIVE_TWO: i32 = 50;
    pub const DEAD_TWO: i32 = 10;
    pub const SINGLE: i32 = 1;

    /// Terminal score for a decided game
    pub const WIN: i32 = 10_000;
    /// Per captured stone
    pub const CAPTURE: i32 = 200;
    /// Corner stone bonus, before the position weight
    pub const CORNER: i32 = 10;
    pub const POSITION_WEIGHT: i32 = 5;
    pub const MOBILITY_WEIGHT: i32 = 2;
}

/// Shape class of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunKind {
    Five,
    LiveFour,
    DeadFour,
    LiveThree,
    DeadThree,
    LiveTwo,
    DeadTwo,
    Single,
}

impl RunKind {
    pub const ALL: [RunKind; 8] = [
        RunKind::Five,
        RunKind::LiveFour,
        RunKind::DeadFour,
        RunKind::LiveThree,
        RunKind::DeadThree,
        RunKind::LiveTwo,
        RunKind::DeadTwo,
        RunKind::Single,
    ];

    /// Classify a run of `len` stones with `open_ends` (0..=2) open ends
    pub fn classify(len: u32, open_ends: u8) -> RunKind {
        let live = open_ends == 2;
        match len {
            n if n >= 5 => RunKind::Five,
            4 if live => RunKind::LiveFour,
            4 => RunKind::DeadFour,
            3 if live => RunKind::LiveThree,
            3 => RunKind::DeadThree,
            2 if live => RunKind::LiveTwo,
            2 => RunKind::DeadTwo,
            _ => RunKind::Single,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Score of a run of `len` stones with `open_ends` open ends.
///
/// Dead runs closed on both sides are worth half a dead run.
pub fn run_score(len: u32, open_ends: u8) -> i32 {
    let base = match RunKind::classify(len, open_ends) {
        RunKind::Five => return PatternScore::FIVE,
        RunKind::LiveFour => return PatternScore::LIVE_FOUR,
        RunKind::LiveThree => return PatternScore::LIVE_THREE,
        RunKind::LiveTwo => return PatternScore::LIVE_TWO,
        RunKind::Single => return PatternScore::SINGLE,
        RunKind::DeadFour => PatternScore::DEAD_FOUR,
        RunKind::DeadThree => PatternScore::DEAD_THREE,
        RunKind::DeadTwo => PatternScore::DEAD_TWO,
    };
    if open_ends == 0 {
        base / 2
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_score_table() {
        assert_eq!(run_score(6, 0), PatternScore::FIVE);
        assert_eq!(run_score(4, 2), 5_000);
        assert_eq!(run_score(4, 1), 1_000);
        assert_eq!(run_score(4, 0), 500);
        assert_eq!(run_score(3, 2), 500);
        assert_eq!(run_score(3, 1), 100);
        assert_eq!(run_score(3, 0), 50);
        assert_eq!(run_score(2, 2), 50);
        assert_eq!(run_score(2, 1), 10);
        assert_eq!(run_score(2, 0), 5);
        assert_eq!(run_score(1, 0), 1);
        assert_eq!(run_score(1, 2), 1);
    }

    #[test]
    fn test_classify() {
        assert_eq!(RunKind::classify(5, 0), RunKind::Five);
        assert_eq!(RunKind::classify(3, 1), RunKind::DeadThree);
        assert_eq!(RunKind::classify(2, 2), RunKind::LiveTwo);
    }
}
