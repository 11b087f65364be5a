use std::path::PathBuf;

use crate::board::Pos;

/// Errors reported by the rule engine and the move search.
///
/// Everything except `NoLegalMoves` and `NothingToUndo` is an invalid move:
/// the board is left untouched and the caller may simply try another cell.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("move ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("cell {0} is already occupied")]
    Occupied(Pos),

    #[error("the game is already over")]
    GameOver,

    #[error("move {0} would create a double-three")]
    DoubleThree(Pos),

    #[error("no legal moves remain")]
    NoLegalMoves,

    #[error("no move to undo")]
    NothingToUndo,
}

impl GameError {
    /// True for the rejections a human move can trigger
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            GameError::OutOfBounds { .. }
                | GameError::Occupied(_)
                | GameError::GameOver
                | GameError::DoubleThree(_)
        )
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        let err = GameError::DoubleThree(Pos::new(9, 9));
        assert_eq!(err.to_string(), "move (9, 9) would create a double-three");

        let err = GameError::OutOfBounds { row: -1, col: 20 };
        assert_eq!(err.to_string(), "move (-1, 20) is outside the board");
    }

    #[test]
    fn test_invalid_move_classification() {
        assert!(GameError::Occupied(Pos::new(0, 0)).is_invalid_move());
        assert!(GameError::GameOver.is_invalid_move());
        assert!(!GameError::NoLegalMoves.is_invalid_move());
        assert!(!GameError::NothingToUndo.is_invalid_move());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("engine.max_depth must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: engine.max_depth must be > 0"
        );
    }
}
