//! Game configuration.
//!
//! The rule set itself is fixed; configuration only covers the board
//! dimensions and which player takes a fully tied game.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::error::ConfigError;

/// Board size used by the reference game.
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Largest supported board edge.
pub const MAX_BOARD_SIZE: usize = 64;

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use zone_game::core::{GameConfig, Player};
///
/// let config = GameConfig::default()
///     .with_board_size(8)
///     .with_tie_break_winner(Player::Red);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.board_size, 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Edge length of the square board.
    pub board_size: usize,

    /// Winner when stone counts and capture counts are both tied.
    pub tie_break_winner: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            tie_break_winner: Player::Blue,
        }
    }
}

impl GameConfig {
    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the tie-break winner.
    #[must_use]
    pub fn with_tie_break_winner(mut self, player: Player) -> Self {
        self.tie_break_winner = player;
        self
    }

    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::InvalidBoardSize(self.board_size));
        }
        Ok(())
    }
}
