//! Core game types: players, board, configuration.
//!
//! Pure data. Everything that interprets the board lives in `rules`.

pub mod player;
pub mod board;
pub mod config;

pub use player::{Player, PlayerPair};
pub use board::{Axis, Board, Cell, Direction, Pos};
pub use config::{GameConfig, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
