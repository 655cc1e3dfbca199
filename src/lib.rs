//! # zone-game
//!
//! Rule engine for a two-player territory game on a square grid.
//!
//! ## Rules
//!
//! 1. **Placement**: Players alternate placing stones on empty cells. A cell
//!    flanked on both sides of one axis by opponent stones is off limits.
//!
//! 2. **Capture**: A single opponent stone sandwiched between the new stone
//!    and another of the mover's stones is removed.
//!
//! 3. **Turn Order**: A player with no legal placement is skipped. When
//!    neither player can place, the game ends.
//!
//! 4. **Scoring**: More stones wins; ties go to more captures, then to Blue.
//!
//! ## Architecture
//!
//! - **Single Owner**: Each `GameEngine` is an independent owned value.
//!   Hosts keep one per session via `SessionStore`.
//!
//! - **Persistent Data Structures**: Boards are `im-rs` vectors, so undo
//!   snapshots are O(1) and never alias the live board.
//!
//! ## Modules
//!
//! - `core`: Players, board, configuration
//! - `rules`: Game engine, undo history, outcomes and scoring
//! - `session`: Keyed store of games and serializable responses
//! - `error`: Error types
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod error;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Axis, Board, Cell, Direction, GameConfig, Player, PlayerPair, Pos};

pub use crate::error::{ConfigError, EngineError, SessionError};

pub use crate::rules::{
    Decision, GameEngine, GameOutcome, GamePhase, MoveOutcome, Placement, Rejection,
};

pub use crate::session::{
    MoveResponse, PassResponse, ResetResponse, SessionId, SessionStore, UndoResponse,
};
