//! Error and result definitions.
//!
//! Illegal placements and undo on an empty history are ordinary outcomes,
//! not errors. The types here cover caller contract violations only.

use crate::session::SessionId;

/// Errors raised by [`GameEngine`](crate::rules::GameEngine) operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Coordinate ({x}, {y}) is outside the {size}x{size} board.")]
    OutOfBounds { x: usize, y: usize, size: usize },
    #[error("Invalid board text: {0}")]
    InvalidBoard(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while validating a [`GameConfig`](crate::core::GameConfig).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board size {0} is not supported (expected 1..={max}).", max = crate::core::MAX_BOARD_SIZE)]
    InvalidBoardSize(usize),
}

/// Errors raised by the [`SessionStore`](crate::session::SessionStore).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Game not found: {0}")]
    UnknownSession(SessionId),
    #[error("Engine rejected the request.")]
    Engine(#[from] EngineError),
}

pub type EngineResult<T> = Result<T, EngineError>;
pub type SessionResult<T> = Result<T, SessionError>;
