//! Response values returned by the session store.
//!
//! Each serializes to the JSON object a web front end consumes. Boards
//! serialize as rows (`board[x][y]`) of `"R"`, `"B"`, or `null`.

use serde::Serialize;

use crate::core::{Board, Player};
use crate::rules::{GameEngine, MoveOutcome};

/// Result of a move request.
#[derive(Clone, Debug, Serialize)]
pub struct MoveResponse {
    pub success: bool,
    pub board: Board,
    pub turn: Player,
    pub captured_red: u32,
    pub captured_blue: u32,
    /// Result text, present only when this move ended the game.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip)]
    pub outcome: MoveOutcome,
}

impl MoveResponse {
    pub(crate) fn new(engine: &GameEngine, outcome: MoveOutcome) -> Self {
        Self {
            success: outcome.is_success(),
            board: engine.board().clone(),
            turn: engine.turn(),
            captured_red: engine.captured(Player::Red),
            captured_blue: engine.captured(Player::Blue),
            result: outcome.result().map(ToString::to_string),
            outcome,
        }
    }
}

/// Result of an undo request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UndoResponse {
    pub board: Board,
    pub turn: Player,
    pub success: bool,
    pub captured_red: u32,
    pub captured_blue: u32,
}

impl UndoResponse {
    pub(crate) fn new(engine: &GameEngine, success: bool) -> Self {
        Self {
            board: engine.board().clone(),
            turn: engine.turn(),
            success,
            captured_red: engine.captured(Player::Red),
            captured_blue: engine.captured(Player::Blue),
        }
    }
}

/// Result of a pass request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PassResponse {
    pub turn: Player,
}

/// Result of a reset request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResetResponse {
    pub board: Board,
    pub turn: Player,
    pub captured_red: u32,
    pub captured_blue: u32,
}

impl ResetResponse {
    pub(crate) fn new(engine: &GameEngine) -> Self {
        Self {
            board: engine.board().clone(),
            turn: engine.turn(),
            captured_red: engine.captured(Player::Red),
            captured_blue: engine.captured(Player::Blue),
        }
    }
}
