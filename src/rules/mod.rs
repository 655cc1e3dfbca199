//! Game rules.
//!
//! `GameEngine` holds one game's state and implements placement, capture,
//! turn order, undo, and scoring. Everything else in the crate only calls
//! into it.

pub mod engine;
pub mod history;
pub mod outcome;

pub use engine::GameEngine;
pub use history::{History, Snapshot};
pub use outcome::{score, Decision, GameOutcome, GamePhase, MoveOutcome, Placement, Rejection};
