//! The rule engine for one game.
//!
//! `GameEngine` owns the board, whose turn it is, both capture counters, and
//! the undo history. All rules live here:
//!
//! - **Placement**: a stone goes on an empty cell unless both in-bounds
//!   neighbours along one axis hold the opponent's stones. A neighbour off
//!   the board never counts, so edge cells are only blockable along the
//!   axis that has both neighbours.
//! - **Capture**: after placing, each orthogonal neighbour holding an
//!   opponent stone is removed when the cell beyond it holds the mover's
//!   stone. One stone per direction; groups are never flooded.
//! - **Turn order**: turns alternate. If the next player cannot place
//!   anywhere, the mover plays again. If the mover cannot place either, the
//!   game is over and scored.
//!
//! ## Example
//!
//! ```
//! use zone_game::core::{Player, Pos};
//! use zone_game::rules::GameEngine;
//!
//! let mut engine = GameEngine::new();
//! let outcome = engine.apply_move(5, 5).unwrap();
//!
//! assert!(outcome.is_success());
//! assert_eq!(engine.board().get(Pos::new(5, 5)), Some(Player::Red));
//! assert_eq!(engine.turn(), Player::Blue);
//!
//! assert!(engine.undo());
//! assert!(engine.board().is_empty());
//! assert_eq!(engine.turn(), Player::Red);
//! ```

use smallvec::SmallVec;
use tracing::{debug, info};

use super::history::{History, Snapshot};
use super::outcome::{score, GameOutcome, GamePhase, MoveOutcome, Placement, Rejection};
use crate::core::{Axis, Board, Direction, GameConfig, Player, PlayerPair, Pos};
use crate::error::{ConfigError, EngineResult};

/// State and rules for a single game.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    turn: Player,
    captured: PlayerPair<u32>,
    history: History,
    result: Option<GameOutcome>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Create a game with the default configuration (10x10, Blue wins ties).
    #[must_use]
    pub fn new() -> Self {
        Self::fresh(GameConfig::default())
    }

    /// Create a game with a custom configuration.
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::fresh(config))
    }

    /// Start from an arbitrary position with `turn` to move.
    ///
    /// The board size overrides `config.board_size`. Capture counters and
    /// history start empty.
    pub fn from_position(
        mut config: GameConfig,
        board: Board,
        turn: Player,
    ) -> Result<Self, ConfigError> {
        config.board_size = board.size();
        config.validate()?;
        Ok(Self {
            config,
            board,
            turn,
            captured: PlayerPair::default(),
            history: History::new(),
            result: None,
        })
    }

    fn fresh(config: GameConfig) -> Self {
        Self {
            board: Board::new(config.board_size),
            config,
            turn: Player::Red,
            captured: PlayerPair::default(),
            history: History::new(),
            result: None,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Opponent stones removed by `player` so far.
    #[must_use]
    pub fn captured(&self, player: Player) -> u32 {
        self.captured[player]
    }

    /// Both capture counters.
    #[must_use]
    pub fn captured_counts(&self) -> PlayerPair<u32> {
        self.captured
    }

    /// Number of placements that `undo` can still revert.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Final result once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<&GameOutcome> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Current state of the turn machine.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        match &self.result {
            Some(outcome) => GamePhase::GameOver(outcome.clone()),
            None => GamePhase::AwaitingMove(self.turn),
        }
    }

    // === Placement rules ===

    /// Check whether `player` may place a stone at `pos`. Pure.
    ///
    /// Panics if `pos` is off the board.
    pub fn check_placement(&self, pos: Pos, player: Player) -> Result<(), Rejection> {
        if self.board.get(pos).is_some() {
            return Err(Rejection::Occupied);
        }

        let opponent = Some(player.opponent());
        for axis in [Axis::Vertical, Axis::Horizontal] {
            let pincered = axis.directions().into_iter().all(|dir| {
                self.board
                    .neighbor(pos, dir)
                    .is_some_and(|n| self.board.get(n) == opponent)
            });
            if pincered {
                return Err(Rejection::Pincered(axis));
            }
        }

        Ok(())
    }

    /// Check whether the player to move may place at `(x, y)`.
    pub fn can_place(&self, x: usize, y: usize) -> EngineResult<bool> {
        let pos = self.board.pos(x, y)?;
        Ok(self.check_placement(pos, self.turn).is_ok())
    }

    /// Check whether the player to move has any legal placement.
    #[must_use]
    pub fn has_valid_move(&self) -> bool {
        self.has_valid_move_for(self.turn)
    }

    /// Check whether `player` has any legal placement.
    #[must_use]
    pub fn has_valid_move_for(&self, player: Player) -> bool {
        self.board
            .positions()
            .any(|pos| self.check_placement(pos, player).is_ok())
    }

    // === Operations ===

    /// Place a stone for the player to move at `(x, y)`.
    ///
    /// Returns `Err` only for coordinates off the board. An illegal
    /// placement is `Ok(MoveOutcome::Rejected)` and changes nothing.
    pub fn apply_move(&mut self, x: usize, y: usize) -> EngineResult<MoveOutcome> {
        let pos = self.board.pos(x, y)?;
        let mover = self.turn;

        if let Err(rejection) = self.check_placement(pos, mover) {
            debug!(%pos, player = %mover, %rejection, "placement rejected");
            return Ok(MoveOutcome::Rejected(rejection));
        }

        self.history.push(Snapshot {
            board: self.board.clone(),
            captured: self.captured,
            turn: mover,
        });

        self.board.set(pos, Some(mover));
        let captured = self.resolve_captures(pos, mover);
        self.captured[mover] += captured.len() as u32;
        debug!(%pos, player = %mover, captures = captured.len(), "stone placed");

        self.turn = mover.opponent();
        let mut forced_pass = false;
        let mut result = None;

        if !self.has_valid_move() {
            forced_pass = true;
            self.turn = mover;
            debug!(skipped = %mover.opponent(), "no legal placement, turn passes back");

            if !self.has_valid_move() {
                let outcome = self.score_game();
                info!(
                    winner = %outcome.winner,
                    decision = ?outcome.decision,
                    "game over"
                );
                self.result = Some(outcome.clone());
                result = Some(outcome);
            }
        }

        Ok(MoveOutcome::Placed(Placement {
            pos,
            player: mover,
            captured,
            forced_pass,
            result,
        }))
    }

    /// Remove opponent stones sandwiched between `pos` and another of the
    /// mover's stones, one per direction.
    fn resolve_captures(&mut self, pos: Pos, mover: Player) -> SmallVec<[Pos; 4]> {
        let opponent = Some(mover.opponent());
        let captured: SmallVec<[Pos; 4]> = Direction::ALL
            .into_iter()
            .filter_map(|dir| {
                let adjacent = self.board.neighbor(pos, dir)?;
                let beyond = self.board.neighbor(adjacent, dir)?;
                (self.board.get(adjacent) == opponent && self.board.get(beyond) == Some(mover))
                    .then_some(adjacent)
            })
            .collect();

        for &stone in &captured {
            self.board.set(stone, None);
        }

        captured
    }

    /// Revert the most recent placement, including its captures.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            debug!("undo with empty history");
            return false;
        };

        self.board = snapshot.board;
        self.captured = snapshot.captured;
        self.turn = snapshot.turn;
        self.result = None;
        debug!(turn = %self.turn, remaining = self.history.len(), "move undone");
        true
    }

    /// Hand the turn to the other player. No legality check.
    pub fn pass_turn(&mut self) {
        self.turn = self.turn.opponent();
        debug!(turn = %self.turn, "turn passed");
    }

    /// Return to the initial state, keeping the configuration.
    pub fn reset(&mut self) {
        *self = Self::fresh(self.config.clone());
    }

    /// Score the current board.
    ///
    /// Meaningful once neither player can place; `apply_move` calls it when
    /// the game ends.
    #[must_use]
    pub fn score_game(&self) -> GameOutcome {
        score(&self.board, self.captured, self.config.tie_break_winner)
    }
}
