//! Move outcomes, game phases, and final scoring.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Axis, Board, Player, PlayerPair, Pos};

/// Why a placement was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Target cell already holds a stone.
    Occupied,
    /// Both in-bounds neighbours along the axis hold the opponent's stones.
    Pincered(Axis),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Occupied => f.write_str("cell is occupied"),
            Rejection::Pincered(Axis::Vertical) => f.write_str("cell is pincered vertically"),
            Rejection::Pincered(Axis::Horizontal) => f.write_str("cell is pincered horizontally"),
        }
    }
}

/// A successful placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Where the stone went.
    pub pos: Pos,

    /// Who placed it.
    pub player: Player,

    /// Opponent stones removed by this move (at most one per direction).
    pub captured: SmallVec<[Pos; 4]>,

    /// The opponent had no legal move, so the mover plays again.
    pub forced_pass: bool,

    /// Final result if this move ended the game.
    pub result: Option<GameOutcome>,
}

/// Result of `GameEngine::apply_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Placement was illegal; nothing changed.
    Rejected(Rejection),
    /// Placement was applied.
    Placed(Placement),
}

impl MoveOutcome {
    /// Check whether the move was applied.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, MoveOutcome::Placed(_))
    }

    /// Final result, present only when this move ended the game.
    #[must_use]
    pub fn result(&self) -> Option<&GameOutcome> {
        match self {
            MoveOutcome::Placed(placement) => placement.result.as_ref(),
            MoveOutcome::Rejected(_) => None,
        }
    }

    /// Number of stones captured by the move.
    #[must_use]
    pub fn capture_count(&self) -> usize {
        match self {
            MoveOutcome::Placed(placement) => placement.captured.len(),
            MoveOutcome::Rejected(_) => 0,
        }
    }
}

/// Where the game stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for this player to place a stone.
    AwaitingMove(Player),
    /// Neither player can place; the game is decided.
    GameOver(GameOutcome),
}

/// Which key decided the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// More stones on the board.
    Stones,
    /// Stones tied; more lifetime captures.
    Captures,
    /// Everything tied; fixed tie-break winner.
    DefaultRule,
}

/// Final result of a game.
///
/// Displays as the two-line result text shown to players:
///
/// ```
/// use zone_game::core::{Board, Player, PlayerPair};
/// use zone_game::rules::score;
///
/// let board: Board = "RR\nB.".parse().unwrap();
/// let outcome = score(&board, PlayerPair::new(0, 0), Player::Blue);
///
/// assert_eq!(outcome.winner, Player::Red);
/// assert_eq!(outcome.to_string(), "Winner: Red\nRed: 2, Blue: 1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: Player,
    pub decision: Decision,
    pub stones: PlayerPair<usize>,
    pub captured: PlayerPair<u32>,
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let red = Player::Red;
        let blue = Player::Blue;
        match self.decision {
            Decision::Stones => write!(
                f,
                "Winner: {}\nRed: {}, Blue: {}",
                self.winner, self.stones[red], self.stones[blue]
            ),
            Decision::Captures => write!(
                f,
                "Winner: {} (Captured More)\nCaptured - Red: {}, Blue: {}",
                self.winner, self.captured[red], self.captured[blue]
            ),
            Decision::DefaultRule => write!(
                f,
                "Winner: {} (Default Rule)\nCaptured - Red: {}, Blue: {}",
                self.winner, self.captured[red], self.captured[blue]
            ),
        }
    }
}

/// Score a finished board.
///
/// Stone count decides first, lifetime captures second, and a full tie goes
/// to `tie_break_winner`. There is no draw.
#[must_use]
pub fn score(board: &Board, captured: PlayerPair<u32>, tie_break_winner: Player) -> GameOutcome {
    let stones = board.counts();
    let red = Player::Red;
    let blue = Player::Blue;

    let (winner, decision) = if stones[red] != stones[blue] {
        let winner = if stones[red] > stones[blue] { red } else { blue };
        (winner, Decision::Stones)
    } else if captured[red] != captured[blue] {
        let winner = if captured[red] > captured[blue] { red } else { blue };
        (winner, Decision::Captures)
    } else {
        (tie_break_winner, Decision::DefaultRule)
    };

    GameOutcome {
        winner,
        decision,
        stones,
        captured,
    }
}
