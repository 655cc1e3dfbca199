//! Rule engine integration tests.

use zone_game::core::{Axis, Board, GameConfig, Player, Pos};
use zone_game::rules::{Decision, GameEngine, GamePhase, MoveOutcome, Rejection};

fn position(text: &str, turn: Player) -> GameEngine {
    let board: Board = text.parse().expect("valid board text");
    GameEngine::from_position(GameConfig::default(), board, turn).expect("valid position")
}

// =============================================================================
// Placement
// =============================================================================

#[test]
fn test_opening_move() {
    let mut engine = GameEngine::new();

    let outcome = engine.apply_move(5, 5).unwrap();

    assert!(outcome.is_success());
    assert_eq!(engine.board().get(Pos::new(5, 5)), Some(Player::Red));
    assert_eq!(engine.captured(Player::Red), 0);
    assert_eq!(engine.captured(Player::Blue), 0);
    assert_eq!(engine.turn(), Player::Blue);
}

#[test]
fn test_blue_blocked_between_red_stones() {
    let mut engine = GameEngine::new();
    engine.apply_move(4, 5).unwrap(); // Red
    engine.apply_move(0, 0).unwrap(); // Blue
    engine.apply_move(6, 5).unwrap(); // Red

    let before = engine.board().clone();
    let outcome = engine.apply_move(5, 5).unwrap();

    assert_eq!(outcome, MoveOutcome::Rejected(Rejection::Pincered(Axis::Horizontal)));
    assert_eq!(engine.board(), &before);
    assert_eq!(engine.turn(), Player::Blue);
}

#[test]
fn test_red_may_fill_between_own_stones() {
    let mut engine = GameEngine::new();
    engine.apply_move(4, 5).unwrap(); // Red
    engine.apply_move(0, 0).unwrap(); // Blue
    engine.apply_move(6, 5).unwrap(); // Red
    engine.pass_turn(); // Blue passes

    assert!(engine.apply_move(5, 5).unwrap().is_success());
}

#[test]
fn test_pincer_rule_uses_only_on_board_neighbours() {
    let engine = position(
        "
        .R........
        R.........
        ..........
        ..........
        ..........
        ..........
        ..........
        ..........
        ..........
        ..........
        ",
        Player::Blue,
    );

    // Corner (0, 0) has one on-board neighbour per axis.
    assert_eq!(engine.can_place(0, 0), Ok(true));
}

// =============================================================================
// Capture
// =============================================================================

#[test]
fn test_capture_requires_far_stone() {
    // Blue at (5, 5) with Red at (5, 4): capture only if (5, 3) is Blue.
    let mut without = GameEngine::new();
    without.apply_move(5, 4).unwrap(); // Red
    without.apply_move(5, 5).unwrap(); // Blue
    assert_eq!(without.board().get(Pos::new(5, 4)), Some(Player::Red));
    assert_eq!(without.captured(Player::Blue), 0);

    let mut with = GameEngine::new();
    with.apply_move(5, 4).unwrap(); // Red
    with.apply_move(5, 3).unwrap(); // Blue
    with.apply_move(0, 0).unwrap(); // Red
    let outcome = with.apply_move(5, 5).unwrap(); // Blue

    assert_eq!(outcome.capture_count(), 1);
    assert_eq!(with.board().get(Pos::new(5, 4)), None);
    assert_eq!(with.captured(Player::Blue), 1);
}

#[test]
fn test_capture_then_undo_round_trip() {
    let mut engine = GameEngine::new();
    engine.apply_move(5, 4).unwrap(); // Red
    engine.apply_move(5, 3).unwrap(); // Blue
    engine.apply_move(0, 0).unwrap(); // Red

    let board = engine.board().clone();
    engine.apply_move(5, 5).unwrap(); // Blue captures
    assert!(engine.undo());

    assert_eq!(engine.board(), &board);
    assert_eq!(engine.captured(Player::Blue), 0);
    assert_eq!(engine.turn(), Player::Blue);
    assert_eq!(engine.history_len(), 3);
}

#[test]
fn test_undo_all_the_way_back() {
    let mut engine = GameEngine::new();
    for (x, y) in [(1, 1), (2, 2), (3, 3), (4, 4)] {
        engine.apply_move(x, y).unwrap();
    }

    while engine.undo() {}

    assert!(engine.board().is_empty());
    assert_eq!(engine.turn(), Player::Red);
    assert_eq!(engine.history_len(), 0);
}

// =============================================================================
// Turn order and end of game
// =============================================================================

#[test]
fn test_full_small_game() {
    let mut engine = GameEngine::with_config(GameConfig::default().with_board_size(3)).unwrap();

    let opening = [
        (0, 0, Player::Red),
        (0, 1, Player::Blue),
        (2, 2, Player::Red),
        (1, 0, Player::Blue),
    ];
    for (x, y, mover) in opening {
        assert_eq!(engine.turn(), mover);
        assert!(engine.apply_move(x, y).unwrap().is_success());
    }

    // Each side takes its first legal cell in row order until nobody can move.
    let mut moves_played = opening.len();
    while !engine.is_over() {
        let pos = engine
            .board()
            .positions()
            .find(|&p| engine.check_placement(p, engine.turn()).is_ok())
            .expect("a player to move always has a placement");
        engine.apply_move(pos.x, pos.y).unwrap();
        moves_played += 1;
        assert!(moves_played < 20, "game should end on a 3x3 board");
    }

    assert_eq!(moves_played, 10);
    assert_eq!(engine.board().to_string(), "RRR\nBBR\nBBR");
    assert_eq!(engine.captured(Player::Red), 1);
    assert!(!engine.has_valid_move_for(Player::Red));
    assert!(!engine.has_valid_move_for(Player::Blue));

    let GamePhase::GameOver(result) = engine.phase() else {
        panic!("game should be over");
    };
    assert_eq!(result, engine.score_game());
    assert_eq!(result.to_string(), "Winner: Red\nRed: 5, Blue: 4");
}

#[test]
fn test_captures_break_stone_tie() {
    let mut engine = position(
        "
        R..
        B..
        ...
        ",
        Player::Red,
    );
    engine.apply_move(2, 0).unwrap(); // Red sandwiches (1, 0)
    assert_eq!(engine.captured(Player::Red), 1);
    assert_eq!(engine.board().get(Pos::new(1, 0)), None);

    engine.apply_move(1, 2).unwrap(); // Blue
    engine.pass_turn(); // Red
    engine.apply_move(2, 2).unwrap(); // Blue

    assert!(!engine.is_over());
    let outcome = engine.score_game();
    assert_eq!(outcome.winner, Player::Red);
    assert_eq!(outcome.decision, Decision::Captures);
    assert_eq!(
        outcome.to_string(),
        "Winner: Red (Captured More)\nCaptured - Red: 1, Blue: 0"
    );
}

#[test]
fn test_result_text_on_last_move() {
    let mut engine = GameEngine::with_config(GameConfig::default().with_board_size(1)).unwrap();

    let outcome = engine.apply_move(0, 0).unwrap();

    assert_eq!(
        outcome.result().map(ToString::to_string).as_deref(),
        Some("Winner: Red\nRed: 1, Blue: 0")
    );
    // Further placements are rejected and the result stays.
    assert!(!engine.apply_move(0, 0).unwrap().is_success());
    assert!(engine.is_over());
}

#[test]
fn test_pass_is_unconditional() {
    let mut engine = GameEngine::new();
    engine.apply_move(3, 3).unwrap();

    engine.pass_turn();
    assert_eq!(engine.turn(), Player::Red);
    assert_eq!(engine.history_len(), 1);

    // Undo after a pass still restores the player who made the move.
    assert!(engine.undo());
    assert_eq!(engine.turn(), Player::Red);
}
