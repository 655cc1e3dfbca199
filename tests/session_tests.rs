//! Session store integration tests.
//!
//! These drive the store the way a request handler would and check the
//! JSON each response serializes to.

use serde_json::json;

use zone_game::core::{GameConfig, Player};
use zone_game::error::SessionError;
use zone_game::session::{SessionId, SessionStore};

// =============================================================================
// Request flow
// =============================================================================

#[test]
fn test_move_undo_pass_reset_flow() {
    let mut store = SessionStore::with_seed(42);
    let id = store.create();

    let moved = store.apply_move(&id, 5, 5).unwrap();
    assert!(moved.success);
    assert_eq!(moved.turn, Player::Blue);
    assert!(moved.result.is_none());

    let passed = store.pass(&id).unwrap();
    assert_eq!(passed.turn, Player::Red);

    let undone = store.undo(&id).unwrap();
    assert!(undone.success);
    assert!(undone.board.is_empty());
    assert_eq!(undone.turn, Player::Red);

    let again = store.undo(&id).unwrap();
    assert!(!again.success);

    store.apply_move(&id, 1, 1).unwrap();
    let reset = store.reset(&id).unwrap();
    assert!(reset.board.is_empty());
    assert_eq!(reset.turn, Player::Red);
    assert_eq!(reset.captured_red, 0);
    assert_eq!(reset.captured_blue, 0);
}

#[test]
fn test_failed_move_reports_unchanged_state() {
    let mut store = SessionStore::new();
    let id = SessionId::from("table-7");
    store.create_or_get(&id);

    store.apply_move(&id, 2, 2).unwrap();
    let failed = store.apply_move(&id, 2, 2).unwrap();

    assert!(!failed.success);
    assert_eq!(failed.turn, Player::Blue);
    assert_eq!(failed.board.count(Player::Red), 1);
}

#[test]
fn test_unknown_session_is_distinct_from_illegal_move() {
    let mut store = SessionStore::new();
    let id = SessionId::from("nobody");

    match store.apply_move(&id, 0, 0) {
        Err(SessionError::UnknownSession(missing)) => assert_eq!(missing, id),
        other => panic!("expected unknown session, got {:?}", other),
    }
    assert_eq!(
        store.pass(&id).unwrap_err().to_string(),
        "Game not found: nobody"
    );
}

#[test]
fn test_game_over_reported_through_store() {
    let config = GameConfig::default().with_board_size(2);
    let mut store = SessionStore::with_config(config).unwrap();
    let id = store.create();

    for (x, y) in [(0, 0), (1, 1), (0, 1)] {
        assert!(store.apply_move(&id, x, y).unwrap().result.is_none());
    }
    let last = store.apply_move(&id, 1, 0).unwrap();

    assert!(last.success);
    assert_eq!(
        last.result.as_deref(),
        Some("Winner: Blue (Default Rule)\nCaptured - Red: 0, Blue: 0")
    );
}

// =============================================================================
// Wire shape
// =============================================================================

#[test]
fn test_move_response_json() {
    let config = GameConfig::default().with_board_size(3);
    let mut store = SessionStore::with_config(config).unwrap();
    let id = store.create();

    let response = store.apply_move(&id, 0, 2).unwrap();
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(
        value,
        json!({
            "success": true,
            "board": [[null, null, "R"], [null, null, null], [null, null, null]],
            "turn": "B",
            "captured_red": 0,
            "captured_blue": 0,
        })
    );
}

#[test]
fn test_terminal_move_json_includes_result() {
    let config = GameConfig::default().with_board_size(1);
    let mut store = SessionStore::with_config(config).unwrap();
    let id = store.create();

    let value = serde_json::to_value(store.apply_move(&id, 0, 0).unwrap()).unwrap();

    assert_eq!(value["result"], "Winner: Red\nRed: 1, Blue: 0");
    assert_eq!(value["board"], json!([["R"]]));
}

#[test]
fn test_undo_and_reset_json() {
    let mut store = SessionStore::with_config(GameConfig::default().with_board_size(2)).unwrap();
    let id = store.create();
    store.apply_move(&id, 1, 0).unwrap();

    let undo = serde_json::to_value(store.undo(&id).unwrap()).unwrap();
    assert_eq!(
        undo,
        json!({
            "board": [[null, null], [null, null]],
            "turn": "R",
            "success": true,
            "captured_red": 0,
            "captured_blue": 0,
        })
    );

    let reset = serde_json::to_value(store.reset(&id).unwrap()).unwrap();
    assert_eq!(reset["turn"], "R");
    assert!(reset.get("success").is_none());

    let pass = serde_json::to_value(store.pass(&id).unwrap()).unwrap();
    assert_eq!(pass, json!({ "turn": "B" }));
}
