//! Python bindings for the zone-game engine.
//!
//! Lets a Python web app host games without reimplementing the rules.
//!
//! # Quick Start
//!
//! ```python
//! import zone_game
//!
//! store = zone_game.SessionStore()
//! game_id = store.create()
//!
//! response = store.make_move(game_id, 5, 5)
//! assert response["success"]
//!
//! store.undo(game_id)
//! store.pass_turn(game_id)
//! store.reset(game_id)
//! ```

use pyo3::prelude::*;

mod py_session;

pub use py_session::*;

/// zone_game: sandwich-capture board game engine.
#[pymodule]
fn zone_game(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySessionStore>()?;
    m.add("BOARD_SIZE", crate::core::DEFAULT_BOARD_SIZE)?;
    Ok(())
}
