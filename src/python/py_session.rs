//! Session store bindings for Python.
//!
//! Responses come back as plain dicts shaped like the JSON a browser client
//! expects, so a web handler can return them directly.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{Board, GameConfig, Player, Pos};
use crate::error::SessionError;
use crate::session::{SessionId, SessionStore};

fn to_py_err(err: SessionError) -> PyErr {
    match &err {
        SessionError::UnknownSession(_) => PyKeyError::new_err(err.to_string()),
        SessionError::Engine(inner) => PyValueError::new_err(inner.to_string()),
    }
}

fn parse_player(marker: &str) -> PyResult<Player> {
    match marker {
        "R" => Ok(Player::Red),
        "B" => Ok(Player::Blue),
        other => Err(PyValueError::new_err(format!(
            "Unknown player marker '{}' (expected 'R' or 'B')",
            other
        ))),
    }
}

fn board_rows(board: &Board) -> Vec<Vec<Option<&'static str>>> {
    board
        .rows()
        .into_iter()
        .map(|row| row.into_iter().map(|c| c.map(Player::marker)).collect())
        .collect()
}

/// Python wrapper for SessionStore.
///
/// One independent game per session id.
#[pyclass(name = "SessionStore")]
pub struct PySessionStore {
    inner: SessionStore,
}

#[pymethods]
impl PySessionStore {
    /// Create a new store.
    ///
    /// # Arguments
    /// - board_size: Edge length of every board (default: 10)
    /// - tie_break_winner: 'R' or 'B', winner of a fully tied game (default: 'B')
    /// - seed: Seed for session id generation; random when omitted
    #[new]
    #[pyo3(signature = (board_size = 10, tie_break_winner = "B", seed = None))]
    fn new(board_size: usize, tie_break_winner: &str, seed: Option<u64>) -> PyResult<Self> {
        let config = GameConfig::default()
            .with_board_size(board_size)
            .with_tie_break_winner(parse_player(tie_break_winner)?);
        let mut inner =
            SessionStore::with_config(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        if let Some(seed) = seed {
            inner.reseed(seed);
        }
        Ok(Self { inner })
    }

    /// Start a new game and return its session id.
    fn create(&mut self) -> String {
        self.inner.create().to_string()
    }

    /// Ensure a game exists for `game_id`, creating it if needed.
    fn open(&mut self, game_id: &str) {
        self.inner.create_or_get(&SessionId::from(game_id));
    }

    fn contains(&self, game_id: &str) -> bool {
        self.inner.contains(&SessionId::from(game_id))
    }

    /// Discard a game. Returns True if it existed.
    fn remove(&mut self, game_id: &str) -> bool {
        self.inner.remove(&SessionId::from(game_id)).is_some()
    }

    /// Place a stone for the player to move.
    ///
    /// Returns {success, board, turn, captured_red, captured_blue[, result]}.
    fn make_move<'py>(
        &mut self,
        py: Python<'py>,
        game_id: &str,
        x: usize,
        y: usize,
    ) -> PyResult<Bound<'py, PyDict>> {
        let response = self
            .inner
            .apply_move(&SessionId::from(game_id), x, y)
            .map_err(to_py_err)?;

        let dict = PyDict::new_bound(py);
        dict.set_item("success", response.success)?;
        dict.set_item("board", board_rows(&response.board))?;
        dict.set_item("turn", response.turn.marker())?;
        dict.set_item("captured_red", response.captured_red)?;
        dict.set_item("captured_blue", response.captured_blue)?;
        if let Some(result) = response.result {
            dict.set_item("result", result)?;
        }
        Ok(dict)
    }

    /// Revert the last placement.
    ///
    /// Returns {board, turn, success, captured_red, captured_blue}.
    fn undo<'py>(&mut self, py: Python<'py>, game_id: &str) -> PyResult<Bound<'py, PyDict>> {
        let response = self
            .inner
            .undo(&SessionId::from(game_id))
            .map_err(to_py_err)?;

        let dict = PyDict::new_bound(py);
        dict.set_item("board", board_rows(&response.board))?;
        dict.set_item("turn", response.turn.marker())?;
        dict.set_item("success", response.success)?;
        dict.set_item("captured_red", response.captured_red)?;
        dict.set_item("captured_blue", response.captured_blue)?;
        Ok(dict)
    }

    /// Hand the turn to the other player. Returns {turn}.
    fn pass_turn<'py>(&mut self, py: Python<'py>, game_id: &str) -> PyResult<Bound<'py, PyDict>> {
        let response = self
            .inner
            .pass(&SessionId::from(game_id))
            .map_err(to_py_err)?;

        let dict = PyDict::new_bound(py);
        dict.set_item("turn", response.turn.marker())?;
        Ok(dict)
    }

    /// Start the game over. Returns {board, turn, captured_red, captured_blue}.
    fn reset<'py>(&mut self, py: Python<'py>, game_id: &str) -> PyResult<Bound<'py, PyDict>> {
        let response = self
            .inner
            .reset(&SessionId::from(game_id))
            .map_err(to_py_err)?;

        let dict = PyDict::new_bound(py);
        dict.set_item("board", board_rows(&response.board))?;
        dict.set_item("turn", response.turn.marker())?;
        dict.set_item("captured_red", response.captured_red)?;
        dict.set_item("captured_blue", response.captured_blue)?;
        Ok(dict)
    }

    /// Board as an int8 array indexed [x, y]: 0 empty, 1 red, -1 blue.
    fn board_array<'py>(&self, py: Python<'py>, game_id: &str) -> PyResult<Bound<'py, PyArray2<i8>>> {
        let id = SessionId::from(game_id);
        let engine = self
            .inner
            .get(&id)
            .ok_or_else(|| to_py_err(SessionError::UnknownSession(id.clone())))?;

        let board = engine.board();
        let size = board.size();
        let flat: Vec<i8> = board
            .positions()
            .map(|pos: Pos| match board.get(pos) {
                Some(Player::Red) => 1,
                Some(Player::Blue) => -1,
                None => 0,
            })
            .collect();

        PyArray1::from_vec_bound(py, flat).reshape([size, size])
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "SessionStore(sessions={}, board_size={})",
            self.inner.len(),
            self.inner.config().board_size
        )
    }
}
