//! Keyed store of independent games.
//!
//! Each session id owns one `GameEngine`. Engines are created lazily on
//! first access and replaced wholesale on reset. Operations other than
//! creation fail with `SessionError::UnknownSession` for ids the store has
//! never seen.
//!
//! The store is single-threaded; a host serving concurrent requests should
//! put it (or each engine) behind its own lock.
//!
//! ## Usage
//!
//! ```
//! use zone_game::session::SessionStore;
//!
//! let mut store = SessionStore::with_seed(7);
//! let id = store.create();
//!
//! let response = store.apply_move(&id, 5, 5).unwrap();
//! assert!(response.success);
//!
//! let undone = store.undo(&id).unwrap();
//! assert!(undone.success);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use super::response::{MoveResponse, PassResponse, ResetResponse, UndoResponse};
use super::SessionId;
use crate::core::GameConfig;
use crate::error::{ConfigError, SessionError, SessionResult};
use crate::rules::GameEngine;

/// Session id → game map.
#[derive(Clone, Debug)]
pub struct SessionStore {
    /// Initial state every new or reset game is cloned from.
    blank: GameEngine,
    games: FxHashMap<SessionId, GameEngine>,
    rng: ChaCha8Rng,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create an empty store with the default game configuration.
    ///
    /// Session ids are drawn from an entropy-seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::build(GameEngine::new(), ChaCha8Rng::from_entropy())
    }

    /// Create an empty store whose minted ids are deterministic.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::build(GameEngine::new(), ChaCha8Rng::seed_from_u64(seed))
    }

    /// Create an empty store whose games all use `config`.
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        let blank = GameEngine::with_config(config)?;
        Ok(Self::build(blank, ChaCha8Rng::from_entropy()))
    }

    fn build(blank: GameEngine, rng: ChaCha8Rng) -> Self {
        Self {
            blank,
            games: FxHashMap::default(),
            rng,
        }
    }

    /// Reseed the id generator so later ids are deterministic.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Configuration applied to every game in this store.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.blank.config()
    }

    // === Lifecycle ===

    /// Mint a fresh session id and start its game.
    pub fn create(&mut self) -> SessionId {
        let id = loop {
            let candidate = SessionId::new(format!("{:032x}", self.rng.gen::<u128>()));
            if !self.games.contains_key(&candidate) {
                break candidate;
            }
        };
        self.games.insert(id.clone(), self.blank.clone());
        info!(session = %id, "session created");
        id
    }

    /// Get the game for `id`, creating it on first reference.
    pub fn create_or_get(&mut self, id: &SessionId) -> &mut GameEngine {
        if !self.games.contains_key(id) {
            info!(session = %id, "session created");
        }
        self.games
            .entry(id.clone())
            .or_insert_with(|| self.blank.clone())
    }

    /// Get the game for `id` without creating it.
    #[must_use]
    pub fn get(&self, id: &SessionId) -> Option<&GameEngine> {
        self.games.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &SessionId) -> bool {
        self.games.contains_key(id)
    }

    /// Discard the game for `id`.
    pub fn remove(&mut self, id: &SessionId) -> Option<GameEngine> {
        let removed = self.games.remove(id);
        if removed.is_some() {
            debug!(session = %id, "session removed");
        }
        removed
    }

    /// Number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    // === Game operations ===

    /// Place a stone for whoever is to move in session `id`.
    pub fn apply_move(&mut self, id: &SessionId, x: usize, y: usize) -> SessionResult<MoveResponse> {
        let engine = self.engine_mut(id)?;
        let outcome = engine.apply_move(x, y)?;
        Ok(MoveResponse::new(engine, outcome))
    }

    /// Revert the last placement in session `id`.
    pub fn undo(&mut self, id: &SessionId) -> SessionResult<UndoResponse> {
        let engine = self.engine_mut(id)?;
        let success = engine.undo();
        Ok(UndoResponse::new(engine, success))
    }

    /// Hand the turn to the other player in session `id`.
    pub fn pass(&mut self, id: &SessionId) -> SessionResult<PassResponse> {
        let engine = self.engine_mut(id)?;
        engine.pass_turn();
        Ok(PassResponse {
            turn: engine.turn(),
        })
    }

    /// Replace the game in session `id` with a fresh one.
    pub fn reset(&mut self, id: &SessionId) -> SessionResult<ResetResponse> {
        let Some(engine) = self.games.get_mut(id) else {
            warn!(session = %id, "reset for unknown session");
            return Err(SessionError::UnknownSession(id.clone()));
        };
        *engine = self.blank.clone();
        info!(session = %id, "session reset");
        Ok(ResetResponse::new(engine))
    }

    fn engine_mut(&mut self, id: &SessionId) -> SessionResult<&mut GameEngine> {
        match self.games.get_mut(id) {
            Some(engine) => Ok(engine),
            None => {
                warn!(session = %id, "unknown session");
                Err(SessionError::UnknownSession(id.clone()))
            }
        }
    }
}
