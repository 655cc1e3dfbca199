//! Undo history: a stack of immutable pre-move snapshots.
//!
//! Boards are `im`-backed, so each snapshot shares structure with the board
//! that follows it and pushing one is O(1).

use im::Vector;

use crate::core::{Board, Player, PlayerPair};

/// State captured immediately before a successful placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub captured: PlayerPair<u32>,
    /// Player who made the move, so undo restores the exact turn even after
    /// a forced pass.
    pub turn: Player,
}

/// Stack of snapshots, most recent last.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vector<Snapshot>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a snapshot.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push_back(snapshot);
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop_back()
    }

    /// Most recent snapshot without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Snapshot> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
