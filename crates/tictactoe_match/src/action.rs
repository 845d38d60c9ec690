//! First-class move actions.
//!
//! Moves are domain events, not side effects: they carry the caller's intent
//! and can be validated, serialized, and replayed independently of execution.

use crate::types::{PlayerId, Tile};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// A move: `player` attempting to place the active mark at `tile`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Identity attempting the move.
    pub player: PlayerId,
    /// Target cell.
    pub tile: Tile,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: PlayerId, tile: Tile) -> Self {
        Self { player, tile }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.player, self.tile)
    }
}
