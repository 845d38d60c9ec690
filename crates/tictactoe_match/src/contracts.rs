//! Precondition gates for move validation.
//!
//! Each gate is a named precondition in the Hoare style: {P} play {Q}.
//! [`LegalMove`] composes them in the order the state machine rejects,
//! so every illegal call maps to exactly one [`GameError`] kind.

use crate::error::GameError;
use crate::game::Game;
use crate::types::{PlayerId, Tile};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the tile coordinates are on the 3x3 grid.
pub struct TileInBounds;

impl TileInBounds {
    /// Rejects coordinates outside `[0, 2]`.
    #[instrument]
    pub fn check(tile: &Tile) -> Result<(), GameError> {
        if tile.in_bounds() {
            Ok(())
        } else {
            Err(GameError::TileOutOfBounds)
        }
    }
}

/// Precondition: the record has not reached a terminal state.
pub struct GameActive;

impl GameActive {
    /// Rejects moves against a `Won` or `Tie` record.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), GameError> {
        if game.is_active() {
            Ok(())
        } else {
            Err(GameError::GameAlreadyOver)
        }
    }
}

/// Precondition: the caller owns the current turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects callers other than the mover the turn parity expects.
    #[instrument(skip(game))]
    pub fn check(game: &Game, caller: &PlayerId) -> Result<(), GameError> {
        if game.current_player() == caller {
            Ok(())
        } else {
            Err(GameError::NotPlayerTurn)
        }
    }
}

/// Precondition: the target cell is empty.
pub struct TileUnset;

impl TileUnset {
    /// Rejects moves onto an occupied cell.
    #[instrument(skip(game))]
    pub fn check(game: &Game, tile: &Tile) -> Result<(), GameError> {
        if game.board().is_empty(*tile) {
            Ok(())
        } else {
            Err(GameError::TileAlreadySet)
        }
    }
}

/// Composite precondition: a move is legal when every gate passes.
pub struct LegalMove;

impl LegalMove {
    /// Validates bounds, then terminal state, then turn ownership, then
    /// occupancy. The first failing gate decides the rejection.
    #[instrument(skip(game))]
    pub fn check(game: &Game, caller: &PlayerId, tile: &Tile) -> Result<(), GameError> {
        TileInBounds::check(tile)?;
        GameActive::check(game)?;
        PlayersTurn::check(game, caller)?;
        TileUnset::check(game, tile)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Postcondition
// ─────────────────────────────────────────────────────────────

/// Re-checks the composed invariant set after an accepted move.
///
/// A violation here is an internal bug, not a caller error, so it panics in
/// debug builds instead of widening the error taxonomy.
pub fn assert_invariants(game: &Game) {
    #[cfg(debug_assertions)]
    {
        use crate::invariants::{GameInvariants, InvariantSet};

        if let Err(violations) = GameInvariants::check_all(game) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("invariant violation after accepted move: {descriptions}");
        }
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = game;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameStatus;

    fn game() -> Game {
        Game::setup_game("p1".into(), "p2".into())
    }

    #[test]
    fn test_bounds_gate() {
        assert_eq!(TileInBounds::check(&Tile::new(2, 2)), Ok(()));
        assert_eq!(
            TileInBounds::check(&Tile::new(3, 0)),
            Err(GameError::TileOutOfBounds)
        );
    }

    #[test]
    fn test_bounds_outranks_terminal_state() {
        let mut game = game();
        game.state = GameStatus::Tie;
        assert_eq!(
            LegalMove::check(&game, &"p1".into(), &Tile::new(4, 5)),
            Err(GameError::TileOutOfBounds)
        );
    }

    #[test]
    fn test_terminal_state_outranks_turn_ownership() {
        let mut game = game();
        game.state = GameStatus::Tie;
        assert_eq!(
            LegalMove::check(&game, &"p2".into(), &Tile::new(0, 0)),
            Err(GameError::GameAlreadyOver)
        );
    }

    #[test]
    fn test_turn_ownership_outranks_occupancy() {
        let mut game = game();
        game.play(&"p1".into(), Tile::new(0, 0)).unwrap();
        assert_eq!(
            LegalMove::check(&game, &"p1".into(), &Tile::new(0, 0)),
            Err(GameError::NotPlayerTurn)
        );
    }

    #[test]
    fn test_occupancy_gate_last() {
        let mut game = game();
        game.play(&"p1".into(), Tile::new(0, 0)).unwrap();
        assert_eq!(
            LegalMove::check(&game, &"p2".into(), &Tile::new(0, 0)),
            Err(GameError::TileAlreadySet)
        );
    }
}
