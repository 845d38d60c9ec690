//! Error taxonomy for the match state machine.

use derive_more::{Display, Error};

/// Rejection reasons surfaced by the state machine.
///
/// Every variant is a caller error, non-retryable at this level: the call
/// leaves the record untouched, and repeating the same call yields the same
/// rejection against the same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Move coordinates fall outside the 3x3 grid.
    #[display("tile out of bounds")]
    TileOutOfBounds,
    /// The match already reached a terminal state.
    #[display("game is already over")]
    GameAlreadyOver,
    /// The caller does not own the current turn.
    #[display("not this player's turn")]
    NotPlayerTurn,
    /// The target cell is already occupied.
    #[display("tile is already set")]
    TileAlreadySet,
    /// The record was already initialized.
    #[display("game has already started")]
    GameAlreadyStarted,
}
