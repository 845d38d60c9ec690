//! Turn counter bound invariant.

use super::Invariant;
use crate::game::Game;

/// Invariant: the turn counter never exceeds 10.
///
/// The counter is 0 only on an unstarted record; normal play spans 1 through
/// 10 (9 cells plus the initial value).
pub struct TurnBoundsInvariant;

impl Invariant<Game> for TurnBoundsInvariant {
    fn holds(game: &Game) -> bool {
        game.turn() <= 10
    }

    fn description() -> &'static str {
        "turn counter stays within 0..=10"
    }
}
