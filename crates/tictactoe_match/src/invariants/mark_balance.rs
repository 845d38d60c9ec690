//! Mark balance invariant: cell counts match the turn counter.

use super::Invariant;
use crate::game::Game;
use crate::types::Mark;

/// Invariant: occupied-cell counts agree with `turn`.
///
/// After `turn - 1` accepted moves the board holds `ceil((turn - 1) / 2)` X
/// marks and `floor((turn - 1) / 2)` O marks, so X leads O by at most one.
/// Cells are never overwritten, which makes the counts exact rather than
/// lower bounds.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let moves = usize::from(game.turn().saturating_sub(1));
        game.board().count(Mark::X) == moves.div_ceil(2)
            && game.board().count(Mark::O) == moves / 2
    }

    fn description() -> &'static str {
        "occupied cells match the turn counter (X leads O by at most one)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tile;

    #[test]
    fn test_fresh_game_holds() {
        let game = Game::setup_game("p1".into(), "p2".into());
        assert!(MarkBalanceInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_each_move() {
        let mut game = Game::setup_game("p1".into(), "p2".into());
        for (caller, tile) in [
            ("p1", Tile::new(0, 0)),
            ("p2", Tile::new(1, 0)),
            ("p1", Tile::new(0, 1)),
            ("p2", Tile::new(1, 1)),
        ] {
            game.play(&caller.into(), tile).unwrap();
            assert!(MarkBalanceInvariant::holds(&game));
        }
    }

    #[test]
    fn test_unaccounted_mark_violates() {
        let mut game = Game::setup_game("p1".into(), "p2".into());
        game.board.set(Tile::new(0, 0), Mark::X);
        assert!(!MarkBalanceInvariant::holds(&game));
    }
}
