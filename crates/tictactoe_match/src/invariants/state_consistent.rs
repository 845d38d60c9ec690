//! Terminal-state consistency invariant.

use super::Invariant;
use crate::game::Game;
use crate::rules;
use crate::types::GameStatus;

/// Invariant: the status tag agrees with the board.
///
/// `Won { winner }` requires a completed line for the mark whose player slot
/// holds `winner`; `Tie` requires a full board with no line; `Active`
/// requires no completed line (the machine transitions on the winning move).
pub struct StateConsistentInvariant;

impl Invariant<Game> for StateConsistentInvariant {
    fn holds(game: &Game) -> bool {
        match game.state() {
            GameStatus::Active => rules::winner(game.board()).is_none(),
            GameStatus::Tie => {
                rules::is_full(game.board()) && rules::winner(game.board()).is_none()
            }
            GameStatus::Won { winner } => match rules::winner(game.board()) {
                Some(mark) => &game.players()[mark.player_index()] == winner,
                None => false,
            },
        }
    }

    fn description() -> &'static str {
        "status tag agrees with the board (winner owns a completed line)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tile;

    fn won_game() -> Game {
        let mut game = Game::setup_game("p1".into(), "p2".into());
        for (caller, tile) in [
            ("p1", Tile::new(0, 0)),
            ("p2", Tile::new(1, 0)),
            ("p1", Tile::new(0, 1)),
            ("p2", Tile::new(1, 1)),
            ("p1", Tile::new(0, 2)),
        ] {
            game.play(&caller.into(), tile).unwrap();
        }
        game
    }

    #[test]
    fn test_active_game_holds() {
        let game = Game::setup_game("p1".into(), "p2".into());
        assert!(StateConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_won_game_holds() {
        assert!(StateConsistentInvariant::holds(&won_game()));
    }

    #[test]
    fn test_won_tag_without_line_violates() {
        let mut game = Game::setup_game("p1".into(), "p2".into());
        game.state = GameStatus::Won {
            winner: "p1".into(),
        };
        assert!(!StateConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_winner_identity_violates() {
        let mut game = won_game();
        game.state = GameStatus::Won {
            winner: "p2".into(),
        };
        assert!(!StateConsistentInvariant::holds(&game));
    }
}
