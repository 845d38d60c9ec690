//! Persisted record layout tests.
//!
//! The storage collaborator consumes the record in a stable field order:
//! `players`, `turn`, `board` (each cell an empty-or-mark tag), `state`.

use serde_json::json;
use tictactoe_match::{Game, Tile};

#[test]
fn test_fresh_record_layout() {
    let game = Game::setup_game("alice".into(), "bob".into());

    assert_eq!(
        serde_json::to_value(&game).unwrap(),
        json!({
            "players": ["alice", "bob"],
            "turn": 1,
            "board": [
                [null, null, null],
                [null, null, null],
                [null, null, null],
            ],
            "state": "Active",
        })
    );
}

#[test]
fn test_won_record_layout() {
    let mut game = Game::setup_game("alice".into(), "bob".into());
    game.play(&"alice".into(), Tile::new(0, 0)).unwrap();
    game.play(&"bob".into(), Tile::new(1, 0)).unwrap();
    game.play(&"alice".into(), Tile::new(0, 1)).unwrap();
    game.play(&"bob".into(), Tile::new(1, 1)).unwrap();
    game.play(&"alice".into(), Tile::new(0, 2)).unwrap();

    assert_eq!(
        serde_json::to_value(&game).unwrap(),
        json!({
            "players": ["alice", "bob"],
            "turn": 6,
            "board": [
                ["X", "X", "X"],
                ["O", "O", null],
                [null, null, null],
            ],
            "state": { "Won": { "winner": "alice" } },
        })
    );
}

#[test]
fn test_stored_record_resumes_play() {
    let stored = json!({
        "players": ["alice", "bob"],
        "turn": 3,
        "board": [
            ["X", null, null],
            [null, "O", null],
            [null, null, null],
        ],
        "state": "Active",
    });

    let mut game: Game = serde_json::from_value(stored).unwrap();
    assert_eq!(game.current_player(), "alice");

    game.play(&"alice".into(), Tile::new(2, 2)).unwrap();
    assert_eq!(game.turn(), 4);
}
