//! Two-player tic-tac-toe match state machine.
//!
//! The authoritative state of a match lives in a single persistent [`Game`]
//! record, mutated through two operations: [`Game::setup_game`] initializes
//! a match between two identified players, and [`Game::play`] applies one
//! move, advances the turn, and evaluates terminal conditions. Every illegal
//! move is rejected with a specific [`GameError`] and leaves the record
//! untouched.
//!
//! # Architecture
//!
//! - **[`Game`]**: the record (`players`, `turn`, `board`, `state`) and its
//!   two entry points
//! - **[`rules`]**: pure win/draw predicates over the board
//! - **[`contracts`]**: named precondition gates, composed in rejection order
//! - **[`invariants`]**: first-class record invariants, re-checked after
//!   every accepted move in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_match::{Game, GameStatus, Tile};
//!
//! let mut game = Game::setup_game("alice".into(), "bob".into());
//! game.play(&"alice".into(), Tile::new(0, 0))?;
//! game.play(&"bob".into(), Tile::new(1, 1))?;
//! assert!(game.is_active());
//! assert_eq!(game.turn(), 3);
//! # Ok::<(), tictactoe_match::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod error;
mod game;
mod types;

// Rule and verification surfaces
pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - the record and its operations
pub use game::Game;

// Crate-level exports - domain types
pub use action::Move;
pub use error::GameError;
pub use types::{Board, GameStatus, Mark, PlayerId, Tile};
