//! The persistent match record and its state machine.

use crate::action::Move;
use crate::contracts::{self, LegalMove};
use crate::error::GameError;
use crate::rules;
use crate::types::{Board, GameStatus, Mark, PlayerId, Tile};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// The authoritative match record.
///
/// Field order is the persisted layout: `players`, `turn`, `board`, `state`.
/// The record is mutated only through [`Game::start`] (once) and accepted
/// [`Game::play`] calls; every rejected call leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) players: [PlayerId; 2],
    pub(crate) turn: u8,
    pub(crate) board: Board,
    pub(crate) state: GameStatus,
}

impl Default for Game {
    /// The zeroed record as the hosting storage allocates it: no players,
    /// `turn = 0`, empty board. [`Game::start`] initializes it exactly once.
    fn default() -> Self {
        Self {
            players: [PlayerId::new(), PlayerId::new()],
            turn: 0,
            board: Board::new(),
            state: GameStatus::Active,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Setup
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Initializes a match between two identified players.
    ///
    /// Player one holds `X` and moves first. The identities are not required
    /// to be distinct.
    #[instrument]
    pub fn setup_game(player_one: PlayerId, player_two: PlayerId) -> Self {
        Self {
            players: [player_one, player_two],
            turn: 1,
            board: Board::new(),
            state: GameStatus::Active,
        }
    }

    /// One-shot initializer for a pre-allocated zeroed record.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameAlreadyStarted`] if the record was already
    /// initialized (`turn != 0`).
    #[instrument(skip(self))]
    pub fn start(&mut self, players: [PlayerId; 2]) -> Result<(), GameError> {
        if self.turn != 0 {
            return Err(GameError::GameAlreadyStarted);
        }
        self.players = players;
        self.turn = 1;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Moves
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Applies one move for `caller` at `tile`.
    ///
    /// On success the active mark is placed, the turn advances by one, and
    /// the status is re-evaluated: a completed line for the mark just placed
    /// makes `caller` the winner, a full board without one ties the match.
    ///
    /// # Errors
    ///
    /// Rejections are checked in a fixed order and leave the record
    /// untouched:
    ///
    /// * [`GameError::TileOutOfBounds`] - a coordinate outside the grid.
    /// * [`GameError::GameAlreadyOver`] - the record is terminal.
    /// * [`GameError::NotPlayerTurn`] - `caller` does not own this turn.
    /// * [`GameError::TileAlreadySet`] - the cell is occupied.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn play(&mut self, caller: &PlayerId, tile: Tile) -> Result<(), GameError> {
        if let Err(err) = LegalMove::check(self, caller, &tile) {
            warn!(%err, "move rejected");
            return Err(err);
        }

        let mark = self.current_mark();
        self.board.set(tile, mark);
        self.turn += 1;

        if rules::is_won_by(&self.board, mark) {
            self.state = GameStatus::Won {
                winner: caller.clone(),
            };
            debug!(winner = %caller, board = %self.board, "game won");
        } else if rules::is_full(&self.board) {
            self.state = GameStatus::Tie;
            debug!(board = %self.board, "game tied");
        }

        contracts::assert_invariants(self);
        Ok(())
    }

    /// Sets up a fresh match and applies `moves` in order.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument(skip(moves))]
    pub fn replay(
        player_one: PlayerId,
        player_two: PlayerId,
        moves: &[Move],
    ) -> Result<Self, GameError> {
        let mut game = Self::setup_game(player_one, player_two);
        for mov in moves {
            game.play(&mov.player, mov.tile)?;
        }
        Ok(game)
    }
}

// ─────────────────────────────────────────────────────────────
//  Accessors
// ─────────────────────────────────────────────────────────────

impl Game {
    /// The ordered participant pair: player one (X), player two (O).
    pub fn players(&self) -> &[PlayerId; 2] {
        &self.players
    }

    /// 1-based counter of the next move; 0 on an unstarted record.
    pub fn turn(&self) -> u8 {
        self.turn
    }

    /// The board grid.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The status tag.
    pub fn state(&self) -> &GameStatus {
        &self.state
    }

    /// Whether the match still accepts moves.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// The winner's identity, if the match was won.
    pub fn winner(&self) -> Option<&PlayerId> {
        self.state.winner()
    }

    /// Mark owned by the mover of the current turn: `X` odd, `O` even.
    pub fn current_mark(&self) -> Mark {
        Mark::from_turn(self.turn)
    }

    /// Identity expected to move on the current turn.
    pub fn current_player(&self) -> &PlayerId {
        &self.players[self.current_mark().player_index()]
    }
}
