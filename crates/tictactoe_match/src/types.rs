//! Core domain types for the match record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a match participant, assigned by the hosting environment.
pub type PlayerId = String;

/// Mark placed on the board.
///
/// `X` belongs to player index 0, `O` to player index 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Player one's mark (moves on odd turns).
    X,
    /// Player two's mark (moves on even turns).
    O,
}

impl Mark {
    /// Mark owned by the mover of a 1-based turn: `X` on odd turns, `O` on even.
    pub fn from_turn(turn: u8) -> Self {
        if turn % 2 == 1 { Mark::X } else { Mark::O }
    }

    /// Index of the player slot that owns this mark.
    pub fn player_index(self) -> usize {
        match self {
            Mark::X => 0,
            Mark::O => 1,
        }
    }
}

/// A board coordinate pair, each component in `[0, 2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Row index, 0 at the top.
    pub row: u8,
    /// Column index, 0 at the left.
    pub col: u8,
}

impl Tile {
    /// Creates a tile coordinate.
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Whether both coordinates fall on the 3x3 grid.
    pub fn in_bounds(&self) -> bool {
        self.row <= 2 && self.col <= 2
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 grid of optional marks, row-major.
///
/// Serializes transparently as the bare grid, each cell an empty-or-mark tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board([[Option<Mark>; 3]; 3]);

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark at `tile`, or `None` if the cell is empty or out of range.
    pub fn get(&self, tile: Tile) -> Option<Mark> {
        self.0
            .get(tile.row as usize)?
            .get(tile.col as usize)
            .copied()
            .flatten()
    }

    /// Whether the cell at `tile` is unoccupied.
    pub fn is_empty(&self, tile: Tile) -> bool {
        self.get(tile).is_none()
    }

    /// Sets the cell at `tile`.
    ///
    /// `tile` must be in bounds and empty; both are checked by the move
    /// gates before the board is touched.
    pub(crate) fn set(&mut self, tile: Tile, mark: Mark) {
        self.0[tile.row as usize][tile.col as usize] = Some(mark);
    }

    /// The full grid, row-major.
    pub fn cells(&self) -> &[[Option<Mark>; 3]; 3] {
        &self.0
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.0
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(mark))
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.0.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Some(mark) => write!(f, "{mark}")?,
                    None => write!(f, ".")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
        }
        Ok(())
    }
}

/// Current status of the match record.
///
/// Starts `Active`; becomes terminal exactly once, after which the record
/// never changes again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The match accepts moves.
    Active,
    /// The board filled with no winning line.
    Tie,
    /// A player completed a winning line.
    Won {
        /// Identity of the winning player.
        winner: PlayerId,
    },
}

impl GameStatus {
    /// Whether the match still accepts moves.
    pub fn is_active(&self) -> bool {
        matches!(self, GameStatus::Active)
    }

    /// The winner's identity, if the match was won.
    pub fn winner(&self) -> Option<&PlayerId> {
        match self {
            GameStatus::Won { winner } => Some(winner),
            _ => None,
        }
    }
}
