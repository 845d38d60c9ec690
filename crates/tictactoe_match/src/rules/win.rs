//! Win detection logic.

use crate::types::{Board, Mark, Tile};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[Tile; 3]; 8] = [
    // Rows
    [
        Tile { row: 0, col: 0 },
        Tile { row: 0, col: 1 },
        Tile { row: 0, col: 2 },
    ],
    [
        Tile { row: 1, col: 0 },
        Tile { row: 1, col: 1 },
        Tile { row: 1, col: 2 },
    ],
    [
        Tile { row: 2, col: 0 },
        Tile { row: 2, col: 1 },
        Tile { row: 2, col: 2 },
    ],
    // Columns
    [
        Tile { row: 0, col: 0 },
        Tile { row: 1, col: 0 },
        Tile { row: 2, col: 0 },
    ],
    [
        Tile { row: 0, col: 1 },
        Tile { row: 1, col: 1 },
        Tile { row: 2, col: 1 },
    ],
    [
        Tile { row: 0, col: 2 },
        Tile { row: 1, col: 2 },
        Tile { row: 2, col: 2 },
    ],
    // Diagonals
    [
        Tile { row: 0, col: 0 },
        Tile { row: 1, col: 1 },
        Tile { row: 2, col: 2 },
    ],
    [
        Tile { row: 0, col: 2 },
        Tile { row: 1, col: 1 },
        Tile { row: 2, col: 0 },
    ],
];

/// Checks whether `mark` occupies a full line.
///
/// The state machine calls this for the mark just placed only; a move can
/// never complete a line for the opposing mark.
#[instrument(skip(board))]
pub fn is_won_by(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&tile| board.get(tile) == Some(mark)))
}

/// Scans for any fully marked line.
///
/// Returns `Some(mark)` if either mark holds three in a row, `None`
/// otherwise. Used by invariants and tests; the move path uses
/// [`is_won_by`].
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let first = board.get(a);
        if first.is_some() && first == board.get(b) && first == board.get(c) {
            return first;
        }
    }
    None
}
