//! Error types for coordinate validation, move application, and placement parsing.

use crate::chess_move::Move;

/// A row/column pair outside the 8x8 board.
///
/// Raised by every raw-coordinate entry point before storage is touched;
/// callers should treat it like a rejected operation and re-prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("coordinate ({row}, {col}) is off the board")]
pub struct InvalidCoordinate {
    /// Row as received from the caller.
    pub row: i32,
    /// Column as received from the caller.
    pub col: i32,
}

/// Errors from applying a candidate move to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The candidate fails the movement-legality rules. The board is
    /// unchanged.
    #[error("illegal move {mv}")]
    Illegal {
        /// The rejected candidate.
        mv: Move,
    },
}

/// Errors from parsing a piece-placement string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The placement does not have exactly 8 '/'-separated ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("row {row} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based row index (0 = rank 8, 7 = rank 1).
        row: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}
