//! Candidate move representation.

use std::fmt;

use crate::error::InvalidCoordinate;
use crate::square::Square;

/// A candidate move from one square to another.
///
/// A `Move` carries only its endpoints; whether the move is actually
/// permitted is decided by [`rules::is_legal_move`](crate::is_legal_move)
/// against a board snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
}

impl Move {
    /// Create a move between two squares.
    #[inline]
    pub const fn new(source: Square, dest: Square) -> Move {
        Move { source, dest }
    }

    /// Build a move from raw row/column pairs as received from an input
    /// layer (e.g. a click grid).
    ///
    /// # Errors
    ///
    /// [`InvalidCoordinate`] if any of the four coordinates falls outside
    /// `0..=7`.
    pub const fn from_coords(
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> Result<Move, InvalidCoordinate> {
        let source = match Square::try_new(from_row, from_col) {
            Ok(sq) => sq,
            Err(err) => return Err(err),
        };
        let dest = match Square::try_new(to_row, to_col) {
            Ok(sq) => sq,
            Err(err) => return Err(err),
        };
        Ok(Move { source, dest })
    }

    /// Parse a UCI-style move string ("e2e4") into a move.
    pub fn from_uci(s: &str) -> Option<Move> {
        if !s.is_ascii() || s.len() != 4 {
            return None;
        }
        let source = Square::from_algebraic(&s[..2])?;
        let dest = Square::from_algebraic(&s[2..])?;
        Some(Move { source, dest })
    }

    /// Extract the source square.
    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    /// Extract the destination square.
    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}
