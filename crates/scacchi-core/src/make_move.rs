//! Move application: legality-gated clear-source / write-destination.

use tracing::debug;

use crate::board::Board;
use crate::chess_move::Move;
use crate::error::MoveError;
use crate::piece::Piece;
use crate::rules::is_legal_move;

impl Board {
    /// Apply a candidate move if it passes the legality rules.
    ///
    /// Clears the source square and writes the moved piece into the
    /// destination, overwriting (capturing) whatever occupied it. Returns
    /// the captured piece, if any.
    ///
    /// # Errors
    ///
    /// [`MoveError::Illegal`] if the candidate fails
    /// [`is_legal_move`](crate::is_legal_move); the board is left
    /// untouched.
    pub fn make_move(&mut self, mv: Move) -> Result<Option<Piece>, MoveError> {
        if !is_legal_move(self, mv) {
            return Err(MoveError::Illegal { mv });
        }

        let piece = self.piece_on(mv.source());
        let captured = self.piece_on(mv.dest());
        self.put_piece(mv.dest(), piece);
        self.put_piece(mv.source(), None);

        debug!(%mv, ?captured, "move applied");
        Ok(captured)
    }
}
