//! Movement-legality rules, one predicate per piece kind.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::error::InvalidCoordinate;
use crate::piece_kind::PieceKind;

use self::king::king_move_ok;
use self::knights::knight_move_ok;
use self::pawns::pawn_move_ok;
use self::sliders::{bishop_move_ok, queen_move_ok, rook_move_ok};

/// Decide whether a single candidate move is consistent with how the piece
/// on its source square is allowed to move, given current occupancy.
///
/// This is a pure function over the board snapshot: it answers nothing
/// about the legality of the resulting game state (check, turn order) and
/// reports rejection as an ordinary `false`, never as an error.
///
/// Rejected outright, before any kind-specific rule runs:
/// - moves whose source and destination coincide,
/// - moves from an empty square,
/// - moves capturing a piece of the mover's own color.
pub fn is_legal_move(board: &Board, mv: Move) -> bool {
    if mv.source() == mv.dest() {
        return false;
    }
    let Some(piece) = board.piece_on(mv.source()) else {
        return false;
    };
    if let Some(target) = board.piece_on(mv.dest()) {
        if target.color() == piece.color() {
            return false;
        }
    }

    match piece.kind() {
        PieceKind::Pawn => pawn_move_ok(board, piece.color(), mv.source(), mv.dest()),
        PieceKind::Rook => rook_move_ok(board, mv.source(), mv.dest()),
        PieceKind::Knight => knight_move_ok(mv.source(), mv.dest()),
        PieceKind::Bishop => bishop_move_ok(board, mv.source(), mv.dest()),
        PieceKind::Queen => queen_move_ok(board, mv.source(), mv.dest()),
        PieceKind::King => king_move_ok(mv.source(), mv.dest()),
    }
}

/// Raw row/column form of [`is_legal_move`] for input layers that work in
/// click-grid coordinates.
///
/// # Errors
///
/// [`InvalidCoordinate`] if any coordinate falls outside `0..=7`.
pub fn is_legal_move_coords(
    board: &Board,
    from_row: i32,
    from_col: i32,
    to_row: i32,
    to_col: i32,
) -> Result<bool, InvalidCoordinate> {
    let mv = Move::from_coords(from_row, from_col, to_row, to_col)?;
    Ok(is_legal_move(board, mv))
}
