//! Sliding piece (rook, bishop, queen) move legality.

use crate::board::Board;
use crate::square::Square;

/// Check a rook move: purely horizontal or purely vertical, with every
/// strictly intermediate square empty.
pub(super) fn rook_move_ok(board: &Board, from: Square, to: Square) -> bool {
    // Exactly one of row/column may change.
    let straight = (from.row() == to.row()) != (from.col() == to.col());
    straight && path_is_clear(board, from, to)
}

/// Check a bishop move: a pure diagonal with every strictly intermediate
/// square empty.
pub(super) fn bishop_move_ok(board: &Board, from: Square, to: Square) -> bool {
    let row_delta = (to.row() as i32 - from.row() as i32).abs();
    let col_delta = (to.col() as i32 - from.col() as i32).abs();
    row_delta == col_delta && path_is_clear(board, from, to)
}

/// Check a queen move: rook-shaped or bishop-shaped.
pub(super) fn queen_move_ok(board: &Board, from: Square, to: Square) -> bool {
    rook_move_ok(board, from, to) || bishop_move_ok(board, from, to)
}

/// Walk from `from` toward `to` in unit steps and require every strictly
/// intermediate square to be empty. The destination itself is not checked;
/// the dispatcher has already filtered own-color captures.
fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let row_step = (to.row() as i32 - from.row() as i32).signum();
    let col_step = (to.col() as i32 - from.col() as i32).signum();

    let mut row = from.row() as i32 + row_step;
    let mut col = from.col() as i32 + col_step;
    while (row, col) != (to.row() as i32, to.col() as i32) {
        if board.is_occupied(Square::new_unchecked(row as u8, col as u8)) {
            return false;
        }
        row += row_step;
        col += col_step;
    }
    true
}
