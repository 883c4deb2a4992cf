//! Static board evaluation.
//!
//! Scores are taken from the point of view of one side: positive is good for
//! that side. Material plus small square bonuses, with checkmate pinned to
//! the infinities. Every term is added with a sign and in a fixed order, so
//! the score from the other side is the exact negation.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::move_generation::legal_move_checks::is_checkmate;

pub const PAWN_VALUE: f64 = 1.0;
pub const KNIGHT_VALUE: f64 = 3.0;
pub const BISHOP_VALUE: f64 = 3.0;
pub const ROOK_VALUE: f64 = 5.0;
pub const QUEEN_VALUE: f64 = 9.0;
pub const CHECKMATE_VALUE: f64 = f64::INFINITY;

pub const CENTER_BONUS: f64 = 0.25;
pub const EDGE_PENALTY: f64 = -0.25;

/// Kings carry no material; mate is scored separately.
#[inline]
pub const fn piece_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => 0.0,
    }
}

/// The 4x4 block c3..f6.
#[inline]
pub fn is_center_square(position: Position) -> bool {
    (2..=5).contains(&position.file) && (2..=5).contains(&position.rank)
}

/// The two ranks nearest either side's back edge.
#[inline]
pub fn is_edge_square(position: Position) -> bool {
    matches!(position.rank, 0 | 1 | 6 | 7)
}

/// Value of `board` for the side that just moved.
///
/// `+inf` when the opponent is checkmated, `-inf` when `just_moved` is.
pub fn board_value(board: &Board, just_moved: Color) -> ChessResult<f64> {
    if is_checkmate(board, just_moved.opposite())? {
        return Ok(CHECKMATE_VALUE);
    }
    if is_checkmate(board, just_moved)? {
        return Ok(-CHECKMATE_VALUE);
    }

    let mut value = 0.0f64;
    for piece in board.pieces() {
        let sign = if piece.color == just_moved { 1.0 } else { -1.0 };
        value += sign * piece_value(piece.kind);
        if is_center_square(piece.position) {
            value += sign * CENTER_BONUS;
        }
        if is_edge_square(piece.position) {
            value += sign * EDGE_PENALTY;
        }
    }
    Ok(value)
}
