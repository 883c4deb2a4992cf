//! En passant generation, driven only by the previous move.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::move_generation::legal_move_checks::is_check;
use crate::moves::move_descriptions::{Move, MoveCandidate};

/// En passant replies available to `color`.
///
/// Requires that `last_move` was the opponent's two-square pawn advance. Each
/// friendly pawn beside the landing square captures diagonally behind it and
/// the passed pawn is deleted.
pub fn legal_en_passant_moves(
    board: &Board,
    color: Color,
    last_move: Option<&Move>,
) -> ChessResult<Vec<Move>> {
    let Some(last_move) = last_move else {
        return Ok(Vec::new());
    };
    if !last_move.allows_en_passant || last_move.moving_piece().color != color.opposite() {
        return Ok(Vec::new());
    }

    let landing = last_move.destination();
    let Some(behind) = landing.shifted(0, color.forward()) else {
        return Ok(Vec::new());
    };

    let mut moves = Vec::new();
    for d_file in [-1, 1] {
        let Some(neighbour) = landing.shifted(d_file, 0) else {
            continue;
        };
        let Some(pawn) = board.get(neighbour) else {
            continue;
        };
        if pawn.kind != PieceKind::Pawn || pawn.color != color {
            continue;
        }

        let capture = Move::en_passant(MoveCandidate::new(neighbour, behind), pawn, landing);
        if !is_check(&capture.apply(board), color)? {
            moves.push(capture);
        }
    }
    Ok(moves)
}
