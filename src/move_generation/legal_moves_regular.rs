//! Legal regular moves: raw candidates that keep the mover's king safe.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_checks::is_check;
use crate::move_generation::move_candidates::generate_move_candidates;
use crate::moves::move_descriptions::{Move, MoveCandidate};

/// Simulates each candidate and keeps those that do not leave `color` in
/// check. Candidates whose origin is empty are skipped.
pub fn validate_move_candidates(
    board: &Board,
    color: Color,
    candidates: &[MoveCandidate],
) -> ChessResult<Vec<Move>> {
    let mut legal = Vec::with_capacity(candidates.len());
    for &candidate in candidates {
        let Some(piece) = board.get(candidate.from) else {
            continue;
        };
        let next = board.move_piece(candidate.from, candidate.to);
        if is_check(&next, color)? {
            continue;
        }
        let is_capturing = board.is_occupied(candidate.to);
        legal.push(Move::regular(candidate, piece, is_capturing));
    }
    Ok(legal)
}

pub fn legal_regular_moves(board: &Board, color: Color) -> ChessResult<Vec<Move>> {
    let candidates = generate_move_candidates(board, color);
    validate_move_candidates(board, color, &candidates)
}
