//! Full legal move generation pipeline.
//!
//! Combines regular moves, en passant replies and castling, in that order.
//! The order is stable for a given board so notation, perft and search all
//! see the same sequence.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_moves_castling::legal_castling_moves;
use crate::move_generation::legal_moves_en_passant::legal_en_passant_moves;
use crate::move_generation::legal_moves_regular::legal_regular_moves;
use crate::moves::move_descriptions::Move;

/// Source of legal moves for a position.
pub trait MoveGenerator {
    fn generate_legal_moves(
        &self,
        board: &Board,
        color: Color,
        last_move: Option<&Move>,
    ) -> ChessResult<Vec<Move>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(
        &self,
        board: &Board,
        color: Color,
        last_move: Option<&Move>,
    ) -> ChessResult<Vec<Move>> {
        all_legal_moves(board, color, last_move)
    }
}

pub fn all_legal_moves(
    board: &Board,
    color: Color,
    last_move: Option<&Move>,
) -> ChessResult<Vec<Move>> {
    let mut moves = legal_regular_moves(board, color)?;
    moves.extend(legal_en_passant_moves(board, color, last_move)?);
    moves.extend(legal_castling_moves(board, color)?);
    Ok(moves)
}
