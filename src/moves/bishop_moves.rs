use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::moves::move_descriptions::MoveCandidate;
use crate::moves::sliding_moves::{slide_candidates, DIAGONAL_DIRECTIONS};

pub fn generate_bishop_candidates(board: &Board, piece: &Piece, out: &mut Vec<MoveCandidate>) {
    slide_candidates(board, piece, &DIAGONAL_DIRECTIONS, out);
}
