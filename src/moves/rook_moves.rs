use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::moves::move_descriptions::MoveCandidate;
use crate::moves::sliding_moves::{slide_candidates, ORTHOGONAL_DIRECTIONS};

pub fn generate_rook_candidates(board: &Board, piece: &Piece, out: &mut Vec<MoveCandidate>) {
    slide_candidates(board, piece, &ORTHOGONAL_DIRECTIONS, out);
}
