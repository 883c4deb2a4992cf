use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::moves::move_descriptions::MoveCandidate;
use crate::moves::sliding_moves::step_candidates;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// One-square steps only. Castling is generated separately.
pub fn generate_king_candidates(board: &Board, piece: &Piece, out: &mut Vec<MoveCandidate>) {
    step_candidates(board, piece, &KING_OFFSETS, out);
}
