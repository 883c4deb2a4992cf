use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::moves::move_descriptions::MoveCandidate;

/// Pawn pushes and diagonal captures. En passant is generated separately and
/// there is no promotion, so a pawn on its last rank has nothing to do.
pub fn generate_pawn_candidates(board: &Board, piece: &Piece, out: &mut Vec<MoveCandidate>) {
    let forward = piece.color.forward();
    let from = piece.position;
    let Some(one_step) = from.shifted(0, forward) else {
        return;
    };

    if !board.is_occupied(one_step) {
        out.push(MoveCandidate::new(from, one_step));
        if !piece.has_moved && from.rank == piece.color.pawn_rank() {
            if let Some(two_step) = from.shifted(0, 2 * forward) {
                if !board.is_occupied(two_step) {
                    out.push(MoveCandidate::new(from, two_step));
                }
            }
        }
    }

    for d_file in [-1, 1] {
        if let Some(target) = from.shifted(d_file, forward) {
            if board.is_enemy(target, piece.color) {
                out.push(MoveCandidate::new(from, target));
            }
        }
    }
}
