//! Raw candidate generation for a whole side.
//!
//! Dispatches each piece to the generator for its kind. The output ignores
//! check entirely; `legal_moves_regular` filters it.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::moves::bishop_moves::generate_bishop_candidates;
use crate::moves::king_moves::generate_king_candidates;
use crate::moves::knight_moves::generate_knight_candidates;
use crate::moves::move_descriptions::MoveCandidate;
use crate::moves::pawn_moves::generate_pawn_candidates;
use crate::moves::queen_moves::generate_queen_candidates;
use crate::moves::rook_moves::generate_rook_candidates;

pub fn generate_piece_candidates(board: &Board, piece: &Piece, out: &mut Vec<MoveCandidate>) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_candidates(board, piece, out),
        PieceKind::Knight => generate_knight_candidates(board, piece, out),
        PieceKind::Bishop => generate_bishop_candidates(board, piece, out),
        PieceKind::Rook => generate_rook_candidates(board, piece, out),
        PieceKind::Queen => generate_queen_candidates(board, piece, out),
        PieceKind::King => generate_king_candidates(board, piece, out),
    }
}

/// Every raw candidate for `color`, pieces visited rank 0 first.
pub fn generate_move_candidates(board: &Board, color: Color) -> Vec<MoveCandidate> {
    let mut out = Vec::with_capacity(64);
    for piece in board.pieces_of(color) {
        generate_piece_candidates(board, piece, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::generate_move_candidates;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;

    #[test]
    fn start_position_has_twenty_candidates_per_side() {
        let board = Board::standard();
        assert_eq!(generate_move_candidates(&board, Color::White).len(), 20);
        assert_eq!(generate_move_candidates(&board, Color::Black).len(), 20);
    }
}
