use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::moves::move_descriptions::MoveCandidate;
use crate::moves::sliding_moves::{slide_candidates, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

/// Union of rook and bishop rays.
pub fn generate_queen_candidates(board: &Board, piece: &Piece, out: &mut Vec<MoveCandidate>) {
    slide_candidates(board, piece, &ORTHOGONAL_DIRECTIONS, out);
    slide_candidates(board, piece, &DIAGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_candidates;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

    #[test]
    fn queen_on_open_d4_reaches_twenty_seven_squares() {
        let d4 = Position::new(3, 3).expect("d4 is on the board");
        let queen = Piece::new(PieceKind::Queen, Color::White, d4);
        let board = Board::from_pieces([queen]);
        let mut out = Vec::new();
        generate_queen_candidates(&board, &queen, &mut out);
        assert_eq!(out.len(), 27);
    }
}
