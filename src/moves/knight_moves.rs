use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::moves::move_descriptions::MoveCandidate;
use crate::moves::sliding_moves::step_candidates;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub fn generate_knight_candidates(board: &Board, piece: &Piece, out: &mut Vec<MoveCandidate>) {
    step_candidates(board, piece, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_candidates;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

    #[test]
    fn knight_from_d4_has_eight_targets() {
        let d4 = Position::new(3, 3).expect("d4 is on the board");
        let knight = Piece::new(PieceKind::Knight, Color::White, d4);
        let board = Board::from_pieces([knight]);
        let mut out = Vec::new();
        generate_knight_candidates(&board, &knight, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn starting_knight_jumps_over_pawns() {
        let board = Board::standard();
        let knight = board
            .get(Position::new(1, 0).expect("b1 is on the board"))
            .expect("knight on b1");
        let mut out = Vec::new();
        generate_knight_candidates(&board, &knight, &mut out);
        let mut targets: Vec<Position> = out.iter().map(|c| c.to).collect();
        targets.sort();
        assert_eq!(
            targets,
            vec![
                Position::new(0, 2).expect("a3"),
                Position::new(2, 2).expect("c3")
            ]
        );
    }
}
