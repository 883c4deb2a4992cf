//! Castling generation.
//!
//! The king must never have moved and must not be in check. Each direction is
//! walked from the king outward: every empty square passed must be safe for
//! the king to stand on, and the walk must end on a friendly rook that has
//! never moved. The king then moves two squares toward the rook and the rook
//! lands on the square the king crossed.

use tracing::trace;

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::move_generation::legal_move_checks::is_check;
use crate::moves::move_descriptions::{CastlingSide, Move, MoveCandidate};

const CASTLING_ORDER: [CastlingSide; 2] = [CastlingSide::Kingside, CastlingSide::Queenside];

pub fn legal_castling_moves(board: &Board, color: Color) -> ChessResult<Vec<Move>> {
    let king_square = board.king_position(color)?;
    let Some(king) = board.get(king_square) else {
        return Ok(Vec::new());
    };
    if king.has_moved || is_check(board, color)? {
        return Ok(Vec::new());
    }

    let mut moves = Vec::with_capacity(2);
    for side in CASTLING_ORDER {
        let direction = side.direction();
        let mut cursor = king_square;
        let mut empty_squares = 0usize;
        let mut rook = None;

        while let Some(next) = cursor.shifted(direction, 0) {
            match board.get(next) {
                None => {
                    if is_check(&board.move_piece(king_square, next), color)? {
                        break;
                    }
                    empty_squares += 1;
                }
                Some(piece) => {
                    if piece.color == color && piece.kind == PieceKind::Rook && !piece.has_moved {
                        rook = Some(piece);
                    }
                    break;
                }
            }
            cursor = next;
        }

        // The king needs two free squares to land short of the rook.
        let Some(rook) = rook.filter(|_| empty_squares >= 2) else {
            continue;
        };
        let (Some(king_to), Some(rook_to)) = (
            king_square.shifted(2 * direction, 0),
            king_square.shifted(direction, 0),
        ) else {
            continue;
        };

        let castle = Move::castling(
            side,
            MoveCandidate::new(king_square, king_to),
            MoveCandidate::new(rook.position, rook_to),
            king,
            rook,
        );
        if is_check(&castle.apply(board), color)? {
            trace!(?side, ?color, "castling rejected: king lands in check");
            continue;
        }
        moves.push(castle);
    }
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::legal_castling_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};
    use crate::moves::move_descriptions::{CastlingSide, MoveKind};

    fn square(file: u8, rank: u8) -> Position {
        Position::new(file, rank).expect("test square should be on the board")
    }

    fn castling_setup(extra: &[Piece]) -> Board {
        let mut pieces = vec![
            Piece::new(PieceKind::King, Color::White, square(4, 0)),
            Piece::new(PieceKind::Rook, Color::White, square(0, 0)),
            Piece::new(PieceKind::Rook, Color::White, square(7, 0)),
            Piece::new(PieceKind::King, Color::Black, square(4, 7)),
        ];
        pieces.extend_from_slice(extra);
        Board::from_pieces(pieces)
    }

    #[test]
    fn both_sides_available_on_clear_back_rank() {
        let board = castling_setup(&[]);
        let moves = legal_castling_moves(&board, Color::White).expect("board has both kings");
        let kinds: Vec<MoveKind> = moves.iter().map(|mv| mv.kind).collect();
        assert_eq!(
            kinds,
            vec![
                MoveKind::Castling(CastlingSide::Kingside),
                MoveKind::Castling(CastlingSide::Queenside)
            ]
        );

        let short = &moves[0];
        assert_eq!(short.piece_moves[0].to, square(6, 0));
        assert_eq!(short.piece_moves[1].from, square(7, 0));
        assert_eq!(short.piece_moves[1].to, square(5, 0));
        assert!(!short.is_capturing && !short.allows_en_passant);

        let long = &moves[1];
        assert_eq!(long.piece_moves[0].to, square(2, 0));
        assert_eq!(long.piece_moves[1].to, square(3, 0));
    }

    #[test]
    fn attacked_transit_square_blocks_that_side_only() {
        let board = castling_setup(&[Piece::new(PieceKind::Rook, Color::Black, square(5, 7))]);
        let moves = legal_castling_moves(&board, Color::White).expect("board has both kings");
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].kind, MoveKind::Castling(CastlingSide::Queenside));
    }

    #[test]
    fn obstruction_or_moved_rook_prevents_castling() {
        let blocked = castling_setup(&[Piece::new(PieceKind::Knight, Color::White, square(1, 0))]);
        let moves = legal_castling_moves(&blocked, Color::White).expect("board has both kings");
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].kind, MoveKind::Castling(CastlingSide::Kingside));

        let moved_rook = castling_setup(&[])
            .move_piece(square(7, 0), square(7, 1))
            .move_piece(square(7, 1), square(7, 0));
        let moves = legal_castling_moves(&moved_rook, Color::White).expect("board has both kings");
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].kind, MoveKind::Castling(CastlingSide::Queenside));
    }

    #[test]
    fn no_castling_out_of_check() {
        let board = castling_setup(&[Piece::new(PieceKind::Rook, Color::Black, square(4, 4))])
            .move_piece(square(4, 7), square(0, 7));
        assert!(legal_castling_moves(&board, Color::White)
            .expect("board has both kings")
            .is_empty());
    }
}
