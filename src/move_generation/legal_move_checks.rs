//! Check, checkmate and stalemate detection.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::move_generation::legal_moves_regular::legal_regular_moves;
use crate::move_generation::move_candidates::generate_move_candidates;

/// Whether any raw candidate of `attacker` lands on `square`.
///
/// Pawn pushes only land on empty squares, so for an occupied square this is
/// exactly the set of attacks.
pub fn is_square_attacked(board: &Board, square: Position, attacker: Color) -> bool {
    generate_move_candidates(board, attacker)
        .iter()
        .any(|candidate| candidate.to == square)
}

/// Whether `color`'s king is attacked. Fails on a board without that king.
pub fn is_check(board: &Board, color: Color) -> ChessResult<bool> {
    let king = board.king_position(color)?;
    Ok(is_square_attacked(board, king, color.opposite()))
}

/// In check with no legal regular move.
///
/// En passant escapes are not considered here; `GameState` accounts for them
/// through its full legal-move list.
pub fn is_checkmate(board: &Board, color: Color) -> ChessResult<bool> {
    if !is_check(board, color)? {
        return Ok(false);
    }
    Ok(legal_regular_moves(board, color)?.is_empty())
}

/// Not in check and no legal moves, given an already computed move count.
pub fn is_stalemate(board: &Board, color: Color, legal_move_count: usize) -> ChessResult<bool> {
    Ok(legal_move_count == 0 && !is_check(board, color)?)
}

#[cfg(test)]
mod tests {
    use super::{is_check, is_checkmate, is_stalemate};
    use crate::errors::ChessErrors;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

    fn square(file: u8, rank: u8) -> Position {
        Position::new(file, rank).expect("test square should be on the board")
    }

    #[test]
    fn start_position_is_quiet() {
        let board = Board::standard();
        assert_eq!(is_check(&board, Color::White), Ok(false));
        assert_eq!(is_checkmate(&board, Color::Black), Ok(false));
    }

    #[test]
    fn rook_on_open_file_gives_check() {
        let board = Board::from_pieces([
            Piece::new(PieceKind::King, Color::White, square(4, 0)),
            Piece::new(PieceKind::King, Color::Black, square(0, 7)),
            Piece::new(PieceKind::Rook, Color::Black, square(4, 5)),
        ]);
        assert_eq!(is_check(&board, Color::White), Ok(true));
        assert_eq!(is_checkmate(&board, Color::White), Ok(false));
    }

    #[test]
    fn back_rank_mate_is_detected() {
        let board = Board::from_pieces([
            Piece::new(PieceKind::King, Color::Black, square(6, 7)),
            Piece::new(PieceKind::Pawn, Color::Black, square(5, 6)),
            Piece::new(PieceKind::Pawn, Color::Black, square(6, 6)),
            Piece::new(PieceKind::Pawn, Color::Black, square(7, 6)),
            Piece::new(PieceKind::Rook, Color::White, square(0, 7)),
            Piece::new(PieceKind::King, Color::White, square(6, 0)),
        ]);
        assert_eq!(is_checkmate(&board, Color::Black), Ok(true));
    }

    #[test]
    fn stalemate_needs_zero_moves_and_no_check() {
        let board = Board::from_pieces([
            Piece::new(PieceKind::King, Color::Black, square(0, 7)),
            Piece::new(PieceKind::Rook, Color::White, square(1, 0)),
            Piece::new(PieceKind::Queen, Color::White, square(2, 6)),
            Piece::new(PieceKind::King, Color::White, square(7, 0)),
        ]);
        assert_eq!(is_stalemate(&board, Color::Black, 0), Ok(true));
        assert_eq!(is_stalemate(&board, Color::Black, 1), Ok(false));
    }

    #[test]
    fn missing_king_surfaces_as_error() {
        let board = Board::from_pieces([Piece::new(PieceKind::King, Color::White, square(4, 0))]);
        assert_eq!(
            is_check(&board, Color::Black),
            Err(ChessErrors::MissingKing(Color::Black))
        );
    }
}
