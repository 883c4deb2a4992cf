//! Ray walking shared by bishops, rooks and queens.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::moves::move_descriptions::MoveCandidate;

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Walks each direction from the piece until the board edge or a blocker.
///
/// The walk stops before a friendly piece and includes the first enemy piece.
pub fn slide_candidates(
    board: &Board,
    piece: &Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<MoveCandidate>,
) {
    for &(d_file, d_rank) in directions {
        let mut cursor = piece.position;
        while let Some(next) = cursor.shifted(d_file, d_rank) {
            match board.get(next) {
                None => out.push(MoveCandidate::new(piece.position, next)),
                Some(other) => {
                    if other.color != piece.color {
                        out.push(MoveCandidate::new(piece.position, next));
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
}

/// Pushes every fixed-offset destination that is empty or holds an enemy.
pub fn step_candidates(
    board: &Board,
    piece: &Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<MoveCandidate>,
) {
    for &(d_file, d_rank) in offsets {
        if let Some(to) = piece.position.shifted(d_file, d_rank) {
            if board.is_empty_or_enemy(to, piece.color) {
                out.push(MoveCandidate::new(piece.position, to));
            }
        }
    }
}
