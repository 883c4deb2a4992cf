//! Random legal-looking boards for property tests and benchmarks.
//!
//! Both kings are placed first, then the remaining pieces are split between
//! the colors with a random imbalance. Per-color caps follow the initial
//! material (8 pawns, 2 each of knights, bishops and rooks, 1 queen), which
//! also keeps any algebraic identifier shared by at most two moves. Boards
//! where either side is in check are rejected and redrawn. Every piece is
//! marked as moved, so no castling rights exist.

use rand::prelude::IndexedRandom;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};
use crate::move_generation::legal_move_checks::is_check;

pub const IMBALANCE_LOW: f64 = 0.3;
pub const IMBALANCE_HIGH: f64 = 0.7;

/// Upper bound on attempts before giving up on a draw.
const MAX_ATTEMPTS: usize = 1000;

fn piece_cap(kind: PieceKind) -> usize {
    match kind {
        PieceKind::Pawn => 8,
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook => 2,
        PieceKind::Queen | PieceKind::King => 1,
    }
}

const SAMPLED_KINDS: [PieceKind; 5] = [
    PieceKind::Pawn,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
    PieceKind::Queen,
];

/// Places `n_pieces` pieces, kings included, without checking for check.
///
/// `n_pieces` is clamped to `2..=32`.
pub fn sample_unchecked_board<R: Rng + ?Sized>(rng: &mut R, n_pieces: usize) -> Board {
    let n_pieces = n_pieces.clamp(2, 32);
    let mut squares: Vec<Position> = Position::all().collect();
    squares.shuffle(rng);

    let mut pieces = Vec::with_capacity(n_pieces);
    for color in [Color::White, Color::Black] {
        if let Some(square) = squares.pop() {
            pieces.push(placed(PieceKind::King, color, square));
        }
    }

    let remaining = n_pieces - 2;
    let white_share = rng.random_range(IMBALANCE_LOW..IMBALANCE_HIGH);
    let white_count = (white_share * remaining as f64) as usize;
    let counts = [(Color::White, white_count), (Color::Black, remaining - white_count)];

    for (color, count) in counts {
        let mut placed_per_kind = [0usize; 6];
        for _ in 0..count {
            let available: Vec<PieceKind> = SAMPLED_KINDS
                .into_iter()
                .filter(|kind| placed_per_kind[kind.index()] < piece_cap(*kind))
                .collect();
            let Some(&kind) = available.choose(rng) else {
                break;
            };
            // Pawns never stand on either back rank.
            let slot = squares
                .iter()
                .rposition(|square| kind != PieceKind::Pawn || (1..=6).contains(&square.rank));
            let Some(slot) = slot else {
                continue;
            };
            let square = squares.remove(slot);
            placed_per_kind[kind.index()] += 1;
            pieces.push(placed(kind, color, square));
        }
    }

    Board::from_pieces(pieces)
}

/// Random board with `n_pieces` pieces where neither side is in check.
pub fn sample_random_board<R: Rng + ?Sized>(rng: &mut R, n_pieces: usize) -> ChessResult<Board> {
    let mut board = sample_unchecked_board(rng, n_pieces);
    for attempt in 1..MAX_ATTEMPTS {
        if !is_check(&board, Color::White)? && !is_check(&board, Color::Black)? {
            return Ok(board);
        }
        trace!(attempt, "random board rejected: side in check");
        board = sample_unchecked_board(rng, n_pieces);
    }
    // Two bare kings are never in check.
    let mut squares: Vec<Position> = Position::all().collect();
    squares.shuffle(rng);
    Ok(Board::from_pieces([
        placed(PieceKind::King, Color::White, squares[0]),
        placed(PieceKind::King, Color::Black, far_square(squares[0])),
    ]))
}

fn placed(kind: PieceKind, color: Color, square: Position) -> Piece {
    Piece {
        has_moved: true,
        ..Piece::new(kind, color, square)
    }
}

/// A square at least two files and two ranks away.
fn far_square(square: Position) -> Position {
    Position {
        file: (square.file + 4) % 8,
        rank: (square.rank + 4) % 8,
    }
}
