//! Canonical chess-rule constants.
//!
//! Stores the initial setup, both as a piece placement table and as the
//! equivalent board snapshot, plus the home-square rule used to recover the
//! "never moved" flag for pieces read from a snapshot.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

/// Standard starting position as a board snapshot (rank 8 first).
pub const STARTING_POSITION_SNAPSHOT: &str = "br-bn-bb-bq-bk-bb-bn-br
bp-bp-bp-bp-bp-bp-bp-bp
oo-oo-oo-oo-oo-oo-oo-oo
oo-oo-oo-oo-oo-oo-oo-oo
oo-oo-oo-oo-oo-oo-oo-oo
oo-oo-oo-oo-oo-oo-oo-oo
wp-wp-wp-wp-wp-wp-wp-wp
wr-wn-wb-wq-wk-wb-wn-wr";

/// Back-rank piece order from the `a` file to the `h` file.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 32 pieces of the initial setup.
pub fn initial_pieces() -> impl Iterator<Item = Piece> {
    [Color::White, Color::Black].into_iter().flat_map(|color| {
        (0..8u8).flat_map(move |file| {
            let back = Piece::new(
                BACK_RANK_ORDER[file as usize],
                color,
                Position {
                    file,
                    rank: color.back_rank(),
                },
            );
            let pawn = Piece::new(
                PieceKind::Pawn,
                color,
                Position {
                    file,
                    rank: color.pawn_rank(),
                },
            );
            [back, pawn]
        })
    })
}

/// Whether `position` is a square where a piece of this kind and color stands
/// in the initial setup.
pub fn is_home_square(kind: PieceKind, color: Color, position: Position) -> bool {
    if kind == PieceKind::Pawn {
        return position.rank == color.pawn_rank();
    }
    position.rank == color.back_rank() && BACK_RANK_ORDER[position.file as usize] == kind
}
