//! Immutable 8x8 board value.
//!
//! `Board` is a total mapping from square to optional piece. Every edit
//! (`move_piece`, `delete_piece`) returns a new board and leaves the receiver
//! untouched, so boards can be shared freely between game history entries and
//! search nodes.

use std::fmt;

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::initial_pieces;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};
use crate::utils::render_game_state::render_board;
use crate::utils::snapshot_generator::generate_snapshot;
use crate::utils::snapshot_parser::parse_snapshot;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// Builds a board from either a piece list or a snapshot string.
    ///
    /// With both empty the standard setup is returned. Supplying both is a
    /// usage error.
    pub fn new(pieces: &[Piece], snapshot: &str) -> ChessResult<Self> {
        match (pieces.is_empty(), snapshot.trim().is_empty()) {
            (false, false) => Err(ChessErrors::ConflictingBoardSources),
            (true, true) => Ok(Self::standard()),
            (false, true) => Ok(Self::from_pieces(pieces.iter().copied())),
            (true, false) => Self::from_snapshot(snapshot),
        }
    }

    /// Board with no pieces at all.
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// The 32-piece initial setup.
    pub fn standard() -> Self {
        Self::from_pieces(initial_pieces())
    }

    /// Places each piece on the square it names. A later piece on the same
    /// square replaces an earlier one.
    pub fn from_pieces<I: IntoIterator<Item = Piece>>(pieces: I) -> Self {
        let mut squares = [None; 64];
        for piece in pieces {
            squares[piece.position.index()] = Some(piece);
        }
        Self { squares }
    }

    /// Parses a snapshot. A piece is read as unmoved only on its home square,
    /// so `Board` equality survives a snapshot round trip only when every
    /// `has_moved` flag already follows that rule. A knight that left and
    /// came back reads as unmoved again.
    pub fn from_snapshot(snapshot: &str) -> ChessResult<Self> {
        parse_snapshot(snapshot)
    }

    pub fn to_snapshot(&self) -> String {
        generate_snapshot(self)
    }

    #[inline]
    pub fn get(&self, position: Position) -> Option<Piece> {
        self.squares[position.index()]
    }

    #[inline]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.squares[position.index()].is_some()
    }

    /// Occupied by a piece of the other color.
    #[inline]
    pub fn is_enemy(&self, position: Position, friendly: Color) -> bool {
        matches!(self.get(position), Some(piece) if piece.color != friendly)
    }

    /// Empty or occupied by an enemy piece.
    #[inline]
    pub fn is_empty_or_enemy(&self, position: Position, friendly: Color) -> bool {
        match self.get(position) {
            None => true,
            Some(piece) => piece.color != friendly,
        }
    }

    /// All pieces, rank 0 first.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.iter().flatten()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Square of `color`'s king.
    pub fn king_position(&self, color: Color) -> ChessResult<Position> {
        self.pieces_of(color)
            .find(|piece| piece.kind == PieceKind::King)
            .map(|king| king.position)
            .ok_or(ChessErrors::MissingKing(color))
    }

    /// New board with the piece on `from` relocated to `to`.
    ///
    /// Whatever stood on `to` is dropped, which is how captures happen. The
    /// moved piece is marked as having moved. `from == to` or an empty `from`
    /// yields an unchanged copy.
    pub fn move_piece(&self, from: Position, to: Position) -> Board {
        let mut next = self.clone();
        if from == to {
            return next;
        }
        if let Some(piece) = next.squares[from.index()].take() {
            next.squares[to.index()] = Some(piece.moved_to(to));
        }
        next
    }

    /// New board with `position` emptied.
    pub fn delete_piece(&self, position: Position) -> Board {
        let mut next = self.clone();
        next.squares[position.index()] = None;
        next
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
