//! Move values and their application to a board.
//!
//! A `Move` lists one or more `(from, to)` sub-moves to apply in order, the
//! pieces that move, and a set of squares to clear afterwards. Only castling
//! has two sub-moves (king first, then rook) and only en passant clears a
//! square other than a destination.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Position};

/// Raw geometric candidate, blind to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveCandidate {
    pub from: Position,
    pub to: Position,
}

impl MoveCandidate {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    /// Toward the `h` file, `O-O`.
    Kingside,
    /// Toward the `a` file, `O-O-O`.
    Queenside,
}

impl CastlingSide {
    /// File direction walked from the king toward the rook.
    pub const fn direction(self) -> i8 {
        match self {
            CastlingSide::Kingside => 1,
            CastlingSide::Queenside => -1,
        }
    }

    pub const fn notation(self) -> &'static str {
        match self {
            CastlingSide::Kingside => "O-O",
            CastlingSide::Queenside => "O-O-O",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Regular,
    Castling(CastlingSide),
    EnPassant,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub kind: MoveKind,
    /// Sub-moves applied in sequence.
    pub piece_moves: Vec<MoveCandidate>,
    /// Pieces as they stood before the move, parallel to `piece_moves`.
    pub moving_pieces: Vec<Piece>,
    pub is_capturing: bool,
    /// Set on a pawn's two-square advance; the opponent may reply en passant.
    pub allows_en_passant: bool,
    /// Squares cleared after the sub-moves are applied.
    pub pieces_to_delete: Vec<Position>,
}

impl Move {
    pub fn regular(candidate: MoveCandidate, piece: Piece, is_capturing: bool) -> Self {
        let allows_en_passant = piece.kind == PieceKind::Pawn
            && (candidate.to.rank as i8 - candidate.from.rank as i8).abs() == 2;
        Self {
            kind: MoveKind::Regular,
            piece_moves: vec![candidate],
            moving_pieces: vec![piece],
            is_capturing,
            allows_en_passant,
            pieces_to_delete: Vec::new(),
        }
    }

    pub fn castling(
        side: CastlingSide,
        king_move: MoveCandidate,
        rook_move: MoveCandidate,
        king: Piece,
        rook: Piece,
    ) -> Self {
        Self {
            kind: MoveKind::Castling(side),
            piece_moves: vec![king_move, rook_move],
            moving_pieces: vec![king, rook],
            is_capturing: false,
            allows_en_passant: false,
            pieces_to_delete: Vec::new(),
        }
    }

    pub fn en_passant(candidate: MoveCandidate, pawn: Piece, captured: Position) -> Self {
        Self {
            kind: MoveKind::EnPassant,
            piece_moves: vec![candidate],
            moving_pieces: vec![pawn],
            is_capturing: true,
            allows_en_passant: false,
            pieces_to_delete: vec![captured],
        }
    }

    /// The primary sub-move: the king for castling, the only one otherwise.
    #[inline]
    pub fn primary(&self) -> MoveCandidate {
        self.piece_moves[0]
    }

    #[inline]
    pub fn origin(&self) -> Position {
        self.primary().from
    }

    #[inline]
    pub fn destination(&self) -> Position {
        self.primary().to
    }

    #[inline]
    pub fn moving_piece(&self) -> Piece {
        self.moving_pieces[0]
    }

    pub fn is_castling(&self) -> bool {
        matches!(self.kind, MoveKind::Castling(_))
    }

    pub fn is_en_passant(&self) -> bool {
        self.kind == MoveKind::EnPassant
    }

    /// Applies the sub-moves, then the deletions, returning the new board.
    pub fn apply(&self, board: &Board) -> Board {
        apply_move(board, self)
    }
}

pub fn apply_move(board: &Board, mv: &Move) -> Board {
    let mut next = board.clone();
    for piece_move in &mv.piece_moves {
        next = next.move_piece(piece_move.from, piece_move.to);
    }
    for position in &mv.pieces_to_delete {
        next = next.delete_piece(*position);
    }
    next
}
