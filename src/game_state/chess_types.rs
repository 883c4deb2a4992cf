//! Primitive chess types shared by every subsystem.
//!
//! Squares are addressed by zero-based `(file, rank)` pairs where file 0 is the
//! `a` file and rank 0 is White's back rank. Pieces are small `Copy` values;
//! "moving" one produces a new value rather than mutating it.

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a single pawn step for this side.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank index of this side's pieces in the initial setup.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank index of this side's pawns in the initial setup.
    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    pub const fn snapshot_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn from_snapshot_char(c: char) -> Option<Self> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

/// Piece kind (color is carried separately on `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Letter used in algebraic notation. Pawns have none.
    pub const fn notation_letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some('N'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Rook => Some('R'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
        }
    }

    pub const fn snapshot_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_snapshot_char(c: char) -> Option<Self> {
        match c {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A square on the board. Both components are in `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub file: u8,
    pub rank: u8,
}

impl Position {
    /// Builds a position, returning `None` when either index is off the board.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// Moves the position by a file and rank offset, or `None` if that leaves
    /// the board.
    #[inline]
    pub fn shifted(self, d_file: i8, d_rank: i8) -> Option<Self> {
        let file = self.file as i8 + d_file;
        let rank = self.rank as i8 + d_rank;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Row-major index in `0..64`, rank 0 first.
    #[inline]
    pub const fn index(self) -> usize {
        debug_assert!(self.file < 8 && self.rank < 8);
        self.rank as usize * 8 + self.file as usize
    }

    /// Iterates all 64 squares, rank 0 first.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Position { file, rank }))
    }
}

/// A piece standing on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Position,
    /// Cleared until the piece leaves its square for the first time.
    pub has_moved: bool,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color, position: Position) -> Self {
        Self {
            kind,
            color,
            position,
            has_moved: false,
        }
    }

    /// The same piece relocated to `destination`.
    ///
    /// The piece is only marked as moved when the square actually changes.
    pub fn moved_to(self, destination: Position) -> Self {
        if destination == self.position {
            return self;
        }
        Self {
            position: destination,
            has_moved: true,
            ..self
        }
    }

    /// Two-character snapshot token such as `wk` or `bp`.
    pub fn snapshot_token(&self) -> String {
        let mut token = String::with_capacity(2);
        token.push(self.color.snapshot_char());
        token.push(self.kind.snapshot_char());
        token
    }
}
