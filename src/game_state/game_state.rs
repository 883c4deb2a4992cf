//! Turn engine.
//!
//! `GameState` is one ply's worth of state: the board, whose turn it is, the
//! legal moves keyed by identifier and the move that led here. `ChessGame`
//! owns the current state plus a history stack so moves can be undone.

use std::fmt;

use tracing::{debug, info, warn};

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::move_generation::legal_move_checks;
use crate::moves::move_descriptions::Move;
use crate::notation::algebraic_notation::legal_moves_with_notation;
use crate::notation::legal_moves::{LegalMoves, NotatedMove};
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,
    /// Full-move number, starting at 1 and bumped after Black moves.
    pub turn: u32,
    pub legal_moves: LegalMoves,
    pub last_move: Option<Move>,
}

impl GameState {
    /// Builds a state and computes its legal moves.
    pub fn new(
        board: Board,
        current_player: Color,
        turn: u32,
        last_move: Option<Move>,
    ) -> ChessResult<Self> {
        let legal_moves = legal_moves_with_notation(&board, current_player, last_move.as_ref())?;
        Ok(Self {
            board,
            current_player,
            turn,
            legal_moves,
            last_move,
        })
    }

    /// State after playing `mv`, which must be legal here.
    pub fn successor(&self, mv: &Move) -> ChessResult<Self> {
        let turn = match self.current_player {
            Color::White => self.turn,
            Color::Black => self.turn + 1,
        };
        Self::new(
            mv.apply(&self.board),
            self.current_player.opposite(),
            turn,
            Some(mv.clone()),
        )
    }

    pub fn is_check(&self) -> ChessResult<bool> {
        legal_move_checks::is_check(&self.board, self.current_player)
    }

    /// In check with no legal move at all, en passant included.
    pub fn is_checkmate(&self) -> ChessResult<bool> {
        Ok(self.legal_moves.is_empty() && self.is_check()?)
    }

    pub fn is_stalemate(&self) -> ChessResult<bool> {
        legal_move_checks::is_stalemate(&self.board, self.current_player, self.legal_moves.len())
    }

    /// With no legal moves the game is over either way.
    pub fn is_game_over(&self) -> bool {
        self.legal_moves.is_empty()
    }

    /// The side that delivered mate, if any.
    pub fn winner(&self) -> ChessResult<Option<Color>> {
        Ok(self
            .is_checkmate()?
            .then(|| self.current_player.opposite()))
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}

/// A game in progress with undo support.
#[derive(Debug, Clone)]
pub struct ChessGame {
    current: GameState,
    history: Vec<GameState>,
}

impl ChessGame {
    /// Standard setup, White to move, turn 1.
    pub fn new_game() -> ChessResult<Self> {
        info!("starting new game");
        Self::from_board(Board::standard(), Color::White, None)
    }

    /// Game starting from an arbitrary board.
    ///
    /// `last_move` is only consulted for en passant eligibility.
    pub fn from_board(
        board: Board,
        current_player: Color,
        last_move: Option<Move>,
    ) -> ChessResult<Self> {
        let current = GameState::new(board, current_player, 1, last_move)?;
        debug!(
            player = ?current_player,
            legal_moves = current.legal_moves.len(),
            "game initialised"
        );
        Ok(Self {
            current,
            history: Vec::new(),
        })
    }

    pub fn from_snapshot(snapshot: &str, current_player: Color) -> ChessResult<Self> {
        Self::from_board(Board::from_snapshot(snapshot)?, current_player, None)
    }

    pub fn state(&self) -> &GameState {
        &self.current
    }

    pub fn board(&self) -> &Board {
        &self.current.board
    }

    pub fn current_player(&self) -> Color {
        self.current.current_player
    }

    pub fn turn(&self) -> u32 {
        self.current.turn
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.current.last_move.as_ref()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Plays the move named `identifier`.
    ///
    /// Returns `Ok(false)` and leaves the game untouched when the identifier
    /// is not legal. Errors only come from a corrupted board.
    pub fn make_move(&mut self, identifier: &str) -> ChessResult<bool> {
        let Some(mv) = self.current.legal_moves.get(identifier).cloned() else {
            warn!(identifier, player = ?self.current.current_player, "rejected illegal move");
            return Ok(false);
        };

        let next = self.current.successor(&mv)?;
        debug!(
            identifier,
            player = ?self.current.current_player,
            turn = self.current.turn,
            "move applied"
        );
        self.history.push(std::mem::replace(&mut self.current, next));
        Ok(true)
    }

    /// Like `make_move`, but an unknown identifier is an error.
    pub fn try_make_move(&mut self, identifier: &str) -> ChessResult<()> {
        if self.make_move(identifier)? {
            Ok(())
        } else {
            Err(ChessErrors::IllegalMove(identifier.to_owned()))
        }
    }

    /// Restores the state before the last move.
    pub fn undo_move(&mut self) -> ChessResult<()> {
        let previous = self.history.pop().ok_or(ChessErrors::EmptyHistory)?;
        debug!(turn = previous.turn, player = ?previous.current_player, "move undone");
        self.current = previous;
        Ok(())
    }

    pub fn get_legal_moves(&self) -> Vec<String> {
        self.current
            .legal_moves
            .identifiers()
            .map(str::to_owned)
            .collect()
    }

    pub fn legal_moves(&self) -> &LegalMoves {
        &self.current.legal_moves
    }

    /// Destinations of the piece on `position`. Castling shows up under the
    /// king's square only.
    pub fn get_legal_destinations_for_piece(&self, position: Position) -> Vec<Position> {
        self.current
            .legal_moves
            .iter()
            .filter(|entry| entry.mv.origin() == position)
            .map(|entry| entry.mv.destination())
            .collect()
    }

    /// The legal move taking the piece on `from` to `to`, if any.
    pub fn get_move_from_positions(&self, from: Position, to: Position) -> Option<&NotatedMove> {
        self.current.legal_moves.find_by_squares(from, to)
    }

    pub fn is_check(&self) -> ChessResult<bool> {
        self.current.is_check()
    }

    pub fn is_checkmate(&self) -> ChessResult<bool> {
        self.current.is_checkmate()
    }

    pub fn is_stalemate(&self) -> ChessResult<bool> {
        self.current.is_stalemate()
    }

    pub fn is_game_over(&self) -> bool {
        self.current.is_game_over()
    }

    pub fn winner(&self) -> ChessResult<Option<Color>> {
        self.current.winner()
    }
}

impl fmt::Display for ChessGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.current.fmt(f)
    }
}
