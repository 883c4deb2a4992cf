//! Chess positions as search-tree nodes.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::moves::move_descriptions::Move;
use crate::notation::algebraic_notation::legal_moves_with_notation;
use crate::notation::legal_moves::NotatedMove;
use crate::search::board_scoring::board_value;
use crate::search::minimax::{ChildGenerator, NodeEvaluator};

#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode {
    pub board: Board,
    /// Identifier of the move that produced this node; `None` at the root.
    pub label: Option<String>,
    /// Side to move from this node.
    pub player: Color,
    pub last_move: Option<Move>,
}

impl SearchNode {
    pub fn root(board: Board, player: Color, last_move: Option<Move>) -> Self {
        Self {
            board,
            label: None,
            player,
            last_move,
        }
    }

    fn child(&self, notated: NotatedMove) -> Self {
        Self {
            board: notated.mv.apply(&self.board),
            label: Some(notated.identifier),
            player: self.player.opposite(),
            last_move: Some(notated.mv),
        }
    }
}

/// Search order bucket: lower is searched first.
fn move_potential(notated: &NotatedMove) -> u8 {
    if notated.identifier.ends_with('#') {
        0
    } else if notated.mv.is_capturing && notated.mv.moving_piece().kind == PieceKind::Pawn {
        1
    } else if notated.mv.is_capturing {
        2
    } else {
        3
    }
}

/// Expands a node into one child per legal move.
#[derive(Debug, Clone, Copy)]
pub struct ChessChildren {
    /// Mates first, then pawn captures, then other captures, then the rest.
    pub ordered: bool,
}

impl Default for ChessChildren {
    fn default() -> Self {
        Self { ordered: true }
    }
}

impl ChildGenerator<SearchNode> for ChessChildren {
    fn children(&self, node: &SearchNode) -> ChessResult<Vec<SearchNode>> {
        let legal = legal_moves_with_notation(&node.board, node.player, node.last_move.as_ref())?;
        let mut moves: Vec<NotatedMove> = legal.iter().cloned().collect();
        if self.ordered {
            // Stable, so generation order is kept inside each bucket.
            moves.sort_by_key(move_potential);
        }
        Ok(moves.into_iter().map(|notated| node.child(notated)).collect())
    }
}

/// Scores nodes for a fixed side, the one to move at the root.
#[derive(Debug, Clone, Copy)]
pub struct BoardEvaluator {
    pub perspective: Color,
}

impl NodeEvaluator<SearchNode> for BoardEvaluator {
    fn evaluate(&self, node: &SearchNode) -> ChessResult<f64> {
        board_value(&node.board, self.perspective)
    }
}
