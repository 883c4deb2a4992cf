//! Search entry point for chess positions.

use std::sync::atomic::AtomicBool;

use tracing::debug;

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;
use crate::search::minimax::{Minimax, SearchStats};
use crate::search::search_node::{BoardEvaluator, ChessChildren, SearchNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub prune: bool,
    pub ordered: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            prune: true,
            ordered: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    /// Identifier to pass to `make_move`. `None` when the side to move has no
    /// legal move or the depth is 0.
    pub identifier: Option<String>,
    /// Value for the side to move at the root.
    pub value: f64,
    pub stats: SearchStats,
}

/// Best move for `player` on `board`, searched from `player`'s point of view.
pub fn best_move(
    board: &Board,
    player: Color,
    last_move: Option<&Move>,
    config: SearchConfig,
) -> ChessResult<SearchReport> {
    search_from(board, player, last_move, config, None)
}

pub fn best_move_for_state(state: &GameState, config: SearchConfig) -> ChessResult<SearchReport> {
    best_move(
        &state.board,
        state.current_player,
        state.last_move.as_ref(),
        config,
    )
}

/// Like `best_move`, but stops expanding nodes once `cancel` is raised.
pub fn best_move_with_cancel(
    board: &Board,
    player: Color,
    last_move: Option<&Move>,
    config: SearchConfig,
    cancel: &AtomicBool,
) -> ChessResult<SearchReport> {
    search_from(board, player, last_move, config, Some(cancel))
}

fn search_from(
    board: &Board,
    player: Color,
    last_move: Option<&Move>,
    config: SearchConfig,
    cancel: Option<&AtomicBool>,
) -> ChessResult<SearchReport> {
    let root = SearchNode::root(board.clone(), player, last_move.cloned());
    let evaluator = BoardEvaluator {
        perspective: player,
    };
    let children = ChessChildren {
        ordered: config.ordered,
    };

    let mut search = Minimax::new(&evaluator, &children, config.prune);
    if let Some(flag) = cancel {
        search = search.with_cancel_flag(flag);
    }
    let outcome = search.search(root, config.depth, true, f64::NEG_INFINITY, f64::INFINITY)?;
    let stats = search.stats();
    let identifier = outcome.best.and_then(|node| node.label);

    debug!(
        ?player,
        depth = config.depth,
        prune = config.prune,
        ordered = config.ordered,
        nodes = stats.nodes,
        value = outcome.value,
        best = identifier.as_deref().unwrap_or("-"),
        "search finished"
    );

    Ok(SearchReport {
        identifier,
        value: outcome.value,
        stats,
    })
}
