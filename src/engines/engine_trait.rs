//! Engine abstraction.
//!
//! An engine picks a move for the side to move in a `GameState` and hands back
//! its identifier, ready for `ChessGame::make_move`.

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineOutput {
    /// `None` when there is no legal move.
    pub best_move: Option<String>,
    /// Search value for the side to move, when the engine computes one.
    pub value: Option<f64>,
    pub info_lines: Vec<String>,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn set_option(&mut self, _name: &str, _value: &str) -> ChessResult<()> {
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput>;
}
