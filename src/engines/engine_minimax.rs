//! Minimax engine with configurable depth, pruning and move ordering.

use tracing::info;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::game_state::GameState;
use crate::search::best_move::{best_move_for_state, SearchConfig};

#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: SearchConfig,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Ply Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        let invalid = || ChessErrors::InvalidEngineOption {
            name: name.to_owned(),
            value: value.to_owned(),
        };
        match name.trim().to_ascii_lowercase().as_str() {
            "depth" => self.config.depth = value.trim().parse::<u8>().map_err(|_| invalid())?,
            "prune" => self.config.prune = parse_bool(value).ok_or_else(invalid)?,
            "ordered" => self.config.ordered = parse_bool(value).ok_or_else(invalid)?,
            _ => return Err(invalid()),
        }
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        let report = best_move_for_state(game_state, self.config)?;
        info!(
            player = ?game_state.current_player,
            best = report.identifier.as_deref().unwrap_or("-"),
            value = report.value,
            nodes = report.stats.nodes,
            "minimax engine chose a move"
        );
        Ok(EngineOutput {
            best_move: report.identifier,
            value: Some(report.value),
            info_lines: vec![
                format!("minimax depth {}", self.config.depth),
                format!("minimax nodes {}", report.stats.nodes),
                format!("minimax cutoffs {}", report.stats.cutoffs),
            ],
        })
    }
}
