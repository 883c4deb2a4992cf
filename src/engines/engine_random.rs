//! Random-move engine.
//!
//! Picks uniformly among legal identifiers. Useful as a sparring partner in
//! tests and as a baseline.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::game_state::GameState;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible move sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Ply Random"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        match name {
            "seed" => {
                let seed = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ChessErrors::InvalidEngineOption {
                        name: name.to_owned(),
                        value: value.to_owned(),
                    })?;
                self.rng = StdRng::seed_from_u64(seed);
                Ok(())
            }
            _ => Err(ChessErrors::InvalidEngineOption {
                name: name.to_owned(),
                value: value.to_owned(),
            }),
        }
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        let identifiers: Vec<&str> = game_state.legal_moves.identifiers().collect();

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", identifiers.len()));

        out.best_move = identifiers
            .as_slice()
            .choose(&mut self.rng)
            .map(|identifier| (*identifier).to_owned());
        debug!(choice = ?out.best_move, "random engine picked a move");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::errors::ChessErrors;
    use crate::game_state::game_state::ChessGame;

    #[test]
    fn random_engine_returns_a_legal_identifier() {
        let game = ChessGame::new_game().expect("new game should build");
        let mut engine = RandomEngine::seeded(7);
        let out = engine
            .choose_move(game.state())
            .expect("random engine should choose");
        let chosen = out.best_move.expect("start position has moves");
        assert!(game.legal_moves().contains(&chosen));
    }

    #[test]
    fn same_seed_same_choices() {
        let game = ChessGame::new_game().expect("new game should build");
        let mut a = RandomEngine::seeded(42);
        let mut b = RandomEngine::new();
        b.set_option("seed", "42").expect("seed option should parse");
        for _ in 0..5 {
            assert_eq!(
                a.choose_move(game.state()).expect("a should choose").best_move,
                b.choose_move(game.state()).expect("b should choose").best_move
            );
        }
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut engine = RandomEngine::seeded(1);
        assert!(matches!(
            engine.set_option("depth", "3"),
            Err(ChessErrors::InvalidEngineOption { .. })
        ));
    }
}
