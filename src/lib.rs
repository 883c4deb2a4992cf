//! Crate root module declarations for the ply chess engine.
//!
//! Exposes the rules engine (board, pieces, move generation, castling and en
//! passant), algebraic move notation, the turn engine with undo, and a
//! generic minimax search with alpha-beta pruning plus the engines built on
//! top of it.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_castling;
    pub mod legal_moves_en_passant;
    pub mod legal_moves_regular;
    pub mod move_candidates;
    pub mod perft;
}

pub mod notation {
    pub mod algebraic_notation;
    pub mod legal_moves;
}

pub mod search {
    pub mod best_move;
    pub mod board_scoring;
    pub mod minimax;
    pub mod search_node;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod random_board;
    pub mod render_game_state;
    pub mod snapshot_generator;
    pub mod snapshot_parser;
}

pub use errors::{ChessErrors, ChessResult};
pub use game_state::board::Board;
pub use game_state::chess_types::{Color, Piece, PieceKind, Position};
pub use game_state::game_state::{ChessGame, GameState};
pub use moves::move_descriptions::{CastlingSide, Move, MoveKind};
pub use search::best_move::{best_move, SearchConfig, SearchReport};
