//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type across the crate so callers can
//! propagate with `?` and match on the failure mode. The variants fall into a
//! few groups:
//! - usage errors raised eagerly at construction (`ConflictingBoardSources`,
//!   snapshot and square parsing failures, bad engine options),
//! - corruption of the board itself (`MissingKing`), which is a bug and not
//!   something normal callers recover from,
//! - notation the engine refuses to guess (`AmbiguousNotation`),
//! - expected control-flow outcomes (`IllegalMove`, `EmptyHistory`).

use thiserror::Error;

use crate::game_state::chess_types::Color;

/// Unified error type for the chess engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A board was requested from both an explicit piece list and a snapshot.
    #[error("cannot create a board from both a piece list and a snapshot string")]
    ConflictingBoardSources,

    /// The snapshot did not have 8 rows of 8 dash-separated tokens.
    ///
    /// Payload: a description of the offending row or count.
    #[error("malformed board snapshot: {0}")]
    InvalidSnapshotShape(String),

    /// A snapshot cell was not `oo` or a `{color}{kind}` pair.
    #[error("invalid board snapshot token: {0:?}")]
    InvalidSnapshotToken(String),

    /// A square name such as `"e4"` could not be parsed.
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),

    /// The board does not contain a king for the given side. This indicates a
    /// corrupted board; the engine cannot decide check without it.
    #[error("no king found for {0:?}")]
    MissingKing(Color),

    /// More than two legal moves share one provisional identifier. Only
    /// two-way disambiguation is supported.
    #[error("{count} legal moves share the identifier {identifier:?}; cannot disambiguate")]
    AmbiguousNotation { identifier: String, count: usize },

    /// The identifier is not in the current legal-move map.
    #[error("illegal move: {0:?}")]
    IllegalMove(String),

    /// Undo was requested with no previous game state stored.
    #[error("no previous game state to restore")]
    EmptyHistory,

    /// An engine option had an unknown name or an unparsable value.
    #[error("invalid engine option {name:?} = {value:?}")]
    InvalidEngineOption { name: String, value: String },
}

pub type ChessResult<T> = Result<T, ChessErrors>;
