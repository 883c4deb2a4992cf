//! Snapshot-to-Board parser.
//!
//! A snapshot is 8 newline-separated rows, rank 8 first, each row holding 8
//! dash-separated two-character tokens: `oo` for an empty square, otherwise a
//! color letter (`w`/`b`) followed by a kind letter (`p n b r q k`).
//! Surrounding whitespace on each row is ignored so snapshots can be written
//! as indented string literals.
//!
//! Snapshots carry no move history. A parsed piece counts as never moved iff
//! it stands on a home square for its kind and color.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::is_home_square;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

pub const EMPTY_TOKEN: &str = "oo";

pub fn parse_snapshot(snapshot: &str) -> ChessResult<Board> {
    let rows: Vec<&str> = snapshot
        .lines()
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .collect();
    if rows.len() != 8 {
        return Err(ChessErrors::InvalidSnapshotShape(format!(
            "expected 8 rows, found {}",
            rows.len()
        )));
    }

    let mut pieces = Vec::with_capacity(32);
    for (row_index, row) in rows.iter().enumerate() {
        let rank = 7 - row_index as u8;
        let tokens: Vec<&str> = row.split('-').map(str::trim).collect();
        if tokens.len() != 8 {
            return Err(ChessErrors::InvalidSnapshotShape(format!(
                "row {} has {} tokens: {row}",
                row_index + 1,
                tokens.len()
            )));
        }

        for (file, token) in tokens.iter().enumerate() {
            let position = Position {
                file: file as u8,
                rank,
            };
            if let Some(piece) = parse_token(token, position)? {
                pieces.push(piece);
            }
        }
    }

    Ok(Board::from_pieces(pieces))
}

fn parse_token(token: &str, position: Position) -> ChessResult<Option<Piece>> {
    if token == EMPTY_TOKEN {
        return Ok(None);
    }

    let mut chars = token.chars();
    let (Some(color_char), Some(kind_char), None) = (chars.next(), chars.next(), chars.next())
    else {
        return Err(ChessErrors::InvalidSnapshotToken(token.to_owned()));
    };

    let color = Color::from_snapshot_char(color_char)
        .ok_or_else(|| ChessErrors::InvalidSnapshotToken(token.to_owned()))?;
    let kind = PieceKind::from_snapshot_char(kind_char)
        .ok_or_else(|| ChessErrors::InvalidSnapshotToken(token.to_owned()))?;

    Ok(Some(Piece {
        kind,
        color,
        position,
        has_moved: !is_home_square(kind, color, position),
    }))
}
