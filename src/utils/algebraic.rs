//! Square naming in algebraic coordinates.
//!
//! Converts between `Position` values and human-readable coordinates such as
//! `e4`, and between single file/rank indices and their characters.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Position;

#[inline]
pub fn file_to_char(file: u8) -> char {
    char::from(b'a' + file)
}

#[inline]
pub fn rank_to_char(rank: u8) -> char {
    char::from(b'1' + rank)
}

pub fn char_to_file(c: char) -> Option<u8> {
    ('a'..='h').contains(&c).then(|| c as u8 - b'a')
}

pub fn char_to_rank(c: char) -> Option<u8> {
    ('1'..='8').contains(&c).then(|| c as u8 - b'1')
}

/// Name of the square, for example `"e4"`.
pub fn position_to_algebraic(position: Position) -> String {
    let mut out = String::with_capacity(2);
    out.push(file_to_char(position.file));
    out.push(rank_to_char(position.rank));
    out
}

/// Parses a square name such as `"e4"`.
pub fn algebraic_to_position(square: &str) -> ChessResult<Position> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChessErrors::InvalidSquare(square.to_owned()));
    };

    match (char_to_file(file), char_to_rank(rank)) {
        (Some(file), Some(rank)) => Ok(Position { file, rank }),
        _ => Err(ChessErrors::InvalidSquare(square.to_owned())),
    }
}
