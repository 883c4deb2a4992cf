//! Algebraic identifiers for legal moves.
//!
//! Every move first gets a provisional identifier: `O-O` or `O-O-O` for
//! castling, otherwise piece letter, `x` on capture, destination square,
//! ` e.p.` for en passant and `+` or `#` when the opponent ends up in check
//! or checkmate. Pawns have no letter. Two moves that share a provisional
//! identifier get the origin file (or rank, when the files match) inserted
//! after the piece letter. Larger collisions are refused.

use tracing::debug;

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_checks::is_check;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::notation::legal_moves::{LegalMoves, NotatedMove};
use crate::utils::algebraic::{file_to_char, position_to_algebraic, rank_to_char};

pub const EN_PASSANT_SUFFIX: &str = " e.p.";

/// `+`, `#` or nothing, depending on what `mv` does to the opponent.
///
/// Mate counts every legal reply, en passant included, since `mv` is passed
/// on as the opponent's last move.
pub fn check_suffix(board: &Board, mv: &Move) -> ChessResult<&'static str> {
    let opponent = mv.moving_piece().color.opposite();
    let next = mv.apply(board);
    if !is_check(&next, opponent)? {
        return Ok("");
    }
    if all_legal_moves(&next, opponent, Some(mv))?.is_empty() {
        Ok("#")
    } else {
        Ok("+")
    }
}

pub fn provisional_identifier(board: &Board, mv: &Move) -> ChessResult<String> {
    if let MoveKind::Castling(side) = mv.kind {
        return Ok(side.notation().to_string());
    }

    let mut identifier = String::with_capacity(10);
    if let Some(letter) = mv.moving_piece().kind.notation_letter() {
        identifier.push(letter);
    }
    if mv.is_capturing {
        identifier.push('x');
    }
    identifier.push_str(&position_to_algebraic(mv.destination()));
    if mv.is_en_passant() {
        identifier.push_str(EN_PASSANT_SUFFIX);
    }
    identifier.push_str(check_suffix(board, mv)?);
    Ok(identifier)
}

/// Inserts the distinguishing origin component after the piece letter.
fn disambiguate_pair(identifier: &str, mv: &Move, other: &Move) -> String {
    let insert_at = usize::from(mv.moving_piece().kind.notation_letter().is_some());
    let marker = if mv.origin().file != other.origin().file {
        file_to_char(mv.origin().file)
    } else {
        rank_to_char(mv.origin().rank)
    };
    let mut out = String::with_capacity(identifier.len() + 1);
    out.push_str(&identifier[..insert_at]);
    out.push(marker);
    out.push_str(&identifier[insert_at..]);
    out
}

/// Assigns final identifiers to `moves`, keeping their order.
pub fn notate_moves(board: &Board, moves: Vec<Move>) -> ChessResult<LegalMoves> {
    let provisional = moves
        .iter()
        .map(|mv| provisional_identifier(board, mv))
        .collect::<ChessResult<Vec<_>>>()?;

    let mut entries = Vec::with_capacity(moves.len());
    for (index, mv) in moves.iter().enumerate() {
        let identifier = &provisional[index];
        let group: Vec<usize> = provisional
            .iter()
            .enumerate()
            .filter(|(_, other)| *other == identifier)
            .map(|(other_index, _)| other_index)
            .collect();

        let final_identifier = match group.len() {
            1 => identifier.clone(),
            2 => {
                let other_index = if group[0] == index { group[1] } else { group[0] };
                disambiguate_pair(identifier, mv, &moves[other_index])
            }
            count => {
                debug!(identifier = identifier.as_str(), count, "cannot disambiguate");
                return Err(ChessErrors::AmbiguousNotation {
                    identifier: identifier.clone(),
                    count,
                });
            }
        };
        entries.push(NotatedMove {
            identifier: final_identifier,
            mv: mv.clone(),
        });
    }
    Ok(LegalMoves::new(entries))
}

/// All legal moves for `color`, with final identifiers.
pub fn legal_moves_with_notation(
    board: &Board,
    color: Color,
    last_move: Option<&Move>,
) -> ChessResult<LegalMoves> {
    notate_moves(board, all_legal_moves(board, color, last_move)?)
}
