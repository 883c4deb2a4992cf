use crate::game_state::board::Board;
use crate::game_state::chess_types::Position;
use crate::utils::snapshot_parser::EMPTY_TOKEN;

/// Renders the board in the snapshot format read by `parse_snapshot`.
pub fn generate_snapshot(board: &Board) -> String {
    (0..8u8)
        .rev()
        .map(|rank| {
            (0..8u8)
                .map(|file| match board.get(Position { file, rank }) {
                    Some(piece) => piece.snapshot_token(),
                    None => EMPTY_TOKEN.to_owned(),
                })
                .collect::<Vec<_>>()
                .join("-")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
