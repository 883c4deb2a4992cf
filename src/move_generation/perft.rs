//! Perft node counting over the legal move generator.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_checks::is_check;
use crate::move_generation::legal_move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

/// Leaf statistics. Captures, en passant, castles and checks are counted for
/// moves made on the final ply only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.checks += rhs.checks;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    color: Color,
    last_move: Option<&Move>,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(board, color, last_move)? {
        let next = mv.apply(board);
        if depth == 1 {
            total.merge(PerftCounts {
                nodes: 1,
                captures: usize::from(mv.is_capturing),
                en_passant: usize::from(mv.is_en_passant()),
                castles: usize::from(mv.is_castling()),
                checks: usize::from(is_check(&next, color.opposite())?),
            });
        } else {
            total.merge(perft(generator, &next, color.opposite(), Some(&mv), depth - 1)?);
        }
    }
    Ok(total)
}

/// Per-root-move node counts, useful when hunting a generator bug.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    color: Color,
    depth: u8,
) -> ChessResult<Vec<(Move, usize)>> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }
    for mv in generator.generate_legal_moves(board, color, None)? {
        let next = mv.apply(board);
        let counts = perft(generator, &next, color.opposite(), Some(&mv), depth - 1)?;
        out.push((mv, counts.nodes));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    #[test]
    fn startpos_perft_matches_known_counts() {
        let board = Board::standard();
        let expected = [(1u8, 20usize), (2, 400), (3, 8902)];
        for (depth, nodes) in expected {
            let counts = perft(&LegalMoveGenerator, &board, Color::White, None, depth)
                .expect("perft from the start position should succeed");
            assert_eq!(counts.nodes, nodes, "depth {depth}");
        }
    }

    #[test]
    fn startpos_depth_three_leaf_statistics() {
        let counts = perft(&LegalMoveGenerator, &Board::standard(), Color::White, None, 3)
            .expect("perft from the start position should succeed");
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.checks, 12);
        assert_eq!(counts.en_passant, 0);
        assert_eq!(counts.castles, 0);
    }

    #[test]
    fn divide_sums_to_perft() {
        let board = Board::standard();
        let divided = perft_divide(&LegalMoveGenerator, &board, Color::White, 2)
            .expect("divide from the start position should succeed");
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<usize>(), 400);
    }
}
