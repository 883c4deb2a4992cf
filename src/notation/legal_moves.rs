//! Ordered identifier-to-move collection.

use crate::game_state::chess_types::Position;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotatedMove {
    pub identifier: String,
    pub mv: Move,
}

/// Legal moves keyed by their final algebraic identifier.
///
/// Insertion order is kept, so iterating yields moves in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoves {
    entries: Vec<NotatedMove>,
}

impl LegalMoves {
    pub fn new(entries: Vec<NotatedMove>) -> Self {
        Self { entries }
    }

    pub fn get(&self, identifier: &str) -> Option<&Move> {
        self.entries
            .iter()
            .find(|entry| entry.identifier == identifier)
            .map(|entry| &entry.mv)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.get(identifier).is_some()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.identifier.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NotatedMove> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First move whose primary sub-move goes from `from` to `to`.
    pub fn find_by_squares(&self, from: Position, to: Position) -> Option<&NotatedMove> {
        self.entries
            .iter()
            .find(|entry| entry.mv.origin() == from && entry.mv.destination() == to)
    }
}

impl<'a> IntoIterator for &'a LegalMoves {
    type Item = &'a NotatedMove;
    type IntoIter = std::slice::Iter<'a, NotatedMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
