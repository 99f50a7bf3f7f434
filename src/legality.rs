use crate::board::Board;
use crate::types::{Color, NUM_SQUARES, Position};

/// Capture lists for every square and both colors, derived from one board.
///
/// A square's list for a color is non-empty iff placing that color there is legal.
/// Occupied squares always have empty lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalityIndex {
    captures: Vec<[Vec<Position>; 2]>,
}

impl LegalityIndex {
    pub fn compute(board: &Board) -> Self {
        let captures = (0..NUM_SQUARES)
            .map(|idx| {
                let at = Position::from_index(idx);
                Color::ALL.map(|color| board.captures(at, color))
            })
            .collect();
        Self { captures }
    }

    /// Stones that `color` would flip by playing at `at`.
    pub fn captures(&self, at: Position, color: Color) -> &[Position] {
        &self.captures[at.index()][color.index()]
    }

    pub fn is_legal(&self, at: Position, color: Color) -> bool {
        !self.captures(at, color).is_empty()
    }

    /// Legal squares for `color` in row-major order.
    pub fn legal_targets(&self, color: Color) -> Vec<Position> {
        self.captures
            .iter()
            .enumerate()
            .filter(|(_, lists)| !lists[color.index()].is_empty())
            .map(|(idx, _)| Position::from_index(idx))
            .collect()
    }

    pub fn can_move(&self, color: Color) -> bool {
        self.captures
            .iter()
            .any(|lists| !lists[color.index()].is_empty())
    }
}
