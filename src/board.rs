use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::ParseBoardError;
use crate::types::{BOARD_SIZE, CellState, Color, NUM_SQUARES, Position};

/// Scan order: up-left, up, up-right, left, right, down-left, down, down-right.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// For every square, the squares walked outward in each direction until the edge.
static RAYS: Lazy<[[Vec<Position>; 8]; NUM_SQUARES]> = Lazy::new(|| {
    std::array::from_fn(|idx| {
        let origin = Position::from_index(idx);
        std::array::from_fn(|dir| {
            let (dr, dc) = DIRECTIONS[dir];
            let mut r = origin.row as i32 + dr;
            let mut c = origin.col as i32 + dc;
            let mut ray = Vec::new();
            while in_bounds(r, c) {
                ray.push(Position {
                    row: r as u8,
                    col: c as u8,
                });
                r += dr;
                c += dc;
            }
            ray
        })
    })
});

/// Reversi board as an 8x8 grid of cell states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the initial board:
    /// (3,3)=black, (4,4)=black, (3,4)=white, (4,3)=white.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.put(3, 3, Color::Black);
        board.put(4, 4, Color::Black);
        board.put(3, 4, Color::White);
        board.put(4, 3, Color::White);
        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get(&self, pos: Position) -> CellState {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Row-major view for rendering.
    pub fn cells(&self) -> &[[CellState; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Places one stone and flips `captured` to the same color.
    /// Callers pass a capture list taken from a legality index of this board.
    pub(crate) fn place(&mut self, at: Position, color: Color, captured: &[Position]) {
        self.put(at.row, at.col, color);
        for pos in captured {
            debug_assert_eq!(self.get(*pos), CellState::Occupied(color.opponent()));
            self.put(pos.row, pos.col, color);
        }
    }

    /// Returns the stones `color` would capture by playing at `at`,
    /// concatenated in `DIRECTIONS` order. Empty when `at` is occupied.
    pub fn captures(&self, at: Position, color: Color) -> Vec<Position> {
        if !self.get(at).is_empty() {
            return Vec::new();
        }

        let mut flips = Vec::new();
        for ray in &RAYS[at.index()] {
            let mut line = Vec::new();
            for &pos in ray {
                match self.get(pos) {
                    CellState::Occupied(c) if c == color => {
                        flips.extend_from_slice(&line);
                        break;
                    }
                    CellState::Occupied(_) => line.push(pos),
                    CellState::Empty => break,
                }
            }
        }
        flips
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        self.cells
            .iter()
            .flatten()
            .fold((0, 0), |(black, white), cell| match cell {
                CellState::Occupied(Color::Black) => (black + 1, white),
                CellState::Occupied(Color::White) => (black, white + 1),
                CellState::Empty => (black, white),
            })
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        NUM_SQUARES as u8 - black_count - white_count
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (cell, state) in board.iter_mut().zip(self.cells.iter().flatten()) {
            *cell = state.code();
        }
        board
    }

    fn put(&mut self, row: u8, col: u8, color: Color) {
        self.cells[row as usize][col as usize] = CellState::Occupied(color);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses eight rows of `B`/`X` (black), `W`/`O` (white) and `.`/`-` (empty).
    /// Whitespace inside a row is ignored; blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().filter(|line| !line.trim().is_empty()).collect();
        if rows.len() != BOARD_SIZE {
            return Err(ParseBoardError::RowCount(rows.len()));
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|ch| !ch.is_whitespace()).collect();
            if cells.len() != BOARD_SIZE {
                return Err(ParseBoardError::RowLength {
                    row,
                    len: cells.len(),
                });
            }
            for (col, ch) in cells.into_iter().enumerate() {
                board.cells[row][col] = match ch {
                    'B' | 'X' => CellState::Occupied(Color::Black),
                    'W' | 'O' => CellState::Occupied(Color::White),
                    '.' | '-' => CellState::Empty,
                    _ => return Err(ParseBoardError::UnknownCell { row, ch }),
                };
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let ch = match cell {
                    CellState::Occupied(Color::Black) => 'B',
                    CellState::Occupied(Color::White) => 'W',
                    CellState::Empty => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position { row, col }
    }

    #[test]
    fn initial_board_has_four_center_stones() {
        let board = Board::new();

        assert_eq!(board.count(), (2, 2));
        assert_eq!(board.empty_count(), 60);
        assert_eq!(board.get(pos(3, 3)), CellState::Occupied(Color::Black));
        assert_eq!(board.get(pos(4, 4)), CellState::Occupied(Color::Black));
        assert_eq!(board.get(pos(3, 4)), CellState::Occupied(Color::White));
        assert_eq!(board.get(pos(4, 3)), CellState::Occupied(Color::White));
    }

    #[test]
    fn rays_stop_at_the_edge() {
        let corner = &RAYS[pos(0, 0).index()];

        assert!(corner[0].is_empty()); // up-left
        assert!(corner[1].is_empty()); // up
        assert_eq!(corner[4].len(), 7); // right
        assert_eq!(corner[7].last(), Some(&pos(7, 7)));
    }

    #[test]
    fn captures_follow_direction_order() {
        let board: Board = "
            . . . . . . . .
            . . . B . . . .
            . . . W . . . .
            B W W . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        "
        .parse()
        .unwrap();

        // up run first, then left run walked outward.
        let flips = board.captures(pos(3, 3), Color::Black);
        assert_eq!(flips, vec![pos(2, 3), pos(3, 2), pos(3, 1)]);
        assert!(board.captures(pos(3, 3), Color::White).is_empty());
    }

    #[test]
    fn run_without_closing_stone_is_discarded() {
        let board: Board = "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . W W W W W W B
        "
        .parse()
        .unwrap();

        assert_eq!(board.captures(pos(7, 0), Color::Black).len(), 6);
        assert!(board.captures(pos(6, 7), Color::White).is_empty());
        assert!(board.captures(pos(7, 7), Color::Black).is_empty());
    }

    #[test]
    fn place_flips_captured_stones() {
        let mut board = Board::new();
        let flips = board.captures(pos(2, 4), Color::Black);

        assert_eq!(flips, vec![pos(3, 4)]);
        board.place(pos(2, 4), Color::Black, &flips);

        assert_eq!(board.count(), (4, 1));
        let cells = board.to_array();
        assert_eq!(cells[pos(2, 4).index()], 1);
        assert_eq!(cells[pos(3, 4).index()], 1);
        assert_eq!(cells[pos(4, 3).index()], 2);
    }

    #[test]
    fn parse_rejects_malformed_diagrams() {
        assert_eq!(
            "........".parse::<Board>(),
            Err(ParseBoardError::RowCount(1))
        );

        let short_row = "........\n".repeat(7) + ".......";
        assert_eq!(
            short_row.parse::<Board>(),
            Err(ParseBoardError::RowLength { row: 7, len: 7 })
        );

        let bad_cell = "........\n".repeat(7) + "...Q....";
        assert_eq!(
            bad_cell.parse::<Board>(),
            Err(ParseBoardError::UnknownCell { row: 7, ch: 'Q' })
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let board = Board::new();
        let text = board.to_string();

        assert_eq!(text.lines().nth(3), Some("...BW..."));
        assert_eq!(text.parse::<Board>(), Ok(board));
    }
}
