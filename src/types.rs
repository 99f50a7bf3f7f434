use std::fmt;

use serde::Serialize;

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// A playable side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Uppercase name used in status messages.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "BLACK",
            Color::White => "WHITE",
        }
    }

    /// Wire code: 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Color::Black => 1,
            Color::White => 2,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Contents of a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Occupied(Color),
}

impl CellState {
    /// Wire code: 0=empty, 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            CellState::Empty => 0,
            CellState::Occupied(color) => color.code(),
        }
    }

    pub fn color(self) -> Option<Color> {
        match self {
            CellState::Empty => None,
            CellState::Occupied(color) => Some(color),
        }
    }

    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Returns `None` when `row` or `col` is off the board.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Square index `row * 8 + col` (0..=63).
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    pub(crate) fn from_index(idx: usize) -> Self {
        debug_assert!(idx < NUM_SQUARES);
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }
}

/// Snapshot of a game returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub board: Vec<u8>,
    pub current_player: u8,
    pub status: String,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// `true` when the last move left the opponent without a reply.
    pub is_pass: bool,
    /// Squares flipped by the last move; empty before the first move.
    pub flipped: Vec<u8>,
    pub black_targets: Vec<u8>,
    pub white_targets: Vec<u8>,
}

/// Stone totals and the side ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// `None` on a tie.
    pub winner: Option<Color>,
    pub black_count: u8,
    pub white_count: u8,
}
