use std::fmt;

use log::{debug, trace};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::legality::LegalityIndex;
use crate::types::{Color, GameResult, GameView, Position};

const GAME_OVER_MESSAGE: &str = "Game Over";

/// Whose move it is, or the terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    ToMove(Color),
    GameOver,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::ToMove(color) => f.write_str(color.name()),
            Status::GameOver => f.write_str(GAME_OVER_MESSAGE),
        }
    }
}

/// The last applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub color: Color,
    pub at: Position,
    pub flipped: Vec<Position>,
    /// `true` when the opponent had no reply and `color` moves again.
    pub passed: bool,
}

/// A game in progress: board, derived legality, and turn state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    legality: LegalityIndex,
    turn: Color,
    status: Status,
    passed: bool,
    last_move: Option<MoveRecord>,
    config: EngineConfig,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let board = Board::new();
        Self {
            legality: LegalityIndex::compute(&board),
            board,
            turn: Color::Black,
            status: Status::ToMove(Color::Black),
            passed: false,
            last_move: None,
            config,
        }
    }

    /// Starts from an arbitrary position.
    ///
    /// If `turn` has no legal move but its opponent does, the opponent takes the
    /// turn and the pass is recorded. A position where neither side can move is
    /// already over.
    pub fn from_position(board: Board, turn: Color, config: EngineConfig) -> Self {
        let legality = LegalityIndex::compute(&board);
        let mut state = Self {
            board,
            legality,
            turn,
            status: Status::ToMove(turn),
            passed: false,
            last_move: None,
            config,
        };

        let current = state.legality.can_move(turn);
        let other = state.legality.can_move(turn.opponent());
        if !current && !other {
            state.status = Status::GameOver;
        } else if !current {
            state.turn = turn.opponent();
            state.status = Status::ToMove(state.turn);
            state.passed = true;
        }
        state
    }

    /// Restores the starting position, keeping the config.
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config);
        debug!("game reset");
    }

    /// Plays the current side at `(row, col)`.
    ///
    /// Off-board squares, illegal squares, and moves after game over are ignored
    /// and return `false`.
    pub fn attempt_move(&mut self, row: u8, col: u8) -> bool {
        let Status::ToMove(color) = self.status else {
            trace!("move at ({row}, {col}) ignored: game is over");
            return false;
        };
        let Some(at) = Position::new(row, col) else {
            trace!("move at ({row}, {col}) ignored: off the board");
            return false;
        };
        if !self.legality.is_legal(at, color) {
            trace!("move at ({row}, {col}) ignored: not legal for {color}");
            return false;
        }

        let flipped = self.legality.captures(at, color).to_vec();
        self.board.place(at, color, &flipped);
        self.legality = LegalityIndex::compute(&self.board);
        debug!("{color} played ({row}, {col}), flipped {}", flipped.len());

        self.advance_turn();
        self.last_move = Some(MoveRecord {
            color,
            at,
            flipped,
            passed: self.passed,
        });
        true
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn legality(&self) -> &LegalityIndex {
        &self.legality
    }

    pub fn legal_targets(&self, color: Color) -> Vec<Position> {
        self.legality.legal_targets(color)
    }

    pub fn current_turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == Status::GameOver
    }

    /// `true` when the side not on turn was skipped by the last transition.
    pub fn is_pass(&self) -> bool {
        self.passed
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// "BLACK", "WHITE" or "Game Over".
    pub fn status_message(&self) -> String {
        match self.status {
            Status::ToMove(color) if self.passed && self.config.annotate_pass => {
                format!("{} ({} passed)", color.name(), color.opponent().name())
            }
            status => status.to_string(),
        }
    }

    pub fn result(&self) -> GameResult {
        let (black_count, white_count) = self.board.count();
        GameResult {
            winner: if black_count > white_count {
                Some(Color::Black)
            } else if white_count > black_count {
                Some(Color::White)
            } else {
                None
            },
            black_count,
            white_count,
        }
    }

    pub fn view(&self) -> GameView {
        let (black_count, white_count) = self.board.count();
        let squares = |targets: Vec<Position>| -> Vec<u8> {
            targets.into_iter().map(|pos| pos.index() as u8).collect()
        };
        GameView {
            board: self.board.to_array().to_vec(),
            current_player: self.turn.code(),
            status: self.status_message(),
            black_count,
            white_count,
            is_game_over: self.is_game_over(),
            is_pass: self.passed,
            flipped: self
                .last_move
                .as_ref()
                .map(|record| squares(record.flipped.clone()))
                .unwrap_or_default(),
            black_targets: squares(self.legal_targets(Color::Black)),
            white_targets: squares(self.legal_targets(Color::White)),
        }
    }

    fn advance_turn(&mut self) {
        let opponent = self.turn.opponent();
        let opponent_can_move = self.legality.can_move(opponent);
        let current_can_move = self.legality.can_move(self.turn);

        if opponent_can_move {
            self.turn = opponent;
            self.passed = false;
        } else {
            self.passed = current_can_move;
        }

        if !opponent_can_move && !current_can_move {
            self.status = Status::GameOver;
            debug!("game over: {:?}", self.result());
        } else {
            self.status = Status::ToMove(self.turn);
            if self.passed {
                debug!("{opponent} has no move and passes");
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
