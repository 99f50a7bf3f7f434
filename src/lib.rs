pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod legality;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use config::EngineConfig;
pub use error::ParseBoardError;
pub use game::{GameState, MoveRecord, Status};
pub use legality::LegalityIndex;
pub use types::{CellState, Color, GameResult, GameView, Position};
