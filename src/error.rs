/// Errors that can occur when parsing a board diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("expected 8 rows, got {0}")]
    RowCount(usize),

    #[error("row {row}: expected 8 cells, got {len}")]
    RowLength { row: usize, len: usize },

    #[error("row {row}: unknown cell character {ch:?}")]
    UnknownCell { row: usize, ch: char },
}
