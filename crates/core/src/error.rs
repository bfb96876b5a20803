use thiserror::Error;

/// Errors raised when constructing boards or positions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlyError {
    #[error("board of {width}x{height} cells is not supported (1..=64 cells)")]
    BoardTooLarge { width: u8, height: u8 },

    #[error("cell ({row}, {col}) is off the board")]
    OutOfBounds { row: i8, col: i8 },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: i8, col: i8 },
}

/// Convenience Result type for board operations
pub type Result<T> = std::result::Result<T, PlyError>;
