/// Errors from trying to play a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid move, column {0} out of range. Columns must be between 1 and {max}", max = crate::WIDTH)]
    OutOfRange(usize),

    #[error("Invalid move, column {0} full")]
    ColumnFull(usize),

    #[error("Invalid move, the game is already over")]
    GameOver,
}

/// Errors from validating the command line configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}
