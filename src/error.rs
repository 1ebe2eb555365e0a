use thiserror::Error;

/// Errors rejected before mining starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MineError {
    #[error("minimum frequency must be within [0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("maximum itemset length must be at least 1")]
    InvalidMaxLen,
}

/// Errors raised while reading transaction records.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("line {line}: invalid item {token:?}, expected a non-negative integer")]
    InvalidItem { line: usize, token: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MineError>;
