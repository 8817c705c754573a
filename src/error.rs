//! Error types for huffdoc

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("empty input")]
    EmptyInput,

    #[error("input too large: {size} symbols exceeds limit of {max}")]
    InputTooLarge { size: usize, max: usize },

    #[error("invalid encoded stream: {pending:?} left unresolved after {consumed} bits")]
    InvalidStream { consumed: usize, pending: String },

    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit { position: usize, found: char },

    #[error("invalid code map: {0}")]
    InvalidCodeMap(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;
