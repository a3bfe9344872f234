//! Error types for deck decoding

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Unrecognized URL protocol: {0}")]
    UnrecognizedProtocol(String),

    #[error("Missing deck URL component: expected 3 segments, found {0}")]
    MissingComponent(usize),

    #[error("Malformed encoding: {0}")]
    MalformedEncoding(String),

    #[error("Could not inflate compressed data: {0}")]
    DecompressionFailed(String),

    #[error("Unexpected end of input at offset {offset}")]
    TruncatedInput { offset: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Card database error: {0}")]
    DatabaseError(String),
}

pub type Result<T> = std::result::Result<T, DeckError>;
