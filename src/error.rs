//! Crate-wide error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Please select at least one character type!")]
    NoCharacterClass,

    #[error("random source failure: {0}")]
    Entropy(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("invalid settings: {0}")]
    Settings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
