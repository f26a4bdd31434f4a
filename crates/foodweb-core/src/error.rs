//! Error types for food web construction and analysis.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid index {index}: web has {len} organisms")]
    InvalidIndex { index: usize, len: usize },

    #[error("Cycle detected: heights still changing after {passes} passes")]
    CycleDetected { passes: usize },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Shorthand for a bounds failure against a web of `len` organisms
    pub fn invalid_index(index: usize, len: usize) -> Self {
        Error::InvalidIndex { index, len }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
