//! Errors shared across the workspace

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A structural parameter (vocabulary size, embedding dimension) was
    /// zero or otherwise unusable. Fatal at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, Error>;
