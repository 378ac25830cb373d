//! Error types for the core library
//!
//! Board mutations never fail; these errors only come from building a board
//! out of external data.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
