// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MemoryError>;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Index request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Index returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Index not ready after {0}s")]
    NotReady(u64),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
