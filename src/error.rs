//! Error types for the Pokedex CLI
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for command handlers and the REPL.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Terminal read/write failed
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),

    /// HTTP request failed before a response arrived
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Remote service answered with a non-success status
    #[error("response failed with status code: {0}")]
    Status(u16),

    /// JSON could not be decoded or encoded
    #[error("json operation failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Saving or loading the pokedex failed
    #[error("{action} {path}: {source}")]
    Persist {
        action: &'static str,
        path: String,
        source: std::io::Error,
    },

    /// Command received missing or malformed arguments
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Paging past the first or last page of a listing
    #[error("can't map {0}")]
    NoPage(&'static str),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex CLI.
pub type Result<T> = std::result::Result<T, PokedexError>;
