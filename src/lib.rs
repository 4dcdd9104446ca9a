//! Pokedex CLI - An interactive Pokemon exploration REPL
//!
//! Wraps the PokeAPI service with a raw-mode line editor, a time-expiring
//! response cache and a persistable pokedex.

pub mod api;
pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod repl;
pub mod session;
pub mod tasks;
pub mod terminal;

pub use cache::Cache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use pokedex::Pokedex;
pub use repl::Repl;
pub use session::Session;
