//! Data models for PokeAPI payloads and pokedex records
//!
//! Field names follow the PokeAPI JSON layout so cached response bodies
//! deserialize directly into these types.

pub mod location;
pub mod pokemon;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use location::{Encounter, LocationArea, LocationAreaPage, LocationDetail};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};

/// A `{name, url}` reference as PokeAPI returns it for linked resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}
