//! Pokedex Module
//!
//! Captured pokemon, the player's location, and saving both to disk.

pub mod persist;
mod store;

pub use store::{
    PlayerLocation, Pokedex, PokedexEntry, PokedexSnapshot, STARTING_LOCATION,
    STARTING_LOCATION_AREA, STARTING_REGION,
};
