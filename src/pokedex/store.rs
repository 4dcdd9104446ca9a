//! Pokedex Store Module
//!
//! Name-keyed record of captured pokemon plus the player's location.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::models::Pokemon;

pub const STARTING_REGION: &str = "kanto";
pub const STARTING_LOCATION: &str = "pallet-town";
pub const STARTING_LOCATION_AREA: &str = "pallet-town-area";

// == Pokedex Entry ==
/// A captured pokemon. Never mutated after capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokedexEntry {
    pub captured_at: DateTime<Utc>,
    pub pokemon: Pokemon,
}

// == Player Location ==
/// Where the player currently is; changed only by `visit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLocation {
    pub region: String,
    pub location: String,
    pub location_area: String,
}

impl Default for PlayerLocation {
    fn default() -> Self {
        Self {
            region: STARTING_REGION.to_string(),
            location: STARTING_LOCATION.to_string(),
            location_area: STARTING_LOCATION_AREA.to_string(),
        }
    }
}

// == Snapshot ==
/// Plain, serializable copy of the pokedex state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PokedexSnapshot {
    #[serde(default)]
    pub entries: HashMap<String, PokedexEntry>,
    #[serde(default)]
    pub location: PlayerLocation,
}

// == Pokedex ==
/// Shared handle to the pokedex.
///
/// Uses the same reader/writer lock discipline as the response cache, without
/// any expiry.
#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    state: Arc<RwLock<PokedexSnapshot>>,
}

impl Pokedex {
    /// Creates an empty pokedex at the starting location.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Records a capture unless the pokemon is already owned.
    ///
    /// Returns true if a new entry was created. A repeat capture keeps the
    /// original timestamp.
    pub async fn add(&self, pokemon: Pokemon) -> bool {
        let mut state = self.state.write().await;
        if state.entries.contains_key(&pokemon.name) {
            return false;
        }
        state.entries.insert(
            pokemon.name.clone(),
            PokedexEntry {
                captured_at: Utc::now(),
                pokemon,
            },
        );
        true
    }

    // == Get ==
    pub async fn get(&self, name: &str) -> Option<PokedexEntry> {
        self.state.read().await.entries.get(name).cloned()
    }

    // == List Names ==
    /// Names of every captured pokemon, sorted for stable display.
    pub async fn list_names(&self) -> Vec<String> {
        let state = self.state.read().await;
        let mut names: Vec<String> = state.entries.keys().cloned().collect();
        names.sort();
        names
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.entries.is_empty()
    }

    // == Location ==
    pub async fn location(&self) -> PlayerLocation {
        self.state.read().await.location.clone()
    }

    /// Moves the player. Only the `visit` command calls this.
    pub async fn set_location(&self, location: PlayerLocation) {
        self.state.write().await.location = location;
    }

    // == Persistence Support ==
    /// Copies the current state out for saving.
    pub async fn snapshot(&self) -> PokedexSnapshot {
        self.state.read().await.clone()
    }

    /// Replaces the whole state with a loaded snapshot.
    pub async fn restore(&self, snapshot: PokedexSnapshot) {
        *self.state.write().await = snapshot;
    }
}
