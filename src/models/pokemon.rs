//! Pokemon model
//!
//! The captured entity: name, height, weight, stats and types.

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// A pokemon as returned by `GET /pokemon/{name}`.
///
/// Only the fields the REPL displays are kept; everything else in the
/// response body is ignored on decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    /// Null in the API for some forms
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

/// One base stat, e.g. `hp: 45`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub stat: NamedResource,
    pub base_stat: u32,
}

/// One elemental type slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl Pokemon {
    /// Creates a pokemon with just a name; handy for listings and tests.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Renders the `inspect` view.
    pub fn describe(&self) -> String {
        let mut out = format!(
            "Name: {}\nHeight: {}\nWeight: {}\nStats:\n",
            self.name, self.height, self.weight
        );
        for stat in &self.stats {
            out.push_str(&format!("  -{}: {}\n", stat.stat.name, stat.base_stat));
        }
        out.push_str("Types:\n");
        for slot in &self.types {
            out.push_str(&format!("  - {}\n", slot.kind.name));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIDGEY_JSON: &str = r#"{
        "id": 16,
        "name": "pidgey",
        "height": 3,
        "weight": 18,
        "base_experience": 50,
        "abilities": [],
        "stats": [
            {"base_stat": 40, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
            {"base_stat": 45, "effort": 0, "stat": {"name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/"}}
        ],
        "types": [
            {"slot": 1, "type": {"name": "normal", "url": "https://pokeapi.co/api/v2/type/1/"}},
            {"slot": 2, "type": {"name": "flying", "url": "https://pokeapi.co/api/v2/type/3/"}}
        ]
    }"#;

    #[test]
    fn test_pokemon_deserialize_api_body() {
        let pokemon: Pokemon = serde_json::from_str(PIDGEY_JSON).unwrap();
        assert_eq!(pokemon.name, "pidgey");
        assert_eq!(pokemon.height, 3);
        assert_eq!(pokemon.weight, 18);
        assert_eq!(pokemon.base_experience, Some(50));
        assert_eq!(pokemon.stats.len(), 2);
        assert_eq!(pokemon.types[1].kind.name, "flying");
    }

    #[test]
    fn test_pokemon_null_base_experience() {
        let pokemon: Pokemon =
            serde_json::from_str(r#"{"name": "missingno", "base_experience": null}"#).unwrap();
        assert_eq!(pokemon.base_experience, None);
        assert!(pokemon.stats.is_empty());
    }

    #[test]
    fn test_describe() {
        let pokemon: Pokemon = serde_json::from_str(PIDGEY_JSON).unwrap();
        let text = pokemon.describe();

        assert!(text.starts_with("Name: pidgey\nHeight: 3\nWeight: 18\n"));
        assert!(text.contains("  -hp: 40\n"));
        assert!(text.contains("Types:\n  - normal\n  - flying\n"));
    }
}
