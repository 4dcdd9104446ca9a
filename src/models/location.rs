//! Location models
//!
//! Paged location-area listings, single location areas and their encounter
//! tables.

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// One page of `GET /location-area`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationAreaPage {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// A single location area, `GET /location-area/{name}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationArea {
    pub name: String,
    #[serde(default)]
    pub location: NamedResource,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A location, `GET /location/{name}`; only the region is used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationDetail {
    pub name: String,
    #[serde(default)]
    pub region: Option<NamedResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
    #[serde(default)]
    pub version_details: Vec<VersionEncounter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEncounter {
    #[serde(default)]
    pub max_chance: u32,
}

/// A pokemon that can appear in an area and its encounter weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encounter {
    pub name: String,
    pub chance: u32,
}

impl LocationArea {
    /// Names of every pokemon that can be met here, in API order.
    pub fn pokemon_names(&self) -> Vec<String> {
        self.pokemon_encounters
            .iter()
            .map(|e| e.pokemon.name.clone())
            .collect()
    }

    /// Encounter table weighted by the first game version's max chance.
    pub fn encounters(&self) -> Vec<Encounter> {
        self.pokemon_encounters
            .iter()
            .map(|e| Encounter {
                name: e.pokemon.name.clone(),
                chance: e.version_details.first().map_or(0, |v| v.max_chance),
            })
            .collect()
    }
}

/// Picks an encounter by roulette-wheel selection.
///
/// `roll` must lie in `0..total` where `total` is the sum of all chances.
/// Returns `None` for an empty table or an out-of-range roll.
pub fn pick_encounter(encounters: &[Encounter], roll: u32) -> Option<&Encounter> {
    let mut upper = 0u32;
    for encounter in encounters {
        upper = upper.saturating_add(encounter.chance);
        if roll < upper {
            return Some(encounter);
        }
    }
    None
}

/// Sum of all encounter weights.
pub fn total_chance(encounters: &[Encounter]) -> u32 {
    encounters
        .iter()
        .fold(0u32, |acc, e| acc.saturating_add(e.chance))
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA_JSON: &str = r#"{
        "id": 1,
        "name": "canalave-city-area",
        "location": {"name": "canalave-city", "url": "https://pokeapi.co/api/v2/location/1/"},
        "pokemon_encounters": [
            {"pokemon": {"name": "tentacool", "url": ""}, "version_details": [{"max_chance": 60, "version": {"name": "diamond", "url": ""}}]},
            {"pokemon": {"name": "tentacruel", "url": ""}, "version_details": [{"max_chance": 30}]},
            {"pokemon": {"name": "staryu", "url": ""}, "version_details": []}
        ]
    }"#;

    fn table() -> Vec<Encounter> {
        vec![
            Encounter { name: "a".into(), chance: 2 },
            Encounter { name: "b".into(), chance: 0 },
            Encounter { name: "c".into(), chance: 3 },
        ]
    }

    #[test]
    fn test_page_deserialize() {
        let json = r#"{"count": 1054, "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20", "previous": null, "results": [{"name": "canalave-city-area", "url": ""}]}"#;
        let page: LocationAreaPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1054);
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results[0].name, "canalave-city-area");
    }

    #[test]
    fn test_area_deserialize() {
        let area: LocationArea = serde_json::from_str(AREA_JSON).unwrap();
        assert_eq!(area.location.name, "canalave-city");
        assert_eq!(area.pokemon_names(), vec!["tentacool", "tentacruel", "staryu"]);
    }

    #[test]
    fn test_encounters_use_first_version_chance() {
        let area: LocationArea = serde_json::from_str(AREA_JSON).unwrap();
        let encounters = area.encounters();
        assert_eq!(encounters[0].chance, 60);
        assert_eq!(encounters[1].chance, 30);
        assert_eq!(encounters[2].chance, 0);
        assert_eq!(total_chance(&encounters), 90);
    }

    #[test]
    fn test_pick_encounter_bounds() {
        let encounters = table();
        assert_eq!(pick_encounter(&encounters, 0).unwrap().name, "a");
        assert_eq!(pick_encounter(&encounters, 1).unwrap().name, "a");
        // Zero-weight entries are never picked
        assert_eq!(pick_encounter(&encounters, 2).unwrap().name, "c");
        assert_eq!(pick_encounter(&encounters, 4).unwrap().name, "c");
        assert!(pick_encounter(&encounters, 5).is_none());
        assert!(pick_encounter(&[], 0).is_none());
    }

    #[test]
    fn test_location_region_optional() {
        let detail: LocationDetail =
            serde_json::from_str(r#"{"name": "canalave-city", "region": {"name": "sinnoh", "url": ""}}"#)
                .unwrap();
        assert_eq!(detail.region.unwrap().name, "sinnoh");
    }
}
