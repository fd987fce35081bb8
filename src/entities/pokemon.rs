// SPDX-License-Identifier: GPL-3.0-only

use std::fmt::Debug;

use serde::Deserialize;

use crate::{
    entities::NamedResource,
    utils::{capitalize_string, scale_numbers},
};

/// Detail record returned by the `pokemon/{name}` endpoint
#[derive(Clone, PartialEq, Deserialize)]
pub struct Pokemon {
    pub id: i64,
    pub name: String,
    /// Height in decimetres
    pub height: i64,
    /// Weight in hectograms
    pub weight: i64,
    #[serde(default)]
    pub abilities: Vec<PokemonAbility>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
    #[serde(default)]
    pub sprites: PokemonSprites,
}

impl Debug for Pokemon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pokemon")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

impl Pokemon {
    /// `#25 Pikachu`
    pub fn display_title(&self) -> String {
        format!("#{} {}", self.id, capitalize_string(&self.name))
    }

    pub fn weight_kg(&self) -> f64 {
        scale_numbers(self.weight)
    }

    pub fn height_m(&self) -> f64 {
        scale_numbers(self.height)
    }

    /// Highest base stat, the reference the stat bars are normalized to
    pub fn max_base_stat(&self) -> i64 {
        self.stats
            .iter()
            .map(|stat| stat.base_stat)
            .max()
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonAbility {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonStat {
    pub base_stat: i64,
    #[serde(default)]
    pub effort: i64,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonType {
    #[serde(default)]
    pub slot: i64,
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PokemonSprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PIKACHU: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "abilities": [
            { "ability": { "name": "static", "url": "https://pokeapi.co/api/v2/ability/9/" }, "is_hidden": false, "slot": 1 },
            { "ability": { "name": "lightning-rod", "url": "https://pokeapi.co/api/v2/ability/31/" }, "is_hidden": true, "slot": 3 }
        ],
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } },
            { "base_stat": 55, "effort": 0, "stat": { "name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/" } },
            { "base_stat": 90, "effort": 2, "stat": { "name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/" } }
        ],
        "types": [
            { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
        ],
        "sprites": {
            "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png",
            "front_shiny": null,
            "back_default": null,
            "back_shiny": null,
            "other": {}
        }
    }"#;

    #[test]
    fn deserializes_detail_record() {
        let pokemon: Pokemon = serde_json::from_str(PIKACHU).unwrap();

        assert_eq!(pokemon.id, 25);
        assert_eq!(pokemon.abilities.len(), 2);
        assert!(pokemon.abilities[1].is_hidden);
        assert_eq!(pokemon.types[0].type_.name, "electric");
        assert_eq!(
            pokemon.sprites.front_default.as_deref(),
            Some("https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png")
        );
    }

    #[test]
    fn derives_display_values() {
        let pokemon: Pokemon = serde_json::from_str(PIKACHU).unwrap();

        assert_eq!(pokemon.display_title(), "#25 Pikachu");
        assert_eq!(pokemon.weight_kg(), 6.0);
        assert_eq!(pokemon.height_m(), 0.4);
        assert_eq!(pokemon.max_base_stat(), 90);
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let pokemon: Pokemon =
            serde_json::from_str(r#"{ "id": 1, "name": "bulbasaur", "height": 7, "weight": 69 }"#)
                .unwrap();

        assert!(pokemon.stats.is_empty());
        assert_eq!(pokemon.max_base_stat(), 0);
        assert_eq!(pokemon.sprites, PokemonSprites::default());
    }
}
