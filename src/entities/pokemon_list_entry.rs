// SPDX-License-Identifier: GPL-3.0-only

use std::fmt::Debug;

use crate::{
    entities::NamedResource,
    utils::{capitalize_string, parse_id_from_url, sprite_url},
};

/// Simple owned data structure, for displaying the Pokémon in the list page (main page)
#[derive(Clone, PartialEq, Eq)]
pub struct PokemonListEntry {
    /// Name as shown to the user
    pub pokemon_name: String,
    /// Name as the API knows it, used to request the details
    pub api_name: String,
    pub image_url: String,
    pub number: i64,
}

impl Debug for PokemonListEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokemonListEntry")
            .field("number", &self.number)
            .finish()
    }
}

impl PokemonListEntry {
    /// Builds the entry from a listing result, `None` if its url carries no id
    pub fn from_resource(resource: &NamedResource) -> Option<Self> {
        let number = parse_id_from_url(&resource.url)?;

        Some(Self {
            pokemon_name: capitalize_string(&resource.name),
            api_name: resource.name.clone(),
            image_url: sprite_url(number),
            number,
        })
    }

    /// Whether this entry should be shown for the given search query
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }

        self.pokemon_name
            .to_lowercase()
            .contains(&query.to_lowercase())
            || self.api_name.contains(&query.to_lowercase())
            || self.number.to_string() == query
    }
}
