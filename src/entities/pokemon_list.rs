// SPDX-License-Identifier: GPL-3.0-only

use serde::Deserialize;

/// A named link to another PokéAPI resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the `pokemon` listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonList {
    /// Total number of Pokémon the API knows about, not the size of this page
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deserializes_first_page() {
        let json = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ]
        }"#;

        let page: PokemonList = serde_json::from_str(json).unwrap();

        assert_eq!(page.count, 1302);
        assert_eq!(page.previous, None);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1].name, "ivysaur");
    }
}
