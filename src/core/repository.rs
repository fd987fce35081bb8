// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use anywho::Error;

use crate::{
    core::api::PokemonApi,
    entities::{Pokemon, PokemonList},
};

/// State of a value that comes from the network
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> From<Result<T, Error>> for Resource<T> {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Resource::Success(value),
            Err(e) => Resource::Error(e.to_string()),
        }
    }
}

/// Forwards calls to the [`PokemonApi`] and turns failures into [`Resource::Error`]
pub struct PokemonRepository<A> {
    api: Arc<A>,
}

impl<A> Clone for PokemonRepository<A> {
    fn clone(&self) -> Self {
        PokemonRepository {
            api: Arc::clone(&self.api),
        }
    }
}

impl<A> std::fmt::Debug for PokemonRepository<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokemonRepository").finish_non_exhaustive()
    }
}

impl<A: PokemonApi> PokemonRepository<A> {
    pub fn new(api: A) -> Self {
        Self { api: Arc::new(api) }
    }

    #[cfg(test)]
    pub(crate) fn api(&self) -> &A {
        &self.api
    }

    pub async fn get_pokemon_list(&self, limit: usize, offset: usize) -> Resource<PokemonList> {
        let result = self.api.get_pokemon_list(limit, offset).await;
        if let Err(e) = &result {
            tracing::error!("Failed to load Pokémon page at offset {offset}: {e}");
        }
        result.into()
    }

    pub async fn get_pokemon_info(&self, name: &str) -> Resource<Pokemon> {
        let result = self.api.get_pokemon_info(name).await;
        if let Err(e) = &result {
            tracing::error!("Failed to load details for {name}: {e}");
        }
        result.into()
    }

    pub async fn get_sprite(&self, url: &str) -> Resource<Vec<u8>> {
        let result = self.api.get_sprite(url).await;
        if let Err(e) = &result {
            tracing::warn!("Failed to download sprite {url}: {e}");
        }
        result.into()
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::sync::Mutex;

    use anywho::{Error, anywho};

    use crate::{
        core::api::PokemonApi,
        entities::{NamedResource, Pokemon, PokemonList},
    };

    /// In-memory [`PokemonApi`] serving `total` Pokémon named `pokemon-{id}`
    #[derive(Default)]
    pub struct FakeApi {
        pub total: usize,
        pub fail: bool,
        pub requests: Mutex<Vec<(usize, usize)>>,
    }

    impl FakeApi {
        pub fn with_total(total: usize) -> Self {
            Self {
                total,
                ..Default::default()
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }
    }

    impl PokemonApi for FakeApi {
        async fn get_pokemon_list(&self, limit: usize, offset: usize) -> Result<PokemonList, Error> {
            self.requests.lock().unwrap().push((limit, offset));
            if self.fail {
                return Err(anywho!("connection refused"));
            }

            let results = (offset + 1..=self.total.min(offset + limit))
                .map(|id| NamedResource {
                    name: format!("pokemon-{id}"),
                    url: format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
                })
                .collect();

            Ok(PokemonList {
                count: self.total,
                next: None,
                previous: None,
                results,
            })
        }

        async fn get_pokemon_info(&self, name: &str) -> Result<Pokemon, Error> {
            if self.fail {
                return Err(anywho!("connection refused"));
            }

            Ok(Pokemon {
                id: 1,
                name: name.to_string(),
                height: 7,
                weight: 69,
                abilities: Vec::new(),
                stats: Vec::new(),
                types: Vec::new(),
                sprites: Default::default(),
            })
        }

        async fn get_sprite(&self, _url: &str) -> Result<Vec<u8>, Error> {
            if self.fail {
                return Err(anywho!("connection refused"));
            }

            Ok(Vec::new())
        }
    }
}
