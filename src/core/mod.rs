// SPDX-License-Identifier: GPL-3.0-only

pub mod api;
pub mod palette;
pub mod repository;
pub mod settings;

use anywho::Error;

use api::{BASE_URL, PokeApiClient};
use repository::PokemonRepository;

/// The repository type the application runs against
pub type AppRepository = PokemonRepository<PokeApiClient>;

/// Builds the single HTTP client and the repository on top of it
pub fn repository() -> Result<AppRepository, Error> {
    let client = PokeApiClient::new(BASE_URL)?;
    Ok(PokemonRepository::new(client))
}
