// SPDX-License-Identifier: GPL-3.0-only

use std::future::Future;

use anywho::{Error, anywho};
use reqwest::StatusCode;

use crate::entities::{Pokemon, PokemonList};

pub const BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// The two PokéAPI endpoints the app talks to, plus raw sprite downloads
pub trait PokemonApi: Send + Sync + 'static {
    /// `GET pokemon?limit={limit}&offset={offset}`
    fn get_pokemon_list(
        &self,
        limit: usize,
        offset: usize,
    ) -> impl Future<Output = Result<PokemonList, Error>> + Send;

    /// `GET pokemon/{name}`
    fn get_pokemon_info(&self, name: &str)
    -> impl Future<Output = Result<Pokemon, Error>> + Send;

    /// Downloads the encoded image behind `url`
    fn get_sprite(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;
}

#[derive(Debug, Clone)]
pub struct PokeApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl PokeApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn list_url(&self, limit: usize, offset: usize) -> String {
        format!("{}pokemon?limit={limit}&offset={offset}", self.base_url)
    }

    fn info_url(&self, name: &str) -> String {
        format!("{}pokemon/{name}", self.base_url)
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, Error> {
        tracing::debug!(url, "GET");

        let response = self.client.get(url).send().await?;
        check_status(url, response.status())?;

        Ok(response)
    }
}

fn check_status(url: &str, status: StatusCode) -> Result<(), Error> {
    if !status.is_success() {
        return Err(anywho!("Request to {url} failed. Status: {status}"));
    }

    Ok(())
}

impl PokemonApi for PokeApiClient {
    async fn get_pokemon_list(&self, limit: usize, offset: usize) -> Result<PokemonList, Error> {
        let url = self.list_url(limit, offset);

        Ok(self.get(&url).await?.json::<PokemonList>().await?)
    }

    async fn get_pokemon_info(&self, name: &str) -> Result<Pokemon, Error> {
        let url = self.info_url(name);

        Ok(self.get(&url).await?.json::<Pokemon>().await?)
    }

    async fn get_sprite(&self, url: &str) -> Result<Vec<u8>, Error> {
        Ok(self.get(url).await?.bytes().await?.to_vec())
    }
}
