// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;

use cosmic::widget::image;

use crate::{
    core::{
        api::PokemonApi,
        palette::{self, Rgb},
        repository::{PokemonRepository, Resource},
    },
    entities::{PokemonList, PokemonListEntry},
};

/// How close to the bottom (relative scroll offset) the list has to be to fetch the next page
const LOAD_MORE_THRESHOLD: f32 = 0.9;

/// A `limit`/`offset` pair for the listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
}

/// A downloaded sprite ready to be drawn
#[derive(Debug, Clone)]
pub struct Sprite {
    pub handle: image::Handle,
    pub dominant_color: Option<Rgb>,
}

/// State behind the list page
#[derive(Debug, Default)]
pub struct PokemonListState {
    /// Pages loaded so far
    cur_page: usize,
    /// Listing results consumed so far, the offset of the next page
    loaded: usize,
    pub pokemon_list: Vec<PokemonListEntry>,
    pub load_error: String,
    pub is_loading: bool,
    pub end_reached: bool,
    pub search: String,
    /// Sprites keyed by url, shared with the details page
    pub sprites: HashMap<String, Resource<Sprite>>,
}

impl PokemonListState {
    pub fn is_searching(&self) -> bool {
        !self.search.trim().is_empty()
    }

    /// Entries matching the current search
    pub fn visible_entries(&self) -> Vec<&PokemonListEntry> {
        self.pokemon_list
            .iter()
            .filter(|entry| entry.matches(&self.search))
            .collect()
    }

    pub fn can_load_more(&self) -> bool {
        !self.is_loading && !self.end_reached && !self.is_searching()
    }

    /// Marks a page as in flight and returns what to ask for, `None` if nothing should be loaded
    pub fn next_request(&mut self, page_size: usize) -> Option<PageRequest> {
        if !self.can_load_more() {
            return None;
        }

        self.is_loading = true;
        Some(PageRequest {
            limit: page_size,
            offset: self.loaded,
        })
    }

    /// Folds a page result into the list, returning the entries that were added
    pub fn apply_page(&mut self, result: Resource<PokemonList>) -> Vec<PokemonListEntry> {
        self.is_loading = false;

        match result {
            Resource::Success(page) => {
                self.loaded += page.results.len();
                self.cur_page += 1;
                self.end_reached = page.results.is_empty() || self.loaded >= page.count;

                let new_entries: Vec<PokemonListEntry> = page
                    .results
                    .iter()
                    .filter_map(|resource| {
                        let entry = PokemonListEntry::from_resource(resource);
                        if entry.is_none() {
                            tracing::warn!("Skipping {} without an id in {}", resource.name, resource.url);
                        }
                        entry
                    })
                    .collect();

                tracing::info!(
                    page = self.cur_page,
                    loaded = self.loaded,
                    total = page.count,
                    "Loaded Pokémon page"
                );

                self.load_error.clear();
                self.pokemon_list.extend(new_entries.iter().cloned());
                new_entries
            }
            Resource::Error(message) => {
                self.load_error = message;
                Vec::new()
            }
            Resource::Loading => Vec::new(),
        }
    }

    pub fn search(&mut self, query: String) {
        self.search = query;
    }

    /// Whether a scroll to `relative_offset` should trigger the next page
    pub fn should_load_more(&self, relative_offset: f32) -> bool {
        relative_offset >= LOAD_MORE_THRESHOLD && self.can_load_more()
    }

    /// Dominant color of an entry's sprite, once it is known
    pub fn dominant_color(&self, entry: &PokemonListEntry) -> Option<Rgb> {
        match self.sprites.get(&entry.image_url) {
            Some(Resource::Success(sprite)) => sprite.dominant_color,
            _ => None,
        }
    }

    /// Registers a sprite download, `false` if it is already known
    pub fn request_sprite(&mut self, url: &str) -> bool {
        if self.sprites.contains_key(url) {
            return false;
        }

        self.sprites.insert(url.to_string(), Resource::Loading);
        true
    }
}

/// Downloads a sprite and works out its dominant color off the UI thread
pub async fn load_sprite<A: PokemonApi>(
    repository: PokemonRepository<A>,
    url: String,
) -> Resource<Sprite> {
    let bytes = match repository.get_sprite(&url).await {
        Resource::Success(bytes) => bytes,
        Resource::Error(message) => return Resource::Error(message),
        Resource::Loading => return Resource::Loading,
    };

    let (bytes, dominant_color) = match tokio::task::spawn_blocking(move || {
        let color = palette::dominant_color(&bytes);
        (bytes, color)
    })
    .await
    {
        Ok(result) => result,
        Err(e) => return Resource::Error(e.to_string()),
    };

    let dominant_color = dominant_color.unwrap_or_else(|e| {
        tracing::warn!("Could not extract a color from {url}: {e}");
        None
    });

    Resource::Success(Sprite {
        handle: image::Handle::from_bytes(bytes),
        dominant_color,
    })
}
