// SPDX-License-Identifier: GPL-3.0-only

mod pokemon;
mod pokemon_list;
mod pokemon_list_entry;

pub use pokemon::{Pokemon, PokemonAbility, PokemonSprites, PokemonStat, PokemonType};
pub use pokemon_list::{NamedResource, PokemonList};
pub use pokemon_list_entry::PokemonListEntry;
