// SPDX-License-Identifier: GPL-3.0-only

use cosmic::{
    cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry},
    theme,
};
use serde::{Deserialize, Serialize};

use crate::app::APP_ID;

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq)]
#[version = 1]
pub struct Config {
    pub app_theme: AppTheme,
    pub pokemon_per_row: usize,
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_theme: Default::default(),
            pokemon_per_row: 2,
            page_size: 20,
        }
    }
}

impl Config {
    /// Choices offered in the settings page for [`Config::pokemon_per_row`]
    pub const POKEMON_PER_ROW: &'static [usize] = &[2, 3, 4, 5];
    /// Choices offered in the settings page for [`Config::page_size`]
    pub const PAGE_SIZES: &'static [usize] = &[20, 40, 60];

    pub fn config_handler() -> Option<cosmic_config::Config> {
        cosmic_config::Config::new(APP_ID, Self::VERSION)
            .inspect_err(|err| tracing::error!("Failed to open the config: {err}"))
            .ok()
    }

    /// Reads the stored config, falling back to defaults for anything unreadable
    pub fn config() -> Config {
        match Self::config_handler() {
            Some(config_handler) => {
                Config::get_entry(&config_handler).unwrap_or_else(|(errs, config)| {
                    tracing::warn!("Errors loading config: {errs:?}");
                    config
                })
            }
            None => Config::default(),
        }
    }

    /// Page size actually used for requests, never zero
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }

    pub fn effective_pokemon_per_row(&self) -> usize {
        self.pokemon_per_row.max(1)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum AppTheme {
    Dark,
    Light,
    #[default]
    System,
}

impl AppTheme {
    pub const ALL: &'static [Self] = &[Self::System, Self::Dark, Self::Light];

    pub fn theme(&self) -> theme::Theme {
        match self {
            Self::Dark => theme::Theme::dark(),
            Self::Light => theme::Theme::light(),
            Self::System => theme::system_preference(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_the_two_column_layout() {
        let config = Config::default();

        assert_eq!(config.pokemon_per_row, 2);
        assert_eq!(config.effective_page_size(), 20);
        assert_eq!(config.app_theme, AppTheme::System);
    }

    #[test]
    fn zero_values_are_clamped() {
        let config = Config {
            pokemon_per_row: 0,
            page_size: 0,
            ..Default::default()
        };

        assert_eq!(config.effective_page_size(), 1);
        assert_eq!(config.effective_pokemon_per_row(), 1);
    }
}
