// SPDX-License-Identifier: GPL-3.0-only

use cosmic::cosmic_config;

use crate::{config::Config, core::AppRepository};

/// Flags given to our COSMIC application to use in it's "init" function.
#[derive(Clone, Debug)]
pub struct Flags {
    pub config_handler: Option<cosmic_config::Config>,
    pub config: Config,
    pub repository: AppRepository,
}

pub fn flags(repository: AppRepository) -> Flags {
    let (config_handler, config) = (Config::config_handler(), Config::config());

    Flags {
        config_handler,
        config,
        repository,
    }
}
