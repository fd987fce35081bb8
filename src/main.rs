// SPDX-License-Identifier: GPL-3.0-only

mod app;
mod config;
mod core;
mod entities;
mod flags;
mod i18n;
mod utils;

fn main() -> cosmic::iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    let repository = match crate::core::repository() {
        Ok(repository) => repository,
        Err(err) => {
            tracing::error!("Failed to build the PokéAPI client: {err}");
            std::process::exit(1);
        }
    };

    // Settings for configuring the application window and iced runtime.
    let settings = crate::core::settings::init();

    // Starts the application's event loop with the repository handed in through the flags.
    cosmic::app::run::<app::AppModel>(settings, flags::flags(repository))
}
