// SPDX-License-Identifier: GPL-3.0

use cosmic::{app::context_drawer, theme, widget};

use crate::{
    app::{AppModel, Message, pokemon_detail},
    fl,
};

/// The context page to display in the context drawer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    /// About [`ContextPage`] of the application
    About,
    /// Settings [`ContextPage`] of the application
    Settings,
    /// Pokemon Details [`ContextPage`] of the application
    PokemonDetails,
}

impl ContextPage {
    /// Display the [`ContextPage`]
    pub fn display<'a>(
        &self,
        app_model: &'a AppModel,
    ) -> Option<context_drawer::ContextDrawer<'a, Message>> {
        let spacing = theme::active().cosmic().spacing;

        Some(match &self {
            ContextPage::About => context_drawer::about(
                &app_model.about,
                |s| Message::LaunchUrl(s.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            )
            .title(fl!("about")),
            ContextPage::Settings => context_drawer::context_drawer(
                app_model.settings(),
                Message::ToggleContextPage(ContextPage::Settings),
            )
            .title(fl!("settings")),
            ContextPage::PokemonDetails => {
                let details = app_model.details.as_ref()?;

                context_drawer::context_drawer(
                    widget::scrollable(pokemon_detail::view(
                        details,
                        &app_model.list.sprites,
                        &spacing,
                    )),
                    Message::ToggleContextPage(ContextPage::PokemonDetails),
                )
                .title(fl!("pokemon-page"))
            }
        })
    }
}
