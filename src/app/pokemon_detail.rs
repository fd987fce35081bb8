// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;

use cosmic::{
    Element,
    cosmic_theme::Spacing,
    iced::{Alignment, Background, Border, Color, Length},
    iced_widget::container,
    theme,
    widget,
};

use crate::{
    app::{Message, pokemon_list::Sprite},
    core::{
        api::PokemonApi,
        palette::Rgb,
        repository::{PokemonRepository, Resource},
    },
    entities::Pokemon,
    fl,
    utils::{capitalize_string, stat_abbreviation, stat_bar_portions, stat_color, type_color},
};

const SPRITE_SIZE: f32 = 200.0;
const ERROR_COLOR: Color = Color::from_rgb(0.85, 0.1, 0.1);

/// State behind the details page of the selected Pokémon
#[derive(Debug, Clone)]
pub struct PokemonDetailState {
    /// Name as the API knows it
    pub pokemon_name: String,
    /// Tint carried over from the list card
    pub dominant_color: Option<Rgb>,
    pub info: Resource<Pokemon>,
}

impl PokemonDetailState {
    pub fn new(pokemon_name: String, dominant_color: Option<Rgb>) -> Self {
        Self {
            pokemon_name,
            dominant_color,
            info: Resource::Loading,
        }
    }

    /// Stores the result if it still belongs to this page, returns whether it did
    pub fn apply(&mut self, pokemon_name: &str, result: Resource<Pokemon>) -> bool {
        if self.pokemon_name != pokemon_name {
            tracing::debug!("Dropping stale details for {pokemon_name}");
            return false;
        }

        self.info = result;
        true
    }

    /// Url of the sprite shown on top of the page
    pub fn sprite_url(&self) -> Option<&str> {
        match &self.info {
            Resource::Success(pokemon) => pokemon.sprites.front_default.as_deref(),
            _ => None,
        }
    }
}

pub async fn load<A: PokemonApi>(
    repository: PokemonRepository<A>,
    pokemon_name: String,
) -> (String, Resource<Pokemon>) {
    let result = repository.get_pokemon_info(&pokemon_name).await;
    (pokemon_name, result)
}

/// A container filled with a flat color
pub fn tinted(color: Rgb) -> theme::Container<'static> {
    theme::Container::custom(move |theme| {
        let text_color = if color.is_dark() {
            Color::WHITE
        } else {
            Color::BLACK
        };

        container::Style {
            background: Some(Background::Color(color.into())),
            text_color: Some(text_color),
            icon_color: Some(text_color),
            border: Border {
                radius: theme.cosmic().corner_radii.radius_m.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    })
}

pub fn error_text<'a>(message: &'a str) -> Element<'a, Message> {
    widget::text::body(message)
        .class(theme::Text::Color(ERROR_COLOR))
        .into()
}

pub fn view<'a>(
    state: &'a PokemonDetailState,
    sprites: &'a HashMap<String, Resource<Sprite>>,
    spacing: &Spacing,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match &state.info {
        Resource::Loading => widget::text::body(fl!("loading")).into(),
        Resource::Error(message) => error_text(message),
        Resource::Success(pokemon) => details(pokemon, sprites, spacing),
    };

    let header = widget::container(
        widget::text::title3(capitalize_string(&state.pokemon_name)).width(Length::Fill),
    )
    .padding(spacing.space_s)
    .width(Length::Fill);

    let header = match state.dominant_color {
        Some(color) => header.class(tinted(color)),
        None => header.class(theme::Container::Card),
    };

    widget::column()
        .push(header)
        .push(content)
        .spacing(spacing.space_s)
        .width(Length::Fill)
        .into()
}

fn details<'a>(
    pokemon: &'a Pokemon,
    sprites: &'a HashMap<String, Resource<Sprite>>,
    spacing: &Spacing,
) -> Element<'a, Message> {
    let sprite: Element<'a, Message> = match pokemon
        .sprites
        .front_default
        .as_ref()
        .and_then(|url| sprites.get(url))
    {
        Some(Resource::Success(sprite)) => widget::image(sprite.handle.clone())
            .width(Length::Fixed(SPRITE_SIZE))
            .height(Length::Fixed(SPRITE_SIZE))
            .into(),
        _ => widget::icon::from_name("image-missing-symbolic")
            .size(SPRITE_SIZE as u16)
            .icon()
            .into(),
    };

    let title = widget::text::title2(pokemon.display_title());

    let types = widget::Row::with_children(pokemon.types.iter().map(|pokemon_type| {
        widget::container(
            widget::text::body(capitalize_string(&pokemon_type.type_.name)).width(Length::Shrink),
        )
        .padding([spacing.space_xxxs, spacing.space_s])
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .class(tinted(type_color(&pokemon_type.type_.name)))
        .into()
    }))
    .spacing(spacing.space_xs)
    .width(Length::Fill);

    let measures = widget::Row::new()
        .push(measure(fl!("weight"), format!("{} kg", pokemon.weight_kg()), spacing))
        .push(measure(fl!("height"), format!("{} m", pokemon.height_m()), spacing))
        .spacing(spacing.space_xs);

    let abilities = widget::column()
        .push(widget::text::title4(fl!("abilities")))
        .extend(pokemon.abilities.iter().map(|ability| {
            let name = capitalize_string(&ability.ability.name);
            let label = if ability.is_hidden {
                format!("{name} ({})", fl!("hidden"))
            } else {
                name
            };
            widget::text::body(label).into()
        }))
        .spacing(spacing.space_xxxs)
        .width(Length::Fill);

    widget::column()
        .push(sprite)
        .push(title)
        .push(types)
        .push(measures)
        .push(abilities)
        .push(base_stats(pokemon, spacing))
        .align_x(Alignment::Center)
        .spacing(spacing.space_s)
        .into()
}

fn measure<'a>(label: String, value: String, spacing: &Spacing) -> Element<'a, Message> {
    widget::container(
        widget::column()
            .push(widget::text::heading(label))
            .push(widget::text::body(value))
            .align_x(Alignment::Center)
            .width(Length::Fill),
    )
    .padding(spacing.space_xs)
    .width(Length::Fill)
    .class(theme::Container::Card)
    .into()
}

fn base_stats<'a>(pokemon: &'a Pokemon, spacing: &Spacing) -> Element<'a, Message> {
    let max = pokemon.max_base_stat();

    let bars = pokemon.stats.iter().map(|stat| {
        let (filled, empty) = stat_bar_portions(stat.base_stat, max);

        let bar = widget::container(
            widget::text::body(stat.base_stat.to_string()).width(Length::Shrink),
        )
        .padding([0, spacing.space_xxs])
        .width(Length::FillPortion(filled.max(1)))
        .class(tinted(stat_color(&stat.stat.name)));

        let mut track = widget::Row::new().push(bar).width(Length::Fill);
        if empty > 0 {
            track = track.push(
                widget::container(widget::Column::new()).width(Length::FillPortion(empty)),
            );
        }

        widget::Row::new()
            .push(
                widget::text::heading(stat_abbreviation(&stat.stat.name))
                    .width(Length::Fixed(56.0)),
            )
            .push(track)
            .align_y(Alignment::Center)
            .spacing(spacing.space_xs)
            .into()
    });

    widget::column()
        .push(widget::text::title4(fl!("base-stats")))
        .extend(bars)
        .spacing(spacing.space_xxs)
        .width(Length::Fill)
        .into()
}
