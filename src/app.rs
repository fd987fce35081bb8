// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;

use cosmic::app::context_drawer;
use cosmic::iced::{Alignment, Length, Subscription};
use cosmic::prelude::*;
use cosmic::widget::about::About;
use cosmic::widget::{self, menu};
use cosmic::{cosmic_config, theme};

use crate::app::app_menu::MenuAction;
use crate::app::context_page::ContextPage;
use crate::app::pokemon_detail::{PokemonDetailState, tinted};
use crate::app::pokemon_list::{PokemonListState, Sprite};
use crate::config::{AppTheme, Config};
use crate::core::AppRepository;
use crate::core::repository::Resource;
use crate::entities::{Pokemon, PokemonList, PokemonListEntry};
use crate::fl;
use crate::flags::Flags;

mod app_menu;
mod context_page;
pub mod pokemon_detail;
pub mod pokemon_list;

pub const APP_ID: &str = "io.github.pokebrowse.PokeBrowse";
const REPOSITORY: &str = "https://github.com/pokebrowse/pokebrowse";
const CARD_SPRITE_SIZE: f32 = 96.0;

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    context_page: ContextPage,
    /// Contents of the About context page.
    about: About,
    /// Key bindings for the application's menu bar.
    key_binds: HashMap<menu::KeyBind, MenuAction>,
    /// Configuration data that persists between application runs.
    config: Config,
    /// Handler used to write configuration changes
    config_handler: Option<cosmic_config::Config>,
    /// Talks to PokéAPI
    repository: AppRepository,
    /// State of the paginated list
    list: PokemonListState,
    /// State of the details page, if a Pokémon was opened
    details: Option<PokemonDetailState>,
    /// Labels of the settings dropdowns
    theme_labels: Vec<String>,
    per_row_labels: Vec<String>,
    page_size_labels: Vec<String>,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    LaunchUrl(String),
    ToggleContextPage(ContextPage),
    MenuAction(MenuAction),
    UpdateConfig(Config),
    UpdateTheme(usize),
    UpdatePokemonPerRow(usize),
    UpdatePageSize(usize),

    LoadNextPage,
    PageLoaded(Resource<PokemonList>),
    ListScrolled(f32),
    Search(String),
    SpriteLoaded(String, Resource<Sprite>),
    OpenPokemon(PokemonListEntry),
    PokemonLoaded(String, Resource<Pokemon>),
}

/// Create a COSMIC application from the app model
impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = Flags;

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = APP_ID;

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::Named::new(Self::APP_ID))
            .version(env!("CARGO_PKG_VERSION"))
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"))
            .comments(format!("{}\n{}", fl!("pokeapi-text"), fl!("nintendo-text")));

        let mut app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            key_binds: HashMap::new(),
            config: flags.config,
            config_handler: flags.config_handler,
            repository: flags.repository,
            list: PokemonListState::default(),
            details: None,
            theme_labels: vec![fl!("match-desktop"), fl!("dark"), fl!("light")],
            per_row_labels: Config::POKEMON_PER_ROW
                .iter()
                .map(ToString::to_string)
                .collect(),
            page_size_labels: Config::PAGE_SIZES
                .iter()
                .map(ToString::to_string)
                .collect(),
        };

        let commands = Task::batch(vec![
            app.update_title(),
            cosmic::command::set_theme(app.config.app_theme.theme()),
            app.load_next_page(),
        ]);

        (app, commands)
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        let menu_bar = menu::bar(vec![menu::Tree::with_children(
            menu::root(fl!("view")).apply(Element::from),
            menu::items(
                &self.key_binds,
                vec![
                    menu::Item::Button(fl!("about"), None, MenuAction::About),
                    menu::Item::Button(fl!("settings"), None, MenuAction::Settings),
                ],
            ),
        )]);

        vec![menu_bar.into()]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        self.context_page.display(self)
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        self.landing()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        // Watch for application configuration changes.
        self.core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| {
                for why in update.errors {
                    tracing::error!(?why, "app config error");
                }

                Message::UpdateConfig(update.config)
            })
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::LaunchUrl(url) => {
                if let Err(err) = open::that_detached(&url) {
                    tracing::error!("Failed to open {url}: {err}");
                }
            }

            Message::ToggleContextPage(context_page) => {
                if self.context_page == context_page {
                    // Close the context drawer if the toggled context page is the same.
                    self.core.window.show_context = !self.core.window.show_context;
                } else {
                    // Open the context drawer to display the requested context page.
                    self.context_page = context_page;
                    self.core.window.show_context = true;
                }
            }

            Message::MenuAction(action) => {
                let context_page = match action {
                    MenuAction::About => ContextPage::About,
                    MenuAction::Settings => ContextPage::Settings,
                };
                return self.update(Message::ToggleContextPage(context_page));
            }

            Message::UpdateConfig(config) => {
                let theme_changed = config.app_theme != self.config.app_theme;
                self.config = config;
                if theme_changed {
                    return cosmic::command::set_theme(self.config.app_theme.theme());
                }
            }

            Message::UpdateTheme(index) => {
                let Some(app_theme) = AppTheme::ALL.get(index).copied() else {
                    return Task::none();
                };

                if let Some(handler) = &self.config_handler {
                    if let Err(err) = self.config.set_app_theme(handler, app_theme) {
                        tracing::error!("Failed to save the theme: {err}");
                    }
                } else {
                    self.config.app_theme = app_theme;
                }
                return cosmic::command::set_theme(app_theme.theme());
            }

            Message::UpdatePokemonPerRow(index) => {
                let Some(per_row) = Config::POKEMON_PER_ROW.get(index).copied() else {
                    return Task::none();
                };

                if let Some(handler) = &self.config_handler {
                    if let Err(err) = self.config.set_pokemon_per_row(handler, per_row) {
                        tracing::error!("Failed to save Pokémon per row: {err}");
                    }
                } else {
                    self.config.pokemon_per_row = per_row;
                }
            }

            Message::UpdatePageSize(index) => {
                let Some(page_size) = Config::PAGE_SIZES.get(index).copied() else {
                    return Task::none();
                };

                if let Some(handler) = &self.config_handler {
                    if let Err(err) = self.config.set_page_size(handler, page_size) {
                        tracing::error!("Failed to save the page size: {err}");
                    }
                } else {
                    self.config.page_size = page_size;
                }
            }

            Message::LoadNextPage => {
                return self.load_next_page();
            }

            Message::PageLoaded(result) => {
                let new_entries = self.list.apply_page(result);
                let sprites = new_entries
                    .iter()
                    .map(|entry| self.load_sprite(&entry.image_url))
                    .collect::<Vec<_>>();
                return Task::batch(sprites);
            }

            Message::ListScrolled(relative_offset) => {
                if self.list.should_load_more(relative_offset) {
                    return self.load_next_page();
                }
            }

            Message::Search(query) => {
                self.list.search(query);
            }

            Message::SpriteLoaded(url, sprite) => {
                self.list.sprites.insert(url, sprite);
            }

            Message::OpenPokemon(entry) => {
                self.details = Some(PokemonDetailState::new(
                    entry.api_name.clone(),
                    self.list.dominant_color(&entry),
                ));
                self.context_page = ContextPage::PokemonDetails;
                self.core.window.show_context = true;

                let repository = self.repository.clone();
                return Task::perform(
                    pokemon_detail::load(repository, entry.api_name),
                    |(name, result)| cosmic::Action::App(Message::PokemonLoaded(name, result)),
                );
            }

            Message::PokemonLoaded(name, result) => {
                let Some(details) = self.details.as_mut() else {
                    return Task::none();
                };

                if details.apply(&name, result) {
                    if let Some(url) = details.sprite_url().map(String::from) {
                        return self.load_sprite(&url);
                    }
                }
            }
        }
        Task::none()
    }
}

impl AppModel {
    /// Updates the header and window titles.
    pub fn update_title(&mut self) -> Task<cosmic::Action<Message>> {
        let window_title = fl!("window-title", page = fl!("all-pokemon"));

        self.set_header_title(fl!("all-pokemon"));
        if let Some(id) = self.core.main_window_id() {
            self.set_window_title(window_title, id)
        } else {
            Task::none()
        }
    }

    /// Requests the next page of the list if the list allows it
    fn load_next_page(&mut self) -> Task<cosmic::Action<Message>> {
        let Some(request) = self.list.next_request(self.config.effective_page_size()) else {
            return Task::none();
        };

        tracing::debug!(?request, "Requesting Pokémon page");
        let repository = self.repository.clone();
        Task::perform(
            async move {
                repository
                    .get_pokemon_list(request.limit, request.offset)
                    .await
            },
            |result| cosmic::Action::App(Message::PageLoaded(result)),
        )
    }

    /// Downloads a sprite unless it is already known
    fn load_sprite(&mut self, url: &str) -> Task<cosmic::Action<Message>> {
        if !self.list.request_sprite(url) {
            return Task::none();
        }

        let repository = self.repository.clone();
        let url = url.to_string();
        Task::perform(
            async move {
                let sprite = pokemon_list::load_sprite(repository, url.clone()).await;
                (url, sprite)
            },
            |(url, sprite)| cosmic::Action::App(Message::SpriteLoaded(url, sprite)),
        )
    }

    /// The list page for this app.
    pub fn landing(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        let search = widget::search_input(fl!("search"), &self.list.search)
            .on_input(Message::Search)
            .on_clear(Message::Search(String::new()))
            .width(Length::Fill);

        let per_row = self.config.effective_pokemon_per_row();
        let entries = self.list.visible_entries();
        let rows = entries.chunks(per_row).map(|chunk| {
            let mut row = widget::Row::new()
                .spacing(spacing.space_s)
                .width(Length::Fill);
            for &entry in chunk {
                row = row.push(self.pokemon_card(entry));
            }
            for _ in chunk.len()..per_row {
                row = row.push(
                    widget::container(widget::Column::new()).width(Length::FillPortion(1)),
                );
            }
            row.into()
        });

        let mut pokemon_list = widget::column()
            .extend(rows)
            .spacing(spacing.space_s)
            .width(Length::Fill);

        if !self.list.load_error.is_empty() {
            pokemon_list = pokemon_list.push(pokemon_detail::error_text(&self.list.load_error));
        }

        let footer: Element<'_, Message> = if self.list.is_loading {
            widget::text::body(fl!("loading")).into()
        } else if self.list.end_reached {
            widget::text::caption(fl!("end-reached")).into()
        } else if self.list.is_searching() {
            widget::column().into()
        } else {
            widget::button::standard(fl!("load-more"))
                .on_press(Message::LoadNextPage)
                .into()
        };

        let content = widget::column()
            .push(pokemon_list)
            .push(
                widget::container(footer)
                    .width(Length::Fill)
                    .align_x(Alignment::Center),
            )
            .spacing(spacing.space_s)
            .padding([spacing.space_none, spacing.space_s]);

        widget::column()
            .push(widget::container(search).padding(spacing.space_xs))
            .push(
                widget::scrollable(content)
                    .on_scroll(|viewport| Message::ListScrolled(viewport.relative_offset().y))
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn pokemon_card<'a>(&'a self, entry: &'a PokemonListEntry) -> Element<'a, Message> {
        let spacing = theme::active().cosmic().spacing;

        let sprite: Element<'a, Message> = match self.list.sprites.get(&entry.image_url) {
            Some(Resource::Success(sprite)) => widget::image(sprite.handle.clone())
                .width(Length::Fixed(CARD_SPRITE_SIZE))
                .height(Length::Fixed(CARD_SPRITE_SIZE))
                .into(),
            _ => widget::icon::from_name("image-missing-symbolic")
                .size(CARD_SPRITE_SIZE as u16)
                .icon()
                .into(),
        };

        let card = widget::container(
            widget::column()
                .push(sprite)
                .push(widget::text::heading(&entry.pokemon_name))
                .align_x(Alignment::Center)
                .width(Length::Fill),
        )
        .padding(spacing.space_s)
        .width(Length::Fill);

        let card = match self.list.dominant_color(entry) {
            Some(color) => card.class(tinted(color)),
            None => card.class(theme::Container::Card),
        };

        widget::mouse_area(card)
            .on_press(Message::OpenPokemon(entry.clone()))
            .apply(widget::container)
            .width(Length::FillPortion(1))
            .into()
    }

    /// The settings page for this app.
    pub fn settings(&self) -> Element<'_, Message> {
        let selected_theme = AppTheme::ALL
            .iter()
            .position(|app_theme| *app_theme == self.config.app_theme);

        let selected_per_row = Config::POKEMON_PER_ROW
            .iter()
            .position(|per_row| *per_row == self.config.pokemon_per_row);

        let selected_page_size = Config::PAGE_SIZES
            .iter()
            .position(|page_size| *page_size == self.config.page_size);

        widget::settings::view_column(vec![
            widget::settings::section()
                .title(fl!("appearance"))
                .add(
                    widget::settings::item::builder(fl!("theme")).control(widget::dropdown(
                        &self.theme_labels,
                        selected_theme,
                        Message::UpdateTheme,
                    )),
                )
                .into(),
            widget::settings::section()
                .title(fl!("list"))
                .add(
                    widget::settings::item::builder(fl!("pokemon-per-row")).control(
                        widget::dropdown(
                            &self.per_row_labels,
                            selected_per_row,
                            Message::UpdatePokemonPerRow,
                        ),
                    ),
                )
                .add(
                    widget::settings::item::builder(fl!("page-size")).control(widget::dropdown(
                        &self.page_size_labels,
                        selected_page_size,
                        Message::UpdatePageSize,
                    )),
                )
                .into(),
        ])
        .into()
    }
}
