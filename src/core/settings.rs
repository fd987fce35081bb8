// SPDX-License-Identifier: GPL-3.0-only

use cosmic::{
    app::Settings,
    iced::{Limits, Size},
};

pub fn init() -> Settings {
    get_app_settings()
}

pub fn get_app_settings() -> Settings {
    let mut settings = Settings::default();

    settings = settings.size_limits(Limits::NONE.min_width(420.0).min_height(480.0));
    settings = settings.size(Size::new(900.0, 800.0));
    settings = settings.debug(false);
    settings
}
