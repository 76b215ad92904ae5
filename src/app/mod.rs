// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the clock and calendar.
//!
//! The `App` struct wires together localization, the color scheme and the two
//! cards, and routes the 1 Hz tick to both. Startup preferences come from
//! `settings.toml`, with command-line flags taking precedence.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::clock::{DisplayController, SystemClock, TimeSource};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::theming::{self, ColorScheme, ThemePreset};
use crate::ui::{calendar_panel, clock_panel};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    time_source: Box<dyn TimeSource>,
    clock: clock_panel::State,
    calendar: calendar_panel::State,
    preset: ThemePreset,
    /// `#rrggbb` override of the preset's primary color.
    accent: Option<String>,
    scheme: ColorScheme,
    face_size: f32,
    highlight_today: bool,
    /// i18n key of a warning raised while starting up.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("mode", &self.clock.mode())
            .field("calendar", &self.calendar.cursor())
            .field("preset", &self.preset)
            .field("dark", &self.scheme.is_dark)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            sizing::CARD_MIN_WIDTH * 2.0 + spacing::LG * 3.0,
            sizing::WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Iced 0.14 requires a `Fn` boot closure; the flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the config, applies command-line overrides and reads the
    /// system clock for the first frame.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, warning) = config::load();
        if let Some(mode) = flags.mode {
            config.clock.mode = mode;
        }
        if let Some(theme) = flags.theme {
            config.general.theme = theme;
        }

        let i18n = I18n::new(flags.lang, &config);
        let mut app = Self::with_time_source(&config, i18n, Box::new(SystemClock));
        app.warning = warning;

        tracing::info!(
            locale = %app.i18n.current_locale(),
            mode = %app.clock.mode(),
            theme = %config.general.theme,
            "application started"
        );

        (app, Task::none())
    }

    /// Builds the app around any clock source.
    pub fn with_time_source(config: &Config, i18n: I18n, time_source: Box<dyn TimeSource>) -> Self {
        let scheme = theming::resolve_scheme(config.general.theme, config.general.accent.as_deref());
        let now = time_source.now();
        let controller = DisplayController::new(
            config.clock.mode,
            config.clock.hour_format,
            config.clock.show_seconds,
        );
        let clock = clock_panel::State::new(controller, scheme.clock_palette(), &now, &i18n);
        let calendar = calendar_panel::State::new(now.date().unwrap_or_default());

        Self {
            i18n,
            time_source,
            clock,
            calendar,
            preset: config.general.theme,
            accent: config.general.accent.clone(),
            scheme,
            face_size: config.clock.clamped_size(),
            highlight_today: config.calendar.highlight_today,
            warning: None,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.scheme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(),
            subscription::create_event_subscription(),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            time_source: self.time_source.as_ref(),
            clock: &mut self.clock,
            calendar: &mut self.calendar,
            warning: &mut self.warning,
            preset: &mut self.preset,
            accent: &mut self.accent,
            scheme: &mut self.scheme,
        };
        update::update(&mut ctx, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            scheme: self.scheme,
            preset: self.preset,
            clock: &self.clock,
            calendar: &self.calendar,
            face_size: self.face_size,
            highlight_today: self.highlight_today,
            warning: self.warning.as_deref(),
        })
    }

    #[must_use]
    pub fn clock(&self) -> &clock_panel::State {
        &self.clock
    }

    #[must_use]
    pub fn calendar(&self) -> &calendar_panel::State {
        &self.calendar
    }

    #[must_use]
    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    #[must_use]
    pub fn preset(&self) -> ThemePreset {
        self.preset
    }

    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }
}
