// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::clock::TimeSource;
use crate::i18n::fluent::I18n;
use crate::ui::theming::{self, ColorScheme, ThemePreset};
use crate::ui::{calendar_panel, clock_panel};
use iced::Task;

/// Mutable application state borrowed for one update.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub time_source: &'a dyn TimeSource,
    pub clock: &'a mut clock_panel::State,
    pub calendar: &'a mut calendar_panel::State,
    pub warning: &'a mut Option<String>,
    pub preset: &'a mut ThemePreset,
    pub accent: &'a mut Option<String>,
    pub scheme: &'a mut ColorScheme,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Tick(_instant) => handle_tick(ctx),
        Message::Clock(message) => {
            // Mode switches present a fresh reading, not the last tick's
            let now = ctx.time_source.now();
            ctx.clock.update(message, &now, ctx.i18n);
        }
        Message::Calendar(message) => ctx.calendar.update(message),
        Message::DismissWarning => *ctx.warning = None,
        Message::SelectTheme(preset) => {
            *ctx.preset = preset;
            apply_theme(ctx);
        }
        Message::ResetTheme => {
            *ctx.preset = ThemePreset::default();
            *ctx.accent = None;
            apply_theme(ctx);
        }
    }
    Task::none()
}

/// Reads the clock once and fans the reading out to both cards.
fn handle_tick(ctx: &mut UpdateContext<'_>) {
    let now = ctx.time_source.now();
    ctx.clock.tick(&now, ctx.i18n);
    if let Some(today) = now.date() {
        ctx.calendar.set_today(today);
    }
}

/// Re-resolves the scheme and recolors the analog face.
fn apply_theme(ctx: &mut UpdateContext<'_>) {
    *ctx.scheme = theming::resolve_scheme(*ctx.preset, ctx.accent.as_deref());
    let redraw = ctx.clock.set_palette(ctx.scheme.clock_palette());
    tracing::debug!(preset = %ctx.preset, redraw, "theme changed");
}
