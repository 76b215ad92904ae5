// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::clock::DisplayMode;
use crate::ui::calendar_panel;
use crate::ui::clock_panel;
use crate::ui::theming::ThemePreset;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// 1 Hz wall-clock tick.
    Tick(Instant),
    Clock(clock_panel::Message),
    Calendar(calendar_panel::Message),
    /// Hide the startup warning banner.
    DismissWarning,
    /// Switch to another preset, keeping the accent override.
    SelectTheme(ThemePreset),
    /// Back to the default preset without an accent.
    ResetTheme,
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SHOWCASE_CLOCK_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Initial clock mode, overriding `[clock] mode`.
    pub mode: Option<DisplayMode>,
    /// Theme preset, overriding `[general] theme`.
    pub theme: Option<ThemePreset>,
}
