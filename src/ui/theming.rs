// SPDX-License-Identifier: MPL-2.0
//! Theme presets and the color schemes they resolve to.

use crate::clock::ClockPalette;
use crate::error::Error;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Second-hand color shared by every preset.
const WARNING: Color = Color::from_rgb8(0xf7, 0x25, 0x85);

/// Color palette for a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    /// Brand color: buttons, clock border and hub, today's cell.
    pub primary: Color,
    /// Pressed navigation buttons.
    pub secondary: Color,
    /// Subtle surface used behind inactive controls.
    pub light: Color,
    /// Strong foreground: clock ticks and hands.
    pub dark: Color,
    pub body_background: Color,
    /// Card surface, also the clock face fill.
    pub card_background: Color,
    pub text: Color,
    pub border: Color,
    pub warning: Color,
    pub is_dark: bool,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            primary: Color::from_rgb8(0x43, 0x61, 0xee),
            secondary: Color::from_rgb8(0x3a, 0x0c, 0xa3),
            light: Color::from_rgb8(0xf8, 0xf9, 0xfa),
            dark: Color::from_rgb8(0x21, 0x25, 0x29),
            body_background: Color::from_rgb8(0xf5, 0xf7, 0xff),
            card_background: Color::WHITE,
            text: Color::from_rgb8(0x21, 0x25, 0x29),
            border: Color::from_rgb8(0xe9, 0xec, 0xef),
            warning: WARNING,
            is_dark: false,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            primary: Color::from_rgb8(0x7b, 0x68, 0xee),
            secondary: Color::from_rgb8(0x4c, 0xc9, 0xf0),
            light: Color::from_rgb8(0x2d, 0x37, 0x48),
            dark: Color::from_rgb8(0xf8, 0xf9, 0xfa),
            body_background: Color::from_rgb8(0x12, 0x12, 0x12),
            card_background: Color::from_rgb8(0x1e, 0x1e, 0x1e),
            text: Color::from_rgb8(0xe2, 0xe8, 0xf0),
            border: Color::from_rgb8(0x4a, 0x55, 0x68),
            warning: WARNING,
            is_dark: true,
        }
    }

    #[must_use]
    pub fn blue() -> Self {
        Self {
            primary: Color::from_rgb8(0x00, 0x77, 0xb6),
            secondary: Color::from_rgb8(0x00, 0xb4, 0xd8),
            light: Color::from_rgb8(0xca, 0xf0, 0xf8),
            dark: Color::from_rgb8(0x03, 0x04, 0x5e),
            ..Self::light()
        }
    }

    #[must_use]
    pub fn green() -> Self {
        Self {
            primary: Color::from_rgb8(0x2a, 0x9d, 0x8f),
            secondary: Color::from_rgb8(0xe9, 0xc4, 0x6a),
            light: Color::from_rgb8(0xe9, 0xf5, 0xdb),
            dark: Color::from_rgb8(0x26, 0x46, 0x53),
            ..Self::light()
        }
    }

    /// Replaces the primary color, as the customizer's color picker does.
    #[must_use]
    pub fn with_accent(self, accent: Color) -> Self {
        Self {
            primary: accent,
            ..self
        }
    }

    /// Colors handed to the analog clock renderer.
    #[must_use]
    pub fn clock_palette(&self) -> ClockPalette {
        ClockPalette {
            face: self.card_background,
            accent: self.primary,
            tick: self.dark,
            second_hand: self.warning,
        }
    }

    /// Built-in Iced theme matching this scheme's brightness.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Named theme presets from the showcase customizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Light,
    Dark,
    Blue,
    Green,
    /// Follows the desktop light/dark setting.
    System,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 5] = [
        ThemePreset::Light,
        ThemePreset::Dark,
        ThemePreset::Blue,
        ThemePreset::Green,
        ThemePreset::System,
    ];

    /// Fluent key for the preset's display name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemePreset::Light => "theme-light",
            ThemePreset::Dark => "theme-dark",
            ThemePreset::Blue => "theme-blue",
            ThemePreset::Green => "theme-green",
            ThemePreset::System => "theme-system",
        }
    }

    /// Resolves to a concrete scheme. `System` defaults to dark when the
    /// desktop setting cannot be detected.
    #[must_use]
    pub fn scheme(self) -> ColorScheme {
        match self {
            ThemePreset::Light => ColorScheme::light(),
            ThemePreset::Dark => ColorScheme::dark(),
            ThemePreset::Blue => ColorScheme::blue(),
            ThemePreset::Green => ColorScheme::green(),
            ThemePreset::System => {
                if let Ok(dark_light::Mode::Light) = dark_light::detect() {
                    ColorScheme::light()
                } else {
                    ColorScheme::dark()
                }
            }
        }
    }
}

impl fmt::Display for ThemePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemePreset::Light => "light",
            ThemePreset::Dark => "dark",
            ThemePreset::Blue => "blue",
            ThemePreset::Green => "green",
            ThemePreset::System => "system",
        };
        f.write_str(name)
    }
}

impl FromStr for ThemePreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemePreset::ALL
            .into_iter()
            .find(|preset| preset.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::Cli(format!("unknown theme: {s}")))
    }
}

/// Builds the active scheme from a preset and an optional `#rrggbb` accent.
///
/// An accent that does not parse is ignored with a warning.
#[must_use]
pub fn resolve_scheme(preset: ThemePreset, accent: Option<&str>) -> ColorScheme {
    let scheme = preset.scheme();
    match accent {
        Some(raw) => match raw.parse::<Color>().ok() {
            Some(color) => scheme.with_accent(color),
            None => {
                tracing::warn!(accent = raw, "ignoring unparsable accent color");
                scheme
            }
        },
        None => scheme,
    }
}
