// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Window background behind the cards.
pub fn body(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.body_background)),
        text_color: Some(scheme.text),
        ..Default::default()
    }
}

/// Card surface holding the clock or the calendar.
pub fn card(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.card_background)),
        text_color: Some(scheme.text),
        border: Border {
            color: scheme.border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Calendar day cell. Today is filled with the primary color.
pub fn day_cell(scheme: ColorScheme, is_today: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        if is_today {
            container::Style {
                background: Some(Background::Color(scheme.primary)),
                text_color: Some(Color::WHITE),
                border: Border {
                    radius: radius::FULL.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        } else {
            container::Style {
                text_color: Some(scheme.text),
                ..Default::default()
            }
        }
    }
}
