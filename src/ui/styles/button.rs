// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for selected/active button state.
/// Use this for the active segment of a toggle group.
pub fn selected(scheme: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => Color {
                a: opacity::HOVER,
                ..scheme.primary
            },
            _ => scheme.primary,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: Color::WHITE,
            border: Border {
                color: scheme.primary,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        }
    }
}

/// Style for unselected/secondary button state.
pub fn unselected(scheme: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let border_color = match status {
            button::Status::Hovered => scheme.primary,
            _ => scheme.border,
        };

        button::Style {
            background: Some(Background::Color(scheme.light)),
            text_color: scheme.text,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless round button for month navigation arrows.
pub fn nav(scheme: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = match status {
            button::Status::Hovered => (Some(Background::Color(scheme.primary)), Color::WHITE),
            button::Status::Pressed => (Some(Background::Color(scheme.secondary)), Color::WHITE),
            _ => (None, scheme.primary),
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_button_uses_scheme_primary() {
        let scheme = ColorScheme::blue();
        let style = selected(scheme)(&Theme::Light, button::Status::Active);

        assert_eq!(style.background, Some(Background::Color(scheme.primary)));
        assert_eq!(style.text_color, Color::WHITE);
    }

    #[test]
    fn selected_button_fades_on_hover() {
        let style_fn = selected(ColorScheme::light());
        let normal = style_fn(&Theme::Light, button::Status::Active);
        let hover = style_fn(&Theme::Light, button::Status::Hovered);

        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn unselected_button_highlights_border_on_hover() {
        let scheme = ColorScheme::dark();
        let style = unselected(scheme)(&Theme::Dark, button::Status::Hovered);

        assert_eq!(style.border.color, scheme.primary);
        assert_eq!(style.text_color, scheme.text);
    }

    #[test]
    fn nav_button_is_transparent_until_hovered() {
        let style_fn = nav(ColorScheme::green());
        assert!(style_fn(&Theme::Light, button::Status::Active).background.is_none());
        assert!(style_fn(&Theme::Light, button::Status::Hovered).background.is_some());
    }

    #[test]
    fn nav_button_press_uses_secondary() {
        let scheme = ColorScheme::green();
        let style = nav(scheme)(&Theme::Light, button::Status::Pressed);
        assert_eq!(style.background, Some(Background::Color(scheme.secondary)));
    }
}
