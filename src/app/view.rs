// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Lays the clock and calendar cards side by side on the body background,
//! below the theme bar and an optional warning banner.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::{ColorScheme, ThemePreset};
use crate::ui::{calendar_panel, clock_panel, styles};
use iced::alignment::Vertical;
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: ColorScheme,
    pub preset: ThemePreset,
    pub clock: &'a clock_panel::State,
    pub calendar: &'a calendar_panel::State,
    pub face_size: f32,
    pub highlight_today: bool,
    /// i18n key of a startup warning.
    pub warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let clock = clock_panel::view(
        ctx.clock,
        clock_panel::ViewContext {
            i18n: ctx.i18n,
            scheme: ctx.scheme,
            face_size: ctx.face_size,
        },
    )
    .map(Message::Clock);

    let calendar = calendar_panel::view(
        ctx.calendar,
        calendar_panel::ViewContext {
            i18n: ctx.i18n,
            scheme: ctx.scheme,
            highlight_today: ctx.highlight_today,
        },
    )
    .map(Message::Calendar);

    let cards = Row::new()
        .spacing(spacing::LG)
        .push(Container::new(clock).width(Length::FillPortion(1)))
        .push(Container::new(calendar).width(Length::FillPortion(1)));

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(theme_bar(ctx.i18n, ctx.scheme, ctx.preset));
    if let Some(key) = ctx.warning {
        content = content.push(warning_banner(ctx.i18n, ctx.scheme, key));
    }
    content = content.push(cards);

    container(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::body(ctx.scheme))
        .into()
}

/// Preset buttons with the active one selected, then a reset button.
fn theme_bar<'a>(i18n: &'a I18n, scheme: ColorScheme, active: ThemePreset) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XXS).align_y(Vertical::Center);
    for preset in ThemePreset::ALL {
        let choice = button(Text::new(i18n.tr(preset.i18n_key())).size(typography::BODY))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding([spacing::XS, spacing::MD])
            .on_press(Message::SelectTheme(preset));
        row = row.push(if preset == active {
            choice.style(styles::button::selected(scheme))
        } else {
            choice.style(styles::button::unselected(scheme))
        });
    }

    row.push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("theme-reset")).size(typography::BODY))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::unselected(scheme))
                .on_press(Message::ResetTheme),
        )
        .into()
}

fn warning_banner<'a>(i18n: &'a I18n, scheme: ColorScheme, key: &str) -> Element<'a, Message> {
    let row = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr(key)).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new("×").size(typography::BODY))
                .style(styles::button::nav(scheme))
                .on_press(Message::DismissWarning),
        );

    container(row)
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .style(styles::container::card(scheme))
        .into()
}
