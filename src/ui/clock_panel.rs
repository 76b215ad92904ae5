// SPDX-License-Identifier: MPL-2.0
//! Clock card: a digital/analog switch above the time and the long date.

use crate::clock::{
    ClockPalette, ClockView, DateTimeFormatter, DisplayController, DisplayMode, Presentation,
    WallClockTime,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::ClockFace;
use iced::alignment::Horizontal;
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the clock card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: ColorScheme,
    /// Edge of the analog face in logical pixels.
    pub face_size: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Flip between digital and analog.
    ToggleMode,
    SetMode(DisplayMode),
}

pub struct State {
    controller: DisplayController,
    presentation: Presentation,
    face: ClockFace,
}

impl State {
    /// Presents `now` immediately so the first frame is never empty.
    pub fn new(
        controller: DisplayController,
        palette: ClockPalette,
        now: &WallClockTime,
        formatter: &dyn DateTimeFormatter,
    ) -> Self {
        let presentation = controller.tick(now, formatter);
        let mut face = ClockFace::new(palette);
        if let ClockView::Analog(angles) = presentation.view {
            face.set_angles(angles);
        }
        Self {
            controller,
            presentation,
            face,
        }
    }

    pub fn update(&mut self, message: Message, now: &WallClockTime, formatter: &dyn DateTimeFormatter) {
        let presentation = match message {
            Message::ToggleMode => self.controller.toggle(now, formatter),
            Message::SetMode(mode) => self.controller.set_mode(mode, now, formatter),
        };
        self.apply(presentation);
    }

    /// Refreshes the active view for a new reading.
    pub fn tick(&mut self, now: &WallClockTime, formatter: &dyn DateTimeFormatter) {
        let presentation = self.controller.tick(now, formatter);
        self.apply(presentation);
    }

    /// Recolors the analog face. Returns `true` when it must be redrawn.
    pub fn set_palette(&mut self, palette: ClockPalette) -> bool {
        self.face.set_palette(palette)
    }

    #[must_use]
    pub fn palette(&self) -> ClockPalette {
        self.face.palette()
    }

    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.controller.mode()
    }

    #[must_use]
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    fn apply(&mut self, presentation: Presentation) {
        if let ClockView::Analog(angles) = presentation.view {
            self.face.set_angles(angles);
        }
        self.presentation = presentation;
    }
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("clock-section-title")).size(typography::TITLE_SM);

    let body: Element<'a, Message> = match &state.presentation.view {
        ClockView::Digital(text) => Container::new(Text::new(text.clone()).size(typography::DISPLAY))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(ctx.face_size))
            .into(),
        ClockView::Analog(_) => Container::new(state.face.view(ctx.face_size))
            .center_x(Length::Fill)
            .into(),
    };

    let date = Text::new(state.presentation.date_text.clone()).size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(title)
        .push(mode_switch(state.mode(), &ctx))
        .push(body)
        .push(date);

    container(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card(ctx.scheme))
        .into()
}

fn mode_switch<'a>(active: DisplayMode, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let segment = |mode: DisplayMode, key: &str| {
        let segment = button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding([spacing::XS, spacing::MD])
            .on_press(Message::SetMode(mode));
        if mode == active {
            segment.style(styles::button::selected(ctx.scheme))
        } else {
            segment.style(styles::button::unselected(ctx.scheme))
        }
    };

    Row::new()
        .spacing(spacing::XXS)
        .push(segment(DisplayMode::Digital, "clock-mode-digital"))
        .push(segment(DisplayMode::Analog, "clock-mode-analog"))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{compute_hand_angles, HourFormat};
    use crate::config::Config;

    fn fixture() -> (State, I18n, WallClockTime) {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let now = WallClockTime::at(2026, 9, 15, 15, 0, 0).unwrap();
        let controller = DisplayController::new(DisplayMode::Digital, HourFormat::TwentyFourHour, true);
        let state = State::new(controller, ColorScheme::light().clock_palette(), &now, &i18n);
        (state, i18n, now)
    }

    #[test]
    fn starts_with_digital_text() {
        let (state, _, _) = fixture();
        assert_eq!(state.presentation().view, ClockView::Digital("15:00:00".into()));
        assert_eq!(state.presentation().date_text, "Thursday, October 15, 2026");
    }

    #[test]
    fn toggling_to_analog_moves_the_hands() {
        let (mut state, i18n, now) = fixture();
        state.update(Message::ToggleMode, &now, &i18n);

        assert_eq!(state.mode(), DisplayMode::Analog);
        assert_eq!(state.face.angles(), compute_hand_angles(&now));
    }

    #[test]
    fn set_mode_is_idempotent() {
        let (mut state, i18n, now) = fixture();
        state.update(Message::SetMode(DisplayMode::Digital), &now, &i18n);
        assert_eq!(state.mode(), DisplayMode::Digital);
    }

    #[test]
    fn leaving_analog_keeps_the_face() {
        let (mut state, i18n, now) = fixture();
        state.update(Message::ToggleMode, &now, &i18n);
        let angles = state.face.angles();

        state.update(Message::ToggleMode, &now, &i18n);

        assert_eq!(state.mode(), DisplayMode::Digital);
        assert!(matches!(state.presentation().view, ClockView::Digital(_)));
        assert_eq!(state.face.angles(), angles);
    }

    #[test]
    fn palette_swap_reports_redraw_once() {
        let (mut state, _, _) = fixture();
        let dark = ColorScheme::dark().clock_palette();

        assert!(state.set_palette(dark));
        assert!(!state.set_palette(dark));
        assert_eq!(state.palette(), dark);
    }

    #[test]
    fn tick_updates_digital_text() {
        let (mut state, i18n, _) = fixture();
        let later = WallClockTime::at(2026, 9, 15, 15, 0, 1).unwrap();
        state.tick(&later, &i18n);
        assert_eq!(state.presentation().view, ClockView::Digital("15:00:01".into()));
    }
}
