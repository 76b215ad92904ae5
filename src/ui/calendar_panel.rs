// SPDX-License-Identifier: MPL-2.0
//! Mini calendar card.
//!
//! Shows one month as a Sunday-first 7-column grid with a localized
//! header row. The displayed month starts at the current one and can be
//! paged with the arrow buttons; [`Message::Today`] jumps back.

use crate::calendar::{month_title, weekday_header, DayCell, MonthCursor, DAYS_PER_WEEK};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use chrono::NaiveDate;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, tooltip, Column, Container, Row, Space, Text};
use iced::{Color, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: ColorScheme,
    pub highlight_today: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    PreviousMonth,
    NextMonth,
    Today,
}

pub struct State {
    cursor: MonthCursor,
    today: NaiveDate,
    cells: Vec<DayCell>,
}

impl State {
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        let cursor = MonthCursor::containing(today);
        Self {
            cursor,
            today,
            cells: cursor.grid(today),
        }
    }

    pub fn update(&mut self, message: Message) {
        self.cursor = match message {
            Message::PreviousMonth => self.cursor.previous(),
            Message::NextMonth => self.cursor.next(),
            Message::Today => MonthCursor::containing(self.today),
        };
        tracing::trace!(
            year = self.cursor.year(),
            month0 = self.cursor.month0(),
            "calendar month changed"
        );
        self.cells = self.cursor.grid(self.today);
    }

    /// Moves the highlight to a new date. A calendar showing the old
    /// current month follows into the new one; a paged calendar stays put.
    ///
    /// Returns `true` when the date changed.
    pub fn set_today(&mut self, today: NaiveDate) -> bool {
        if today == self.today {
            return false;
        }
        if self.cursor == MonthCursor::containing(self.today) {
            self.cursor = MonthCursor::containing(today);
        }
        tracing::debug!(%today, "calendar date rolled over");
        self.today = today;
        self.cells = self.cursor.grid(today);
        true
    }

    #[must_use]
    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    #[must_use]
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    // Arrow glyphs are not read out, so the localized label goes in a tooltip
    let with_hint = |content: button::Button<'a, Message>, key: &str| {
        tooltip::Tooltip::new(
            content,
            Text::new(ctx.i18n.tr(key)).size(typography::CAPTION),
            tooltip::Position::Bottom,
        )
        .gap(spacing::XXS)
        .padding(spacing::XS)
        .style(styles::container::card(ctx.scheme))
    };

    let nav_button = |label: &'static str, message: Message, key: &str| {
        with_hint(
            button(Text::new(label).size(typography::BODY))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::nav(ctx.scheme))
                .on_press(message),
            key,
        )
    };

    let title_button = with_hint(
        button(Text::new(month_title(state.cursor, ctx.i18n)).size(typography::TITLE_SM))
            .padding(0)
            .style(styles::button::nav(ctx.scheme))
            .on_press(Message::Today),
        "calendar-today",
    );

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(nav_button("‹", Message::PreviousMonth, "calendar-previous-month"))
        .push(Space::new().width(Length::Fill))
        .push(title_button)
        .push(Space::new().width(Length::Fill))
        .push(nav_button("›", Message::NextMonth, "calendar-next-month"));

    let weekday_row = weekday_header(ctx.i18n)
        .into_iter()
        .fold(Row::new().spacing(spacing::XXS), |row, name| {
            row.push(cell(
                Text::new(name).size(typography::CAPTION).color(Color {
                    a: opacity::MUTED,
                    ..ctx.scheme.text
                }),
                ctx.scheme,
                false,
            ))
        });

    let mut grid = Column::new().spacing(spacing::XXS).push(weekday_row);
    for week in state.cells.chunks(DAYS_PER_WEEK) {
        let mut row = Row::new().spacing(spacing::XXS);
        for day in week {
            row = row.push(day_cell(*day, &ctx));
        }
        grid = grid.push(row);
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(ctx.i18n.tr("calendar-section-title")).size(typography::TITLE_SM))
        .push(header)
        .push(Container::new(grid).center_x(Length::Fill));

    container(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card(ctx.scheme))
        .into()
}

fn day_cell<'a>(day: DayCell, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match day {
        DayCell::Blank => Space::new()
            .width(Length::Fixed(sizing::DAY_CELL))
            .height(Length::Fixed(sizing::DAY_CELL))
            .into(),
        DayCell::Day { number, is_today } => cell(
            Text::new(number.to_string()).size(typography::BODY),
            ctx.scheme,
            is_today && ctx.highlight_today,
        ),
    }
}

fn cell<'a>(content: Text<'a>, scheme: ColorScheme, highlighted: bool) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fixed(sizing::DAY_CELL))
        .height(Length::Fixed(sizing::DAY_CELL))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::day_cell(scheme, highlighted))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn today_numbers(state: &State) -> Vec<u32> {
        state
            .cells()
            .iter()
            .filter(|cell| cell.is_today())
            .filter_map(DayCell::number)
            .collect()
    }

    #[test]
    fn opens_on_current_month() {
        let state = State::new(date(2026, 10, 15));
        assert_eq!(state.cursor(), MonthCursor::new(2026, 9).unwrap());
        assert_eq!(today_numbers(&state), vec![15]);
    }

    #[test]
    fn paging_away_drops_the_highlight() {
        let mut state = State::new(date(2026, 10, 15));
        state.update(Message::NextMonth);

        assert_eq!(state.cursor(), MonthCursor::new(2026, 10).unwrap());
        assert!(today_numbers(&state).is_empty());

        state.update(Message::Today);
        assert_eq!(today_numbers(&state), vec![15]);
    }

    #[test]
    fn rollover_follows_into_next_month() {
        let mut state = State::new(date(2026, 10, 31));

        assert!(state.set_today(date(2026, 11, 1)));
        assert_eq!(state.cursor(), MonthCursor::new(2026, 10).unwrap());
        assert_eq!(today_numbers(&state), vec![1]);
    }

    #[test]
    fn rollover_keeps_a_paged_calendar() {
        let mut state = State::new(date(2026, 10, 31));
        state.update(Message::PreviousMonth);

        assert!(state.set_today(date(2026, 11, 1)));
        assert_eq!(state.cursor(), MonthCursor::new(2026, 8).unwrap());
    }

    #[test]
    fn same_day_is_not_a_rollover() {
        let mut state = State::new(date(2026, 10, 15));
        assert!(!state.set_today(date(2026, 10, 15)));
    }
}
