// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The clock is driven by a fixed 1 Hz timer; keyboard shortcuts mirror the
//! on-screen buttons.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use crate::ui::{calendar_panel, clock_panel};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Event, Subscription};
use std::time::Duration;

/// Wall-clock tick. Runs regardless of display mode so the date text and
/// the calendar's today marker stay current.
pub fn create_tick_subscription() -> Subscription<Message> {
    time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
}

/// Keyboard shortcuts not already consumed by a focused widget.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => shortcut(&key),
            _ => None,
        }
    })
}

/// Maps a pressed key to its action.
///
/// - `T` toggles digital/analog
/// - `←`/`→` page the calendar
/// - `Home` returns the calendar to the current month
pub(crate) fn shortcut(key: &Key) -> Option<Message> {
    match key.as_ref() {
        Key::Character(c) if c.eq_ignore_ascii_case("t") => {
            Some(Message::Clock(clock_panel::Message::ToggleMode))
        }
        Key::Named(Named::ArrowLeft) => Some(Message::Calendar(calendar_panel::Message::PreviousMonth)),
        Key::Named(Named::ArrowRight) => Some(Message::Calendar(calendar_panel::Message::NextMonth)),
        Key::Named(Named::Home) => Some(Message::Calendar(calendar_panel::Message::Today)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_toggles_clock_mode() {
        assert!(matches!(
            shortcut(&Key::Character("t".into())),
            Some(Message::Clock(clock_panel::Message::ToggleMode))
        ));
        assert!(matches!(
            shortcut(&Key::Character("T".into())),
            Some(Message::Clock(clock_panel::Message::ToggleMode))
        ));
    }

    #[test]
    fn arrows_page_the_calendar() {
        assert!(matches!(
            shortcut(&Key::Named(Named::ArrowLeft)),
            Some(Message::Calendar(calendar_panel::Message::PreviousMonth))
        ));
        assert!(matches!(
            shortcut(&Key::Named(Named::ArrowRight)),
            Some(Message::Calendar(calendar_panel::Message::NextMonth))
        ));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(shortcut(&Key::Character("x".into())).is_none());
        assert!(shortcut(&Key::Named(Named::Escape)).is_none());
    }
}
