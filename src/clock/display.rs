// SPDX-License-Identifier: MPL-2.0
//! Digital/analog display mode controller.
//!
//! The controller owns the active [`DisplayMode`] and turns a wall-clock
//! reading into a [`Presentation`]. It holds no timer: the host calls
//! [`DisplayController::tick`] on its own schedule and the toggle entry
//! points on user input. Each call runs to completion, so no intermediate
//! mode is ever observable.

use super::format::{DateTimeFormatter, HourFormat};
use super::geometry::{compute_hand_angles, HandAngles};
use super::WallClockTime;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the clock is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Digital,
    Analog,
}

impl DisplayMode {
    /// The other mode. The machine has no terminal state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Digital => DisplayMode::Analog,
            DisplayMode::Analog => DisplayMode::Digital,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::Digital => write!(f, "digital"),
            DisplayMode::Analog => write!(f, "analog"),
        }
    }
}

impl FromStr for DisplayMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "digital" => Ok(DisplayMode::Digital),
            "analog" => Ok(DisplayMode::Analog),
            other => Err(Error::Cli(format!("unknown clock mode: {other}"))),
        }
    }
}

/// What the clock area shows for one tick.
#[derive(Debug, Clone, PartialEq)]
pub enum ClockView {
    /// Formatted time text; the analog canvas is hidden.
    Digital(String),
    /// Hand angles for the analog face; the digital text is hidden.
    Analog(HandAngles),
}

/// Output of one tick or toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    /// Long date, produced in both modes.
    pub date_text: String,
    pub view: ClockView,
}

impl Presentation {
    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        match self.view {
            ClockView::Digital(_) => DisplayMode::Digital,
            ClockView::Analog(_) => DisplayMode::Analog,
        }
    }
}

/// Owns the display mode and digital formatting preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayController {
    mode: DisplayMode,
    hour_format: HourFormat,
    show_seconds: bool,
}

impl Default for DisplayController {
    fn default() -> Self {
        Self::new(DisplayMode::default(), HourFormat::default(), true)
    }
}

impl DisplayController {
    #[must_use]
    pub fn new(mode: DisplayMode, hour_format: HourFormat, show_seconds: bool) -> Self {
        Self {
            mode,
            hour_format,
            show_seconds,
        }
    }

    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Switches to the other mode and presents `now` right away, so entering
    /// analog draws the face without waiting for the next tick.
    pub fn toggle(&mut self, now: &WallClockTime, formatter: &dyn DateTimeFormatter) -> Presentation {
        let next = self.mode.toggled();
        self.set_mode(next, now, formatter)
    }

    /// Selects `mode` explicitly. Selecting the active mode only re-presents.
    pub fn set_mode(
        &mut self,
        mode: DisplayMode,
        now: &WallClockTime,
        formatter: &dyn DateTimeFormatter,
    ) -> Presentation {
        if self.mode != mode {
            tracing::debug!(from = %self.mode, to = %mode, "clock display mode changed");
            self.mode = mode;
        }
        self.tick(now, formatter)
    }

    /// Presents `now` in the active mode. Date text is produced every tick.
    #[must_use]
    pub fn tick(&self, now: &WallClockTime, formatter: &dyn DateTimeFormatter) -> Presentation {
        let view = match self.mode {
            DisplayMode::Digital => {
                ClockView::Digital(formatter.format_time(now, self.hour_format, self.show_seconds))
            }
            DisplayMode::Analog => ClockView::Analog(compute_hand_angles(now)),
        };

        Presentation {
            date_text: formatter.format_date(now),
            view,
        }
    }
}
