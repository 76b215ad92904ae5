// SPDX-License-Identifier: MPL-2.0
//! Clock core: wall-clock snapshots, hand geometry, face rendering and the
//! digital/analog display controller.
//!
//! Everything here is synchronous and side-effect free except [`render`],
//! which only touches the [`Surface`] it is handed. Scheduling belongs to the
//! caller, which invokes [`DisplayController::tick`] about once per second.

pub mod display;
pub mod format;
pub mod geometry;
pub mod recording;
pub mod render;
pub mod time_source;

pub use display::{ClockView, DisplayController, DisplayMode, Presentation};
pub use format::{DateTimeFormatter, HourFormat};
pub use geometry::{compute_hand_angles, hand_tip, HandAngles};
pub use recording::{PaintCommand, RecordingSurface};
pub use render::{render, ClockPalette, StrokeStyle, Surface};
pub use time_source::{FixedClock, SystemClock, TimeSource};

use chrono::{Datelike, NaiveDate, Timelike};

/// Immutable wall-clock reading taken once per tick.
///
/// Months are zero-based and weekdays count from Sunday, matching the
/// calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClockTime {
    /// 0–23
    pub hour: u32,
    /// 0–59
    pub minute: u32,
    /// 0–59
    pub second: u32,
    /// 0–6, 0 = Sunday
    pub weekday: u32,
    /// 1–31
    pub day: u32,
    /// 0–11
    pub month: u32,
    pub year: i32,
}

impl WallClockTime {
    /// Captures the calendar and time-of-day fields of any chrono value.
    pub fn from_datetime<T: Datelike + Timelike>(value: &T) -> Self {
        Self {
            hour: value.hour(),
            minute: value.minute(),
            // Leap seconds are reported as 60 by some platforms
            second: value.second().min(59),
            weekday: value.weekday().num_days_from_sunday(),
            day: value.day(),
            month: value.month0(),
            year: value.year(),
        }
    }

    /// Builds a snapshot from explicit fields, deriving the weekday.
    ///
    /// Returns `None` when the date or time does not exist.
    #[must_use]
    pub fn at(year: i32, month0: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
        let datetime =
            NaiveDate::from_ymd_opt(year, month0.checked_add(1)?, day)?.and_hms_opt(hour, minute, second)?;
        Some(Self::from_datetime(&datetime))
    }

    /// Calendar date of this snapshot.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day)
    }
}
