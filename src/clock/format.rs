// SPDX-License-Identifier: MPL-2.0
//! Text formatting seam for the digital readout and calendar labels.

use super::WallClockTime;
use serde::{Deserialize, Serialize};

/// Digital readout hour style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HourFormat {
    #[serde(rename = "12h")]
    TwelveHour,
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
}

/// Locale-aware text for times, dates and calendar labels.
pub trait DateTimeFormatter {
    /// Time of day, e.g. `14:05:09` or `2:05 PM`.
    fn format_time(&self, time: &WallClockTime, hour_format: HourFormat, show_seconds: bool) -> String;

    /// Long date, e.g. `Thursday, October 15, 2026`.
    fn format_date(&self, time: &WallClockTime) -> String;

    /// Full month name for a zero-based month.
    fn month_name(&self, month0: u32) -> String;

    /// Two-letter weekday name, 0 = Sunday.
    fn weekday_short(&self, weekday: u32) -> String;
}

/// Converts a 0–23 hour to a 1–12 dial hour and a PM flag.
#[must_use]
pub fn twelve_hour(hour: u32) -> (u32, bool) {
    let pm = hour >= 12;
    match hour % 12 {
        0 => (12, pm),
        h => (h, pm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_hour_maps_midnight_and_noon_to_twelve() {
        assert_eq!(twelve_hour(0), (12, false));
        assert_eq!(twelve_hour(12), (12, true));
    }

    #[test]
    fn twelve_hour_maps_afternoon() {
        assert_eq!(twelve_hour(1), (1, false));
        assert_eq!(twelve_hour(13), (1, true));
        assert_eq!(twelve_hour(23), (11, true));
    }

    #[test]
    fn hour_format_serializes_as_short_names() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            format: HourFormat,
        }

        let text = toml::to_string(&Wrapper {
            format: HourFormat::TwelveHour,
        })
        .unwrap();
        assert!(text.contains("\"12h\""));

        let parsed: Wrapper = toml::from_str("format = \"24h\"").unwrap();
        assert_eq!(parsed.format, HourFormat::TwentyFourHour);
    }
}
