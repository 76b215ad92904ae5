// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed clock and calendar text.

use super::fluent::I18n;
use crate::clock::format::twelve_hour;
use crate::clock::{DateTimeFormatter, HourFormat, WallClockTime};

impl DateTimeFormatter for I18n {
    fn format_time(&self, time: &WallClockTime, hour_format: HourFormat, show_seconds: bool) -> String {
        let minute = format!("{:02}", time.minute);
        let second = format!("{:02}", time.second);

        match hour_format {
            HourFormat::TwentyFourHour => {
                let hour = format!("{:02}", time.hour);
                let key = if show_seconds { "time-24-hms" } else { "time-24-hm" };
                self.tr_with_args(
                    key,
                    &[
                        ("hour", hour.as_str()),
                        ("minute", minute.as_str()),
                        ("second", second.as_str()),
                    ],
                )
            }
            HourFormat::TwelveHour => {
                let (dial_hour, pm) = twelve_hour(time.hour);
                let hour = dial_hour.to_string();
                let period = self.tr(if pm { "time-period-pm" } else { "time-period-am" });
                let key = if show_seconds { "time-12-hms" } else { "time-12-hm" };
                self.tr_with_args(
                    key,
                    &[
                        ("hour", hour.as_str()),
                        ("minute", minute.as_str()),
                        ("second", second.as_str()),
                        ("period", period.as_str()),
                    ],
                )
            }
        }
    }

    fn format_date(&self, time: &WallClockTime) -> String {
        let weekday = self.tr(&format!("weekday-long-{}", time.weekday));
        let month = self.month_name(time.month);
        let day = time.day.to_string();
        let year = time.year.to_string();
        self.tr_with_args(
            "date-long",
            &[
                ("weekday", weekday.as_str()),
                ("month", month.as_str()),
                ("day", day.as_str()),
                ("year", year.as_str()),
            ],
        )
    }

    fn month_name(&self, month0: u32) -> String {
        self.tr(&format!("month-long-{month0}"))
    }

    fn weekday_short(&self, weekday: u32) -> String {
        self.tr(&format!("weekday-short-{weekday}"))
    }
}
