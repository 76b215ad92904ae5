// SPDX-License-Identifier: MPL-2.0
//! Analog clock hand geometry.
//!
//! Angles are radians measured clockwise from 12 o'clock. Surface
//! coordinates grow downward, so a hand at angle `a` points towards
//! `(sin a, -cos a)`.

use super::WallClockTime;
use iced::Point;
use std::f32::consts::TAU;

/// Angles of the three clock hands, each in `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

/// Computes hand angles for a wall-clock reading.
///
/// The hour and minute hands advance smoothly with the next smaller unit;
/// the second hand moves in whole-second steps to match a 1 Hz tick.
#[must_use]
#[allow(clippy::cast_precision_loss)]
// All inputs are below 60, exactly representable as f32
pub fn compute_hand_angles(time: &WallClockTime) -> HandAngles {
    let hour = (time.hour % 12) as f32 + time.minute as f32 / 60.0;
    let minute = time.minute as f32 + time.second as f32 / 60.0;
    let second = time.second as f32;

    HandAngles {
        hour: hour * TAU / 12.0,
        minute: minute * TAU / 60.0,
        second: second * TAU / 60.0,
    }
}

/// Projects a hand of `length` at `angle` from `center`.
#[must_use]
pub fn hand_tip(center: Point, angle: f32, length: f32) -> Point {
    Point::new(
        center.x + length * angle.sin(),
        center.y - length * angle.cos(),
    )
}
