// SPDX-License-Identifier: MPL-2.0
//! Analog clock face rendering against an abstract drawing surface.
//!
//! All lengths are proportional to the face radius `R` (half the surface
//! height); the face center sits at `(R, R)` in surface coordinates.

use super::geometry::{hand_tip, HandAngles};
use iced::{Color, Point};
use std::f32::consts::TAU;

const FACE_RATIO: f32 = 0.9;
const BORDER_WIDTH_RATIO: f32 = 0.05;
const TICK_INNER_RATIO: f32 = 0.8;
const TICK_OUTER_RATIO: f32 = 0.9;
const TICK_WIDTH_RATIO: f32 = 0.02;
const HUB_RATIO: f32 = 0.05;
const HOUR_HAND_RATIO: f32 = 0.5;
const HOUR_HAND_WIDTH_RATIO: f32 = 0.05;
const MINUTE_HAND_RATIO: f32 = 0.7;
const MINUTE_HAND_WIDTH_RATIO: f32 = 0.04;
const SECOND_HAND_RATIO: f32 = 0.8;
const SECOND_HAND_WIDTH_RATIO: f32 = 0.01;
const HOUR_TICKS: u16 = 12;

/// Color and width of a stroked outline or segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

impl StrokeStyle {
    #[must_use]
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Colors used to draw the clock face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockPalette {
    /// Face disc fill.
    pub face: Color,
    /// Face border and center hub.
    pub accent: Color,
    /// Hour ticks, hour and minute hands.
    pub tick: Color,
    pub second_hand: Color,
}

/// Minimal drawing API the renderer needs.
pub trait Surface {
    /// Resets the surface to an empty state.
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
    fn stroke_circle(&mut self, center: Point, radius: f32, style: StrokeStyle);
    fn line(&mut self, from: Point, to: Point, style: StrokeStyle);
}

/// Redraws the whole clock face.
///
/// The surface is cleared first, so repeated calls with the same inputs
/// leave identical output. A `None` surface (not attached yet) is skipped.
pub fn render<S: Surface + ?Sized>(
    surface: Option<&mut S>,
    face_radius: f32,
    angles: &HandAngles,
    palette: &ClockPalette,
) {
    let Some(surface) = surface else {
        tracing::trace!("clock surface unavailable, skipping render");
        return;
    };

    let r = face_radius;
    let center = Point::new(r, r);

    surface.clear();

    surface.fill_circle(center, r * FACE_RATIO, palette.face);
    surface.stroke_circle(
        center,
        r * FACE_RATIO,
        StrokeStyle::new(palette.accent, r * BORDER_WIDTH_RATIO),
    );

    let tick_style = StrokeStyle::new(palette.tick, r * TICK_WIDTH_RATIO);
    for i in 0..HOUR_TICKS {
        let angle = f32::from(i) * TAU / f32::from(HOUR_TICKS);
        surface.line(
            hand_tip(center, angle, r * TICK_INNER_RATIO),
            hand_tip(center, angle, r * TICK_OUTER_RATIO),
            tick_style,
        );
    }

    surface.fill_circle(center, r * HUB_RATIO, palette.accent);

    surface.line(
        center,
        hand_tip(center, angles.hour, r * HOUR_HAND_RATIO),
        StrokeStyle::new(palette.tick, r * HOUR_HAND_WIDTH_RATIO),
    );
    surface.line(
        center,
        hand_tip(center, angles.minute, r * MINUTE_HAND_RATIO),
        StrokeStyle::new(palette.tick, r * MINUTE_HAND_WIDTH_RATIO),
    );
    surface.line(
        center,
        hand_tip(center, angles.second, r * SECOND_HAND_RATIO),
        StrokeStyle::new(palette.second_hand, r * SECOND_HAND_WIDTH_RATIO),
    );
}
