// SPDX-License-Identifier: MPL-2.0
//! Analog clock face drawn on an Iced canvas.

use crate::clock::{render, ClockPalette, HandAngles, StrokeStyle, Surface};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, LineCap, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};

/// Cached analog face. The geometry is rebuilt only when the hands or the
/// palette change.
pub struct ClockFace {
    cache: Cache,
    angles: HandAngles,
    palette: ClockPalette,
}

impl ClockFace {
    #[must_use]
    pub fn new(palette: ClockPalette) -> Self {
        Self {
            cache: Cache::default(),
            angles: HandAngles::default(),
            palette,
        }
    }

    /// Moves the hands. Returns `true` when the face must be redrawn.
    pub fn set_angles(&mut self, angles: HandAngles) -> bool {
        if self.angles == angles {
            return false;
        }
        self.angles = angles;
        self.cache.clear();
        true
    }

    /// Swaps the colors. Returns `true` when the face must be redrawn.
    pub fn set_palette(&mut self, palette: ClockPalette) -> bool {
        if self.palette == palette {
            return false;
        }
        self.palette = palette;
        self.cache.clear();
        true
    }

    #[must_use]
    pub fn angles(&self) -> HandAngles {
        self.angles
    }

    #[must_use]
    pub fn palette(&self) -> ClockPalette {
        self.palette
    }

    /// Square canvas of `size` logical pixels.
    pub fn view<'a, Message: 'a>(&'a self, size: f32) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for ClockFace {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let face_radius = frame.width().min(frame.height()) / 2.0;
                let mut surface = FrameSurface { frame };
                render(Some(&mut surface), face_radius, &self.angles, &self.palette);
            });

        vec![geometry]
    }
}

/// Adapts a canvas frame to the renderer's drawing API.
struct FrameSurface<'a> {
    frame: &'a mut Frame,
}

fn stroke(style: StrokeStyle) -> Stroke<'static> {
    Stroke::default()
        .with_width(style.width)
        .with_color(style.color)
        .with_line_cap(LineCap::Round)
}

impl Surface for FrameSurface<'_> {
    fn clear(&mut self) {
        // Frames handed out by `Cache::draw` start empty
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.frame.fill(&Path::circle(center, radius), color);
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, style: StrokeStyle) {
        self.frame.stroke(&Path::circle(center, radius), stroke(style));
    }

    fn line(&mut self, from: Point, to: Point, style: StrokeStyle) {
        self.frame.stroke(&Path::line(from, to), stroke(style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theming::ColorScheme;

    #[test]
    fn unchanged_angles_do_not_invalidate() {
        let mut face = ClockFace::new(ColorScheme::light().clock_palette());
        let angles = HandAngles {
            hour: 1.0,
            minute: 2.0,
            second: 3.0,
        };

        assert!(face.set_angles(angles));
        assert!(!face.set_angles(angles));
        assert_eq!(face.angles(), angles);
    }

    #[test]
    fn palette_change_invalidates() {
        let mut face = ClockFace::new(ColorScheme::light().clock_palette());

        assert!(!face.set_palette(ColorScheme::light().clock_palette()));
        assert!(face.set_palette(ColorScheme::dark().clock_palette()));
    }
}
