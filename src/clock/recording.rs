// SPDX-License-Identifier: MPL-2.0
//! Surface that records draw calls instead of rasterizing them.
//!
//! Useful to compare two renders or inspect what a frame would contain
//! without a GPU.

use super::render::{StrokeStyle, Surface};
use iced::{Color, Point};

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    Clear,
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        style: StrokeStyle,
    },
    Line {
        from: Point,
        to: Point,
        style: StrokeStyle,
    },
}

/// Records every call made since the last [`Surface::clear`].
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<PaintCommand>,
}

impl RecordingSurface {
    /// Commands recorded since the last clear, the clear itself included.
    #[must_use]
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(PaintCommand::Clear);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(PaintCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, style: StrokeStyle) {
        self.commands.push(PaintCommand::StrokeCircle {
            center,
            radius,
            style,
        });
    }

    fn line(&mut self, from: Point, to: Point, style: StrokeStyle) {
        self.commands.push(PaintCommand::Line { from, to, style });
    }
}
