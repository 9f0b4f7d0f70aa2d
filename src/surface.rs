/*
 * Surface Module
 *
 * This module defines the drawing surface the field renders into.
 * The simulator only needs three primitives: clear the whole region,
 * stroke a line segment and fill a circle with an optional soft glow.
 *
 * Every primitive carries its own complete style, so there is no
 * shared "current blur" state that could leak from one particle into
 * the next primitive drawn.
 *
 * DrawList records the primitives of one frame; the nannou renderer
 * replays it and tests inspect it.
 */

use nannou::prelude::*;

// Surface dimensions. Surface space has its origin at the top-left
// corner with y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    // A viewport with no area (minimised window, detached surface) cannot be drawn on
    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    pub fn center(&self) -> Vec2 {
        vec2(self.width / 2.0, self.height / 2.0)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    // Centered, y-up window coordinates -> surface coordinates
    pub fn from_window(&self, point: Vec2) -> Vec2 {
        vec2(point.x + self.width / 2.0, self.height / 2.0 - point.y)
    }

    // Surface coordinates -> centered, y-up window coordinates
    pub fn to_window(&self, point: Vec2) -> Vec2 {
        vec2(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Rgb<u8>,
    pub alpha: f32,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleStyle {
    pub color: Rgb<u8>,
    pub alpha: f32,
    pub blur: f32,
    pub blur_color: Rgb<u8>,
}

pub trait Surface {
    fn clear(&mut self, size: SurfaceSize);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, style: LineStyle);
    fn fill_circle(&mut self, center: Vec2, radius: f32, style: CircleStyle);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(SurfaceSize),
    Line { from: Vec2, to: Vec2, style: LineStyle },
    Circle { center: Vec2, radius: f32, style: CircleStyle },
}

// Records the primitives of a frame. Clearing drops everything recorded
// so far, the same way clearing a canvas discards what was painted.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    size: Option<SurfaceSize>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    // Size given by the last clear, if any
    pub fn size(&self) -> Option<SurfaceSize> {
        self.size
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    // Drop everything, including the clear marker
    pub fn reset(&mut self) {
        self.commands.clear();
        self.size = None;
    }
}

impl Surface for DrawList {
    fn clear(&mut self, size: SurfaceSize) {
        self.commands.clear();
        self.size = Some(size);
        self.commands.push(DrawCommand::Clear(size));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, style: LineStyle) {
        self.commands.push(DrawCommand::Line { from, to, style });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, style: CircleStyle) {
        self.commands.push(DrawCommand::Circle { center, radius, style });
    }
}
