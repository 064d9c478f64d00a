//! Drawing surface abstraction
//!
//! Every call carries its own style, so a backend never depends on state left
//! behind by a previous call. `DrawList` records calls for tests and the CLI.

use super::color::Rgba;

/// Point in canvas pixel coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// How a shape is filled or stroked
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    /// Linear gradient from `start` at point `from` to `end` at point `to`
    Linear {
        from: Point,
        to: Point,
        start: Rgba,
        end: Rgba,
    },
    /// Radial gradient from `inner` at `center` to `outer` at `radius`
    Radial {
        center: Point,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
    },
}

impl Paint {
    /// Color at the start of the paint, used by backends that cannot do gradients
    pub fn primary(&self) -> Rgba {
        match *self {
            Paint::Solid(c) => c,
            Paint::Linear { start, .. } => start,
            Paint::Radial { inner, .. } => inner,
        }
    }
}

/// Soft shadow behind a filled shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub color: Rgba,
}

/// A 2D drawing target
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Point, radius: f32, paint: Paint, glow: Option<Glow>);
    fn stroke_circle(&mut self, center: Point, radius: f32, color: Rgba, width: f32);
    fn line(&mut self, from: Point, to: Point, paint: Paint, width: f32);
}

/// A recorded drawing call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Clear {
        width: f32,
        height: f32,
    },
    FillCircle {
        center: Point,
        radius: f32,
        paint: Paint,
        glow: Option<Glow>,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        color: Rgba,
        width: f32,
    },
    Line {
        from: Point,
        to: Point,
        paint: Paint,
        width: f32,
    },
}

/// Recording surface
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all recorded commands, keeping the allocation
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clears(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Clear { .. }))
            .count()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Line { .. }))
    }

    pub fn filled_circles(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::FillCircle { .. }))
    }

    pub fn stroked_circles(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::StrokeCircle { .. }))
    }
}

impl Surface for DrawList {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCmd::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, paint: Paint, glow: Option<Glow>) {
        self.commands.push(DrawCmd::FillCircle {
            center,
            radius,
            paint,
            glow,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Rgba, width: f32) {
        self.commands.push(DrawCmd::StrokeCircle {
            center,
            radius,
            color,
            width,
        });
    }

    fn line(&mut self, from: Point, to: Point, paint: Paint, width: f32) {
        self.commands.push(DrawCmd::Line {
            from,
            to,
            paint,
            width,
        });
    }
}
