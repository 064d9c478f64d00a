//! `Surface` backed by an egui painter

use eframe::egui::{self, Color32, Pos2, Stroke, Vec2};

use crate::core::{Glow, Paint, Point, Rgba, Surface};

/// Segments used to approximate a linear-gradient stroke
const GRADIENT_STEPS: usize = 8;
/// Rings used to approximate a radial-gradient fill or a glow
const RADIAL_STEPS: usize = 6;

/// Draws scene coordinates into `painter`, offset to the panel origin.
/// `opacity` multiplies every color, like the page canvas CSS opacity.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    origin: Vec2,
    opacity: f32,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a egui::Painter, origin: Pos2, opacity: f32) -> Self {
        Self {
            painter,
            origin: origin.to_vec2(),
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    fn pos(&self, p: Point) -> Pos2 {
        Pos2::new(p.x, p.y) + self.origin
    }

    fn color(&self, c: Rgba) -> Color32 {
        let a = (c.a * self.opacity * 255.0).round().clamp(0.0, 255.0) as u8;
        Color32::from_rgba_unmultiplied(c.r, c.g, c.b, a)
    }

    fn radial(&self, center: Point, radius: f32, inner: Rgba, outer: Rgba) {
        // Outermost ring first so inner rings paint on top
        for step in (0..RADIAL_STEPS).rev() {
            let t = (step + 1) as f32 / RADIAL_STEPS as f32;
            let color = inner.lerp(outer, t);
            self.painter
                .circle_filled(self.pos(center), radius * t, self.color(color));
        }
    }
}

impl Surface for EguiSurface<'_> {
    fn clear(&mut self, _width: f32, _height: f32) {
        // egui repaints the whole frame; the panel fill is the background
    }

    fn fill_circle(&mut self, center: Point, radius: f32, paint: Paint, glow: Option<Glow>) {
        if let Some(glow) = glow {
            let halo = glow.color.fade(0.35);
            self.radial(center, radius + glow.blur * 0.5, halo, halo.with_alpha(0.0));
        }
        match paint {
            Paint::Radial {
                center: c,
                radius: r,
                inner,
                outer,
            } => self.radial(c, r, inner, outer),
            other => {
                self.painter
                    .circle_filled(self.pos(center), radius, self.color(other.primary()));
            }
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Rgba, width: f32) {
        self.painter.circle_stroke(
            self.pos(center),
            radius,
            Stroke::new(width, self.color(color)),
        );
    }

    fn line(&mut self, from: Point, to: Point, paint: Paint, width: f32) {
        match paint {
            Paint::Linear { start, end, .. } => {
                let a = self.pos(from);
                let b = self.pos(to);
                for step in 0..GRADIENT_STEPS {
                    let t0 = step as f32 / GRADIENT_STEPS as f32;
                    let t1 = (step + 1) as f32 / GRADIENT_STEPS as f32;
                    let mid = (t0 + t1) * 0.5;
                    self.painter.line_segment(
                        [a.lerp(b, t0), a.lerp(b, t1)],
                        Stroke::new(width, self.color(start.lerp(end, mid))),
                    );
                }
            }
            other => {
                self.painter.line_segment(
                    [self.pos(from), self.pos(to)],
                    Stroke::new(width, self.color(other.primary())),
                );
            }
        }
    }
}
