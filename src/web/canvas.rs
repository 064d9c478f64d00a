//! `Surface` backed by a canvas 2D context
//!
//! Fill, stroke, shadow and line width are set on every call.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::core::{Glow, Paint, Point, Rgba, Surface};

pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn gradient(&self, paint: Paint) -> Result<Option<web_sys::CanvasGradient>, JsValue> {
        let gradient = match paint {
            Paint::Solid(_) => return Ok(None),
            Paint::Linear { from, to, start, end } => {
                let g = self.ctx.create_linear_gradient(
                    from.x as f64,
                    from.y as f64,
                    to.x as f64,
                    to.y as f64,
                );
                g.add_color_stop(0.0, &start.to_css())?;
                g.add_color_stop(1.0, &end.to_css())?;
                g
            }
            Paint::Radial { center, radius, inner, outer } => {
                let (x, y) = (center.x as f64, center.y as f64);
                let g = self.ctx.create_radial_gradient(x, y, 0.0, x, y, radius as f64)?;
                g.add_color_stop(0.0, &inner.to_css())?;
                g.add_color_stop(1.0, &outer.to_css())?;
                g
            }
        };
        Ok(Some(gradient))
    }

    fn set_fill(&self, paint: Paint) {
        match self.gradient(paint) {
            Ok(Some(g)) => self.ctx.set_fill_style_canvas_gradient(&g),
            _ => self.ctx.set_fill_style_str(&paint.primary().to_css()),
        }
    }

    fn set_stroke(&self, paint: Paint) {
        match self.gradient(paint) {
            Ok(Some(g)) => self.ctx.set_stroke_style_canvas_gradient(&g),
            _ => self.ctx.set_stroke_style_str(&paint.primary().to_css()),
        }
    }

    fn set_glow(&self, glow: Option<Glow>) {
        match glow {
            Some(g) => {
                self.ctx.set_shadow_blur(g.blur as f64);
                self.ctx.set_shadow_color(&g.color.to_css());
            }
            None => {
                self.ctx.set_shadow_blur(0.0);
                self.ctx.set_shadow_color(&Rgba::TRANSPARENT.to_css());
            }
        }
    }

    fn circle_path(&self, center: Point, radius: f32) -> bool {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_ok()
    }
}

impl Surface for CanvasSurface<'_> {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, paint: Paint, glow: Option<Glow>) {
        if !self.circle_path(center, radius) {
            return;
        }
        self.set_fill(paint);
        self.set_glow(glow);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Rgba, width: f32) {
        if !self.circle_path(center, radius) {
            return;
        }
        self.set_stroke(Paint::Solid(color));
        self.set_glow(None);
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn line(&mut self, from: Point, to: Point, paint: Paint, width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.set_stroke(paint);
        self.set_glow(None);
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }
}
