//! Drift field - slow wrap-around particles for section backgrounds

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::color::Rgba;
use super::scene::Scene;
use super::surface::{Paint, Point, Surface};

/// Particles closer than this are joined
pub const LINK_DISTANCE: f32 = 100.0;
/// One particle per this many pixels of width, scaled by intensity
const PIXELS_PER_PARTICLE: f32 = 20.0;
const LINK_ALPHA: f32 = 0.1;
const LINK_WIDTH: f32 = 0.5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    #[default]
    Medium,
    Strong,
}

impl Intensity {
    pub fn factor(self) -> f32 {
        match self {
            Intensity::Light => 0.3,
            Intensity::Medium => 0.6,
            Intensity::Strong => 1.0,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Intensity::Light),
            "medium" => Some(Intensity::Medium),
            "strong" => Some(Intensity::Strong),
            _ => None,
        }
    }

    /// Particle count for a viewport `width` pixels wide
    pub fn particle_count(self, width: f32) -> usize {
        ((width / PIXELS_PER_PARTICLE).floor() * self.factor()).floor().max(0.0) as usize
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DriftParticle {
    pub pos: Point,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub opacity: f32,
}

impl DriftParticle {
    fn advance(&mut self, width: f32, height: f32) {
        self.pos.x += self.vx;
        self.pos.y += self.vy;
        self.pos.x = wrap(self.pos.x, width);
        self.pos.y = wrap(self.pos.y, height);
    }
}

/// Leaving one edge re-enters from the opposite edge
fn wrap(v: f32, max: f32) -> f32 {
    if v < 0.0 {
        max
    } else if v > max {
        0.0
    } else {
        v
    }
}

pub struct DriftField {
    color: Rgba,
    width: f32,
    height: f32,
    particles: Vec<DriftParticle>,
}

impl DriftField {
    pub fn new(intensity: Intensity, color: Rgba, width: f32, height: f32) -> Self {
        Self::with_rng(intensity, color, width, height, SmallRng::from_entropy())
    }

    pub fn with_seed(intensity: Intensity, color: Rgba, width: f32, height: f32, seed: u64) -> Self {
        Self::with_rng(intensity, color, width, height, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(intensity: Intensity, color: Rgba, width: f32, height: f32, mut rng: SmallRng) -> Self {
        let count = intensity.particle_count(width);
        let particles = (0..count)
            .map(|_| DriftParticle {
                pos: Point::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
                vx: (rng.gen::<f32>() - 0.5) * 0.5,
                vy: (rng.gen::<f32>() - 0.5) * 0.5,
                radius: 1.0 + rng.gen::<f32>() * 2.0,
                opacity: 0.2 + rng.gen::<f32>() * 0.5,
            })
            .collect();

        debug!(count, ?intensity, width, height, "Drift field created");
        Self {
            color,
            width,
            height,
            particles,
        }
    }

    pub fn particles(&self) -> &[DriftParticle] {
        &self.particles
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }
}

impl Scene for DriftField {
    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn tick(&mut self, _now_ms: f64) {
        let (width, height) = (self.width, self.height);
        for p in &mut self.particles {
            p.advance(width, height);
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.clear(self.width, self.height);

        for p in &self.particles {
            surface.fill_circle(p.pos, p.radius, Paint::Solid(self.color.with_alpha(p.opacity)), None);
        }

        let link = Paint::Solid(self.color.with_alpha(LINK_ALPHA));
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                if a.pos.distance(b.pos) < LINK_DISTANCE {
                    surface.line(a.pos, b.pos, link, LINK_WIDTH);
                }
            }
        }
    }
}
