//! Particle field - drifting nodes joined by distance-faded lines
//!
//! Hub nodes carry orbiting satellites, the pointer attracts nearby nodes,
//! and pointer moves/clicks spawn short-lived burst particles.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;
use tracing::{debug, trace};

use super::color::Rgba;
use super::config::FieldConfig;
use super::scene::Scene;
use super::surface::{Glow, Paint, Point, Surface};
use crate::theme::{Theme, ThemeColors};

/// Nodes closer than this are connected by a line
pub const CONNECTION_DISTANCE: f32 = 150.0;
/// Pointer attraction reach
pub const ATTRACTION_RADIUS: f32 = 150.0;
/// Attraction acceleration at zero distance (px/frame²)
pub const ATTRACTION_STRENGTH: f32 = 0.2;
/// Speed cap applied after attraction (px/frame)
pub const MAX_ATTRACTED_SPEED: f32 = 2.0;
/// Radius of the soft highlight drawn under the pointer
pub const HIGHLIGHT_RADIUS: f32 = 100.0;
/// Chance that a node becomes a hub when hub mode is on
pub const HUB_PROBABILITY: f64 = 0.1;
/// Frames a burst particle stays on screen
pub const BURST_LIFE: u32 = 100;
pub const MOVE_BURST_COUNT: usize = 5;
pub const CLICK_BURST_COUNT: usize = 15;
/// Minimum gap between pointer-move bursts
pub const MOVE_BURST_INTERVAL_MS: f64 = 1000.0;

const REGULAR_RADIUS_BAND: (f32, f32) = (1.0, 3.0);
const HUB_RADIUS_BAND: (f32, f32) = (4.0, 7.0);
const BURST_PEAK_OPACITY: f32 = 0.8;
const ORBIT_TRACE_ALPHA: f32 = 0.1;
const HIGHLIGHT_ALPHA: f32 = 0.1;

/// Small point circling a hub node
#[derive(Clone, Debug, PartialEq)]
pub struct Satellite {
    pub orbit_radius: f32,
    /// Radians per frame
    pub orbit_speed: f32,
    pub orbit_angle: f32,
    pub radius: f32,
    pub color: Option<Rgba>,
}

impl Satellite {
    pub fn position(&self, center: Point) -> Point {
        Point::new(
            center.x + self.orbit_angle.cos() * self.orbit_radius,
            center.y + self.orbit_angle.sin() * self.orbit_radius,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub pos: Point,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    /// Palette color in colorful mode
    pub color: Option<Rgba>,
    /// Non-empty only for hubs
    pub satellites: Vec<Satellite>,
    hub: bool,
    pulse_direction: f32,
    pulse_step: f32,
}

impl Node {
    pub fn is_hub(&self) -> bool {
        self.hub
    }

    /// Inclusive `(min, max)` radius range the pulse keeps the node within
    pub fn radius_band(&self) -> (f32, f32) {
        if self.hub {
            HUB_RADIUS_BAND
        } else {
            REGULAR_RADIUS_BAND
        }
    }

    pub fn speed(&self) -> f32 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }

    /// Accelerate toward `target` when within reach, then cap speed
    fn attract(&mut self, target: Point) {
        let dx = target.x - self.pos.x;
        let dy = target.y - self.pos.y;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance <= 0.0 || distance >= ATTRACTION_RADIUS {
            return;
        }

        let force = ATTRACTION_STRENGTH * (1.0 - distance / ATTRACTION_RADIUS);
        self.vx += dx / distance * force;
        self.vy += dy / distance * force;

        let speed = self.speed();
        if speed > MAX_ATTRACTED_SPEED {
            self.vx = self.vx / speed * MAX_ATTRACTED_SPEED;
            self.vy = self.vy / speed * MAX_ATTRACTED_SPEED;
        }
    }

    /// Integrate position and bounce off the viewport edges
    fn advance(&mut self, width: f32, height: f32) {
        self.pos.x += self.vx;
        self.pos.y += self.vy;
        bounce(&mut self.pos.x, &mut self.vx, width);
        bounce(&mut self.pos.y, &mut self.vy, height);
    }

    fn pulse(&mut self) {
        if self.pulse_step == 0.0 {
            return;
        }
        let (min, max) = self.radius_band();
        self.radius += self.pulse_direction * self.pulse_step;
        if self.radius > max {
            self.radius = max;
            self.pulse_direction = -1.0;
        } else if self.radius < min {
            self.radius = min;
            self.pulse_direction = 1.0;
        }
    }

    fn orbit(&mut self) {
        for satellite in &mut self.satellites {
            satellite.orbit_angle = (satellite.orbit_angle + satellite.orbit_speed) % TAU;
        }
    }
}

/// Keep `pos` within `[0, max]`, pointing `vel` back inside on contact
fn bounce(pos: &mut f32, vel: &mut f32, max: f32) {
    if *pos < 0.0 {
        *pos = 0.0;
        *vel = vel.abs();
    } else if *pos > max {
        *pos = max;
        *vel = -vel.abs();
    }
}

/// Short-lived particle spawned by pointer interaction
#[derive(Clone, Debug, PartialEq)]
pub struct BurstParticle {
    pub pos: Point,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub color: Rgba,
    /// Frames elapsed since spawn
    pub age: u32,
    pub max_life: u32,
}

impl BurstParticle {
    /// Advance one frame. Returns false once the particle is spent.
    fn step(&mut self) -> bool {
        self.age += 1;
        if self.age > self.max_life {
            return false;
        }
        self.pos.x += self.vx;
        self.pos.y += self.vy;
        true
    }

    /// 1.0 on the first drawn frame, `1 / max_life` on the last
    pub fn life_fraction(&self) -> f32 {
        let remaining = (self.max_life + 1).saturating_sub(self.age).min(self.max_life);
        remaining as f32 / self.max_life.max(1) as f32
    }
}

/// The animated molecule backdrop
pub struct ParticleField {
    config: FieldConfig,
    theme: Theme,
    colors: ThemeColors,
    width: f32,
    height: f32,
    nodes: Vec<Node>,
    bursts: Vec<BurstParticle>,
    pointer: Option<Point>,
    last_move_burst_ms: Option<f64>,
    rng: SmallRng,
}

impl ParticleField {
    pub fn new(config: FieldConfig, theme: Theme, width: f32, height: f32) -> Self {
        Self::with_rng(config, theme, width, height, SmallRng::from_entropy())
    }

    /// Deterministic field for tests and reproducible headless runs
    pub fn with_seed(config: FieldConfig, theme: Theme, width: f32, height: f32, seed: u64) -> Self {
        Self::with_rng(config, theme, width, height, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: FieldConfig, theme: Theme, width: f32, height: f32, mut rng: SmallRng) -> Self {
        let nodes: Vec<Node> = (0..config.node_count)
            .map(|_| spawn_node(&config, width, height, &mut rng))
            .collect();

        let hubs = nodes.iter().filter(|n| n.is_hub()).count();
        debug!(
            nodes = nodes.len(),
            hubs,
            width,
            height,
            colorful = config.colorful,
            interactive = config.interactive,
            "Particle field created"
        );

        let colors = effective_colors(&config, theme);
        Self {
            config,
            theme,
            colors,
            width,
            height,
            nodes,
            bursts: Vec::new(),
            pointer: None,
            last_move_burst_ms: None,
            rng,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn bursts(&self) -> &[BurstParticle] {
        &self.bursts
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn opacity(&self) -> f32 {
        self.config.opacity
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Effective node/line/highlight colors (explicit config colors win)
    pub fn colors(&self) -> ThemeColors {
        self.colors
    }

    /// Switch default colors to another theme; nodes keep their state
    pub fn set_theme(&mut self, theme: Theme) {
        if theme != self.theme {
            debug!(from = %self.theme, to = %theme, "Particle field theme changed");
        }
        self.theme = theme;
        self.colors = effective_colors(&self.config, theme);
    }

    /// Emit `count` particles from `at` in random directions
    pub fn spawn_burst(&mut self, at: Point, count: usize) {
        let color = self.burst_color();
        self.bursts.reserve(count);
        for _ in 0..count {
            let angle = self.rng.gen::<f32>() * TAU;
            let speed = 1.0 + self.rng.gen::<f32>() * 3.0;
            self.bursts.push(BurstParticle {
                pos: at,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                radius: 1.0 + self.rng.gen::<f32>() * 2.0,
                color,
                age: 0,
                max_life: BURST_LIFE,
            });
        }
        trace!(x = at.x, y = at.y, count, total = self.bursts.len(), "Burst spawned");
    }

    fn burst_color(&mut self) -> Rgba {
        if self.config.colorful {
            if let Some(&c) = self.config.color_palette.choose(&mut self.rng) {
                return c;
            }
        }
        self.colors.node
    }

    /// Unordered node pairs `(i, j, distance)` with `i < j` closer than
    /// [`CONNECTION_DISTANCE`]
    pub fn connections(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        self.nodes.iter().enumerate().flat_map(move |(i, a)| {
            self.nodes[i + 1..]
                .iter()
                .enumerate()
                .filter_map(move |(k, b)| {
                    let d = a.pos.distance(b.pos);
                    (d < CONNECTION_DISTANCE).then_some((i, i + 1 + k, d))
                })
        })
    }

    fn render_node(&self, node: &Node, surface: &mut dyn Surface) {
        let colorful = self.config.colorful;

        for satellite in &node.satellites {
            let fill = match satellite.color {
                Some(c) if colorful => c,
                _ => self.colors.node,
            };
            surface.fill_circle(satellite.position(node.pos), satellite.radius, Paint::Solid(fill), None);

            let trace = match satellite.color {
                Some(c) if colorful => c.with_alpha(ORBIT_TRACE_ALPHA),
                _ => self.colors.highlight.with_alpha(ORBIT_TRACE_ALPHA),
            };
            surface.stroke_circle(node.pos, satellite.orbit_radius, trace, 0.5);
        }

        let (fill, glow) = match node.color {
            Some(c) if colorful => {
                let blur = if node.is_hub() { 20.0 } else { 15.0 };
                (c, Some(Glow { blur, color: c }))
            }
            _ => {
                let c = self.colors.node;
                let glow = node.is_hub().then_some(Glow { blur: 15.0, color: c });
                (c, glow)
            }
        };
        surface.fill_circle(node.pos, node.radius, Paint::Solid(fill), glow);
    }
}

fn effective_colors(config: &FieldConfig, theme: Theme) -> ThemeColors {
    let defaults = ThemeColors::for_theme(theme);
    ThemeColors {
        node: config.node_color.unwrap_or(defaults.node),
        line: config.line_color.unwrap_or(defaults.line),
        highlight: defaults.highlight,
    }
}

fn spawn_node(config: &FieldConfig, width: f32, height: f32, rng: &mut SmallRng) -> Node {
    let hub = config.hub_nodes && rng.gen_bool(HUB_PROBABILITY);
    let radius = if hub {
        4.0 + rng.gen::<f32>() * 3.0
    } else {
        1.0 + rng.gen::<f32>() * 2.0
    };
    // Hubs drift at half speed
    let speed = config.speed * if hub { 0.5 } else { 1.0 };
    let color = if config.colorful {
        config.color_palette.choose(rng).copied()
    } else {
        None
    };

    let satellites = if hub {
        let count = rng.gen_range(2..=4);
        (0..count)
            .map(|_| Satellite {
                orbit_radius: radius * 2.0 + rng.gen::<f32>() * 10.0,
                orbit_speed: 0.01 + rng.gen::<f32>() * 0.03,
                orbit_angle: rng.gen::<f32>() * TAU,
                radius: 0.5 + rng.gen::<f32>() * 1.5,
                color,
            })
            .collect()
    } else {
        Vec::new()
    };

    Node {
        pos: Point::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
        vx: (rng.gen::<f32>() - 0.5) * speed,
        vy: (rng.gen::<f32>() - 0.5) * speed,
        radius,
        color,
        satellites,
        hub,
        pulse_direction: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
        pulse_step: rng.gen::<f32>() * 0.02,
    }
}

impl Scene for ParticleField {
    fn resize(&mut self, width: f32, height: f32) {
        debug!(width, height, "Particle field resized");
        self.width = width;
        self.height = height;
    }

    fn tick(&mut self, _now_ms: f64) {
        self.bursts = std::mem::take(&mut self.bursts)
            .into_iter()
            .filter_map(|mut p| p.step().then_some(p))
            .collect();

        let attractor = if self.config.interactive { self.pointer } else { None };
        let (width, height) = (self.width, self.height);
        for node in &mut self.nodes {
            if let Some(target) = attractor {
                node.attract(target);
            }
            node.advance(width, height);
            node.pulse();
            node.orbit();
        }

        trace!(nodes = self.nodes.len(), bursts = self.bursts.len(), "Frame advanced");
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.clear(self.width, self.height);

        for p in &self.bursts {
            let color = p.color.fade(BURST_PEAK_OPACITY * p.life_fraction());
            surface.fill_circle(p.pos, p.radius, Paint::Solid(color), None);
        }

        if let Some(center) = self.pointer.filter(|_| self.config.interactive) {
            let inner = if self.config.colorful {
                Rgba::WHITE.with_alpha(HIGHLIGHT_ALPHA)
            } else {
                self.colors.highlight.with_alpha(HIGHLIGHT_ALPHA)
            };
            let paint = Paint::Radial {
                center,
                radius: HIGHLIGHT_RADIUS,
                inner,
                outer: Rgba::TRANSPARENT,
            };
            surface.fill_circle(center, HIGHLIGHT_RADIUS, paint, None);
        }

        for node in &self.nodes {
            self.render_node(node, surface);
        }

        for (i, j, distance) in self.connections() {
            let (a, b) = (&self.nodes[i], &self.nodes[j]);
            let paint = match (a.color, b.color) {
                (Some(start), Some(end)) if self.config.colorful => Paint::Linear {
                    from: a.pos,
                    to: b.pos,
                    start,
                    end,
                },
                _ => Paint::Solid(self.colors.line),
            };
            surface.line(a.pos, b.pos, paint, 1.0 - distance / CONNECTION_DISTANCE);
        }
    }

    fn pointer_moved(&mut self, x: f32, y: f32, now_ms: f64) {
        if !self.config.interactive {
            return;
        }
        let at = Point::new(x, y);
        self.pointer = Some(at);

        let due = self
            .last_move_burst_ms
            .map_or(true, |last| now_ms - last > MOVE_BURST_INTERVAL_MS);
        if self.config.particle_bursts && due {
            self.spawn_burst(at, MOVE_BURST_COUNT);
            self.last_move_burst_ms = Some(now_ms);
        }
    }

    fn pointer_left(&mut self) {
        self.pointer = None;
    }

    fn clicked(&mut self, x: f32, y: f32) {
        if self.config.bursts_enabled() {
            self.spawn_burst(Point::new(x, y), CLICK_BURST_COUNT);
        }
    }

    fn is_interactive(&self) -> bool {
        self.config.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::{DrawCmd, DrawList};

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    fn field(config: FieldConfig, seed: u64) -> ParticleField {
        ParticleField::with_seed(config, Theme::Dark, W, H, seed)
    }

    fn empty_config() -> FieldConfig {
        FieldConfig {
            node_count: 0,
            ..FieldConfig::default()
        }
    }

    #[test]
    fn nodes_stay_inside_the_canvas() {
        let mut f = field(
            FieldConfig {
                node_count: 60,
                speed: 6.0,
                ..FieldConfig::default()
            },
            7,
        );
        let mut list = DrawList::new();
        for frame in 0..2000 {
            // Sweep the pointer across the canvas to mix attraction into the motion
            if frame % 50 == 0 {
                let x = (frame as f32 * 13.0) % W;
                f.pointer_moved(x, H / 2.0, frame as f64 * 16.0);
            }
            list.reset();
            f.frame(frame as f64 * 16.0, &mut list);
            for (i, n) in f.nodes().iter().enumerate() {
                assert!(
                    (0.0..=W).contains(&n.pos.x) && (0.0..=H).contains(&n.pos.y),
                    "node {} escaped to ({}, {}) at frame {}",
                    i, n.pos.x, n.pos.y, frame
                );
            }
        }
    }

    #[test]
    fn radii_stay_within_pulse_band() {
        let mut f = field(
            FieldConfig {
                node_count: 80,
                ..FieldConfig::default()
            },
            11,
        );
        assert!(f.nodes().iter().any(|n| n.is_hub()), "seed should produce at least one hub");
        for _ in 0..5000 {
            f.tick(0.0);
            for n in f.nodes() {
                let (min, max) = n.radius_band();
                assert!(
                    n.radius >= min && n.radius <= max,
                    "radius {} outside [{}, {}] (hub={})",
                    n.radius, min, max, n.is_hub()
                );
            }
        }
    }

    #[test]
    fn lines_only_join_close_pairs() {
        let mut f = field(FieldConfig::default(), 3);
        let mut list = DrawList::new();
        for frame in 0..300 {
            list.reset();
            f.frame(frame as f64 * 16.0, &mut list);

            let nodes = f.nodes();
            let mut expected = 0;
            for i in 0..nodes.len() {
                for j in i + 1..nodes.len() {
                    if nodes[i].pos.distance(nodes[j].pos) < CONNECTION_DISTANCE {
                        expected += 1;
                    }
                }
            }
            assert_eq!(list.lines().count(), expected, "frame {}", frame);

            for cmd in list.lines() {
                if let DrawCmd::Line { from, to, width, .. } = cmd {
                    assert!(from.distance(*to) < CONNECTION_DISTANCE);
                    assert!(*width > 0.0 && *width <= 1.0);
                }
            }
        }
    }

    #[test]
    fn burst_particle_lives_exactly_its_life() {
        let mut f = field(empty_config(), 1);
        f.spawn_burst(Point::new(50.0, 50.0), 1);
        let mut list = DrawList::new();

        for frame in 1..=BURST_LIFE {
            list.reset();
            f.frame(0.0, &mut list);
            assert_eq!(f.bursts().len(), 1, "alive at frame {}", frame);
            assert_eq!(list.filled_circles().count(), 1, "drawn at frame {}", frame);
        }

        list.reset();
        f.frame(0.0, &mut list);
        assert!(f.bursts().is_empty(), "gone on frame {}", BURST_LIFE + 1);
        assert_eq!(list.filled_circles().count(), 0);
    }

    #[test]
    fn burst_fades_with_remaining_life() {
        let mut f = field(empty_config(), 1);
        f.spawn_burst(Point::new(50.0, 50.0), 1);
        let mut alphas = Vec::new();
        let mut list = DrawList::new();
        for _ in 0..BURST_LIFE {
            list.reset();
            f.frame(0.0, &mut list);
            if let Some(DrawCmd::FillCircle { paint, .. }) = list.filled_circles().next() {
                alphas.push(paint.primary().a);
            }
        }
        assert_eq!(alphas.len(), BURST_LIFE as usize);
        assert!((alphas[0] - 0.8 * 0.9).abs() < 1e-5, "dark node color alpha 0.9 * 0.8");
        assert!(alphas.windows(2).all(|w| w[1] < w[0]), "strictly fading");
    }

    #[test]
    fn resize_keeps_nodes_and_particles() {
        let mut f = field(FieldConfig::default(), 5);
        f.clicked(10.0, 10.0);
        let nodes_before = f.nodes().to_vec();
        let bursts_before = f.bursts().len();

        f.resize(320.0, 240.0);

        assert_eq!(f.size(), (320.0, 240.0));
        assert_eq!(f.nodes(), nodes_before.as_slice(), "resize must not touch nodes");
        assert_eq!(f.bursts().len(), bursts_before);

        let mut list = DrawList::new();
        f.frame(0.0, &mut list);
        assert_eq!(list.commands[0], DrawCmd::Clear { width: 320.0, height: 240.0 });
    }

    #[test]
    fn empty_field_only_clears() {
        let mut f = field(empty_config(), 0);
        let mut list = DrawList::new();
        for frame in 0..10 {
            list.reset();
            f.frame(frame as f64 * 16.0, &mut list);
            assert_eq!(list.commands, vec![DrawCmd::Clear { width: W, height: H }]);
        }
    }

    #[test]
    fn non_interactive_field_ignores_pointer() {
        let config = FieldConfig {
            interactive: false,
            ..FieldConfig::default()
        };
        let mut touched = field(config.clone(), 9);
        let mut untouched = field(config, 9);

        let target = touched.nodes()[0].pos;
        touched.pointer_moved(target.x + 10.0, target.y, 5000.0);
        touched.clicked(target.x, target.y);

        assert_eq!(touched.pointer(), None);
        assert!(touched.bursts().is_empty());

        for _ in 0..10 {
            touched.tick(0.0);
            untouched.tick(0.0);
        }
        assert_eq!(touched.nodes(), untouched.nodes(), "no attraction applied");
    }

    #[test]
    fn click_spawns_fifteen_particles_near_the_click() {
        let mut f = field(empty_config(), 2);
        f.clicked(100.0, 100.0);
        assert_eq!(f.bursts().len(), CLICK_BURST_COUNT);

        f.tick(0.0);
        let origin = Point::new(100.0, 100.0);
        for p in f.bursts() {
            // Launch speed is at most 4 px/frame
            assert!(p.pos.distance(origin) <= 4.0 + 1e-4, "particle at {:?}", p.pos);
        }
    }

    #[test]
    fn move_bursts_are_throttled_but_clicks_are_not() {
        let mut f = field(empty_config(), 4);
        f.pointer_moved(10.0, 10.0, 0.0);
        assert_eq!(f.bursts().len(), MOVE_BURST_COUNT);

        f.pointer_moved(20.0, 20.0, 500.0);
        f.pointer_moved(30.0, 30.0, 1000.0);
        assert_eq!(f.bursts().len(), MOVE_BURST_COUNT, "within the throttle window");
        assert_eq!(f.pointer(), Some(Point::new(30.0, 30.0)));

        f.clicked(30.0, 30.0);
        f.clicked(30.0, 30.0);
        assert_eq!(f.bursts().len(), MOVE_BURST_COUNT + 2 * CLICK_BURST_COUNT);

        f.pointer_moved(40.0, 40.0, 1001.0);
        assert_eq!(f.bursts().len(), 2 * MOVE_BURST_COUNT + 2 * CLICK_BURST_COUNT);
    }

    #[test]
    fn bursts_disabled_still_tracks_pointer() {
        let mut f = field(
            FieldConfig {
                particle_bursts: false,
                ..empty_config()
            },
            4,
        );
        f.pointer_moved(10.0, 10.0, 0.0);
        f.clicked(10.0, 10.0);
        assert!(f.bursts().is_empty());
        assert_eq!(f.pointer(), Some(Point::new(10.0, 10.0)));
    }

    #[test]
    fn pointer_attracts_and_caps_speed() {
        let mut f = field(
            FieldConfig {
                node_count: 1,
                hub_nodes: false,
                particle_bursts: false,
                ..FieldConfig::default()
            },
            8,
        );
        f.nodes[0].pos = Point::new(400.0, 300.0);
        f.nodes[0].vx = 0.0;
        f.nodes[0].vy = 0.0;
        f.pointer_moved(450.0, 300.0, 0.0);

        f.tick(0.0);
        assert!(f.nodes[0].vx > 0.0, "pulled toward the pointer");
        assert_eq!(f.nodes[0].vy, 0.0);

        f.nodes[0].pos = Point::new(440.0, 300.0);
        f.nodes[0].vx = 5.0;
        f.tick(0.0);
        assert!(f.nodes[0].speed() <= MAX_ATTRACTED_SPEED + 1e-5);
    }

    #[test]
    fn pointer_leave_stops_attraction_and_highlight() {
        let mut f = field(empty_config(), 6);
        f.pointer_moved(100.0, 100.0, 0.0);
        f.bursts.clear();

        let mut list = DrawList::new();
        f.frame(0.0, &mut list);
        assert!(matches!(
            list.filled_circles().next(),
            Some(DrawCmd::FillCircle { paint: Paint::Radial { .. }, radius, .. }) if *radius == HIGHLIGHT_RADIUS
        ));

        f.pointer_left();
        list.reset();
        f.frame(16.0, &mut list);
        assert_eq!(f.pointer(), None);
        assert_eq!(list.len(), 1, "only the clear remains");
    }

    #[test]
    fn hubs_carry_two_to_four_satellites() {
        let f = field(
            FieldConfig {
                node_count: 200,
                ..FieldConfig::default()
            },
            13,
        );
        let hubs: Vec<_> = f.nodes().iter().filter(|n| n.is_hub()).collect();
        assert!(!hubs.is_empty());
        for hub in hubs {
            assert!((2..=4).contains(&hub.satellites.len()));
            assert!((4.0..7.0).contains(&hub.radius));
        }
        assert!(f
            .nodes()
            .iter()
            .filter(|n| !n.is_hub())
            .all(|n| n.satellites.is_empty()));

        let plain = field(
            FieldConfig {
                node_count: 200,
                hub_nodes: false,
                ..FieldConfig::default()
            },
            13,
        );
        assert!(plain.nodes().iter().all(|n| !n.is_hub()));
    }

    #[test]
    fn satellites_draw_with_orbit_traces() {
        let f = field(
            FieldConfig {
                node_count: 200,
                ..FieldConfig::default()
            },
            13,
        );
        let satellites: usize = f.nodes().iter().map(|n| n.satellites.len()).sum();
        let mut list = DrawList::new();
        f.render(&mut list);
        assert_eq!(list.stroked_circles().count(), satellites);
        assert_eq!(list.filled_circles().count(), f.nodes().len() + satellites);
    }

    #[test]
    fn colorful_mode_uses_gradients_and_glow() {
        let mut f = field(
            FieldConfig {
                colorful: true,
                ..FieldConfig::default()
            },
            21,
        );
        assert!(f.nodes().iter().all(|n| n.color.is_some()));
        f.tick(0.0);

        let mut list = DrawList::new();
        f.render(&mut list);
        assert!(list.lines().count() > 0, "seed should produce connections");
        assert!(list
            .lines()
            .all(|c| matches!(c, DrawCmd::Line { paint: Paint::Linear { .. }, .. })));

        let node_fills = list.filled_circles().filter(|c| {
            matches!(c, DrawCmd::FillCircle { glow: Some(g), .. } if g.blur == 15.0 || g.blur == 20.0)
        });
        assert_eq!(node_fills.count(), f.nodes().len());
    }

    #[test]
    fn plain_mode_uses_line_color() {
        let line = Rgba::new(1, 2, 3, 0.4);
        let f = field(
            FieldConfig {
                line_color: Some(line),
                ..FieldConfig::default()
            },
            21,
        );
        let mut list = DrawList::new();
        f.render(&mut list);
        assert!(list.lines().count() > 0);
        assert!(list
            .lines()
            .all(|c| matches!(c, DrawCmd::Line { paint: Paint::Solid(p), .. } if *p == line)));
    }

    #[test]
    fn theme_switch_recolors_without_regenerating() {
        let mut f = field(FieldConfig::default(), 17);
        let nodes = f.nodes().to_vec();
        assert_eq!(f.colors(), ThemeColors::for_theme(Theme::Dark));

        assert_eq!(f.theme(), Theme::Dark);
        f.set_theme(Theme::Light);
        assert_eq!(f.theme(), Theme::Light);
        assert_eq!(f.colors(), ThemeColors::for_theme(Theme::Light));
        assert_eq!(f.nodes(), nodes.as_slice());
        assert_eq!(f.config(), &FieldConfig::default(), "config is untouched");

        let explicit = Rgba::rgb(9, 9, 9);
        let mut g = field(
            FieldConfig {
                node_color: Some(explicit),
                ..FieldConfig::default()
            },
            17,
        );
        g.set_theme(Theme::Light);
        assert_eq!(g.colors().node, explicit, "explicit color survives theme changes");
    }

    #[test]
    fn seeded_fields_are_reproducible() {
        let a = field(FieldConfig::default(), 99);
        let b = field(FieldConfig::default(), 99);
        assert_eq!(a.nodes(), b.nodes());
    }
}
