//! Native preview window for the backdrops
//!
//! Renders a `ParticleField` (or `DriftField`) with egui so the effect can be
//! tuned without a browser.

mod header;
mod painter;
mod settings;

use eframe::egui;
use tracing::info;

use crate::core::{DriftField, FieldConfig, Intensity, ParticleField, Scene};
use crate::theme::{visuals, Theme, ThemeColors};
use crate::time::{now_millis, FpsCounter};
use painter::EguiSurface;

/// Which backdrop the preview shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Backdrop {
    #[default]
    Molecule,
    Drift(Intensity),
}

enum ActiveScene {
    Molecule(ParticleField),
    Drift(DriftField),
}

impl ActiveScene {
    fn as_scene(&mut self) -> &mut dyn Scene {
        match self {
            ActiveScene::Molecule(f) => f,
            ActiveScene::Drift(f) => f,
        }
    }
}

pub struct PreviewApp {
    scene: ActiveScene,
    /// Config the settings panel edits; applied by rebuilding the scene
    pub(crate) draft: FieldConfig,
    pub(crate) backdrop: Backdrop,
    pub(crate) theme: Theme,
    pub(crate) fps_counter: FpsCounter,
    pub(crate) show_settings: bool,
    /// Scene size the current field was built for
    size: (f32, f32),
    pointer_inside: bool,
}

impl PreviewApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: FieldConfig, backdrop: Backdrop) -> Self {
        let theme = if cc.egui_ctx.style().visuals.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        };
        cc.egui_ctx.set_visuals(visuals::for_theme(theme));

        let size = (1280.0, 800.0);
        let scene = build_scene(&config, backdrop, theme, size);
        info!(?backdrop, %theme, "Preview started");
        Self {
            scene,
            draft: config,
            backdrop,
            theme,
            fps_counter: FpsCounter::new(),
            show_settings: false,
            size,
            pointer_inside: false,
        }
    }

    /// Rebuild the scene from the draft config, like a remount on the page
    pub(crate) fn rebuild(&mut self) {
        self.scene = build_scene(&self.draft, self.backdrop, self.theme, self.size);
        info!(
            nodes = self.draft.node_count,
            backdrop = ?self.backdrop,
            "Backdrop rebuilt"
        );
    }

    pub(crate) fn set_theme(&mut self, ctx: &egui::Context, theme: Theme) {
        self.theme = theme;
        ctx.set_visuals(visuals::for_theme(theme));
        match &mut self.scene {
            ActiveScene::Molecule(field) => field.set_theme(theme),
            ActiveScene::Drift(field) => field.set_color(ThemeColors::for_theme(theme).highlight),
        }
    }

    /// `(nodes, bursts)` for the header
    pub(crate) fn counts(&self) -> (usize, usize) {
        match &self.scene {
            ActiveScene::Molecule(f) => (f.nodes().len(), f.bursts().len()),
            ActiveScene::Drift(f) => (f.particles().len(), 0),
        }
    }

    /// Short description of the running field, e.g. `dark, interactive, hubs`
    pub(crate) fn status(&self) -> String {
        match &self.scene {
            ActiveScene::Molecule(f) => {
                let config = f.config();
                let mut parts = vec![f.theme().to_string()];
                if config.interactive {
                    parts.push("interactive".into());
                }
                if config.hub_nodes {
                    parts.push("hubs".into());
                }
                if config.colorful {
                    parts.push("colorful".into());
                }
                parts.join(", ")
            }
            ActiveScene::Drift(_) => format!("{}, drift", self.theme),
        }
    }

    fn opacity(&self) -> f32 {
        match &self.scene {
            ActiveScene::Molecule(f) => f.opacity(),
            ActiveScene::Drift(_) => 1.0,
        }
    }

    fn render_backdrop(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let rect = response.rect;
        let origin = rect.min;
        let now = now_millis();

        let size = (rect.width(), rect.height());
        if size != self.size {
            self.size = size;
            self.scene.as_scene().resize(size.0, size.1);
        }

        let scene = self.scene.as_scene();
        match response.hover_pos() {
            Some(pos) => {
                self.pointer_inside = true;
                scene.pointer_moved(pos.x - origin.x, pos.y - origin.y, now);
            }
            None if self.pointer_inside => {
                self.pointer_inside = false;
                scene.pointer_left();
            }
            None => {}
        }
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                scene.clicked(pos.x - origin.x, pos.y - origin.y);
            }
        }

        let opacity = self.opacity();
        let mut surface = EguiSurface::new(&painter, origin, opacity);
        self.scene.as_scene().frame(now, &mut surface);
    }
}

fn build_scene(config: &FieldConfig, backdrop: Backdrop, theme: Theme, size: (f32, f32)) -> ActiveScene {
    match backdrop {
        Backdrop::Molecule => {
            ActiveScene::Molecule(ParticleField::new(config.clone(), theme, size.0, size.1))
        }
        Backdrop::Drift(intensity) => ActiveScene::Drift(DriftField::new(
            intensity,
            ThemeColors::for_theme(theme).highlight,
            size.0,
            size.1,
        )),
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.fps_counter.tick(now_millis());

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.render_header(ui, ctx);
        });

        if self.show_settings {
            self.render_settings(ctx);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(visuals::background(self.theme)))
            .show(ctx, |ui| {
                self.render_backdrop(ui);
            });

        // Continuous animation
        ctx.request_repaint();
    }
}
