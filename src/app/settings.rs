//! Settings sidebar - edits a draft config, applied by rebuilding the backdrop

use eframe::egui;

use super::{Backdrop, PreviewApp};
use crate::core::Intensity;

impl PreviewApp {
    pub(crate) fn render_settings(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("settings")
            .default_width(240.0)
            .min_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                let group_frame = egui::Frame::new()
                    .stroke(egui::Stroke::new(1.0, ui.visuals().weak_text_color()))
                    .corner_radius(4.0)
                    .inner_margin(6.0);

                group_frame.show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new("Backdrop:").weak());
                    ui.radio_value(&mut self.backdrop, Backdrop::Molecule, "Molecule");
                    for (intensity, label) in [
                        (Intensity::Light, "Drift (light)"),
                        (Intensity::Medium, "Drift (medium)"),
                        (Intensity::Strong, "Drift (strong)"),
                    ] {
                        ui.radio_value(&mut self.backdrop, Backdrop::Drift(intensity), label);
                    }
                });

                ui.add_space(8.0);

                group_frame.show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new("Molecule:").weak());

                    let draft = &mut self.draft;
                    ui.add(egui::Slider::new(&mut draft.node_count, 0..=300).text("Nodes"));
                    let speed = ui.add(
                        egui::Slider::new(&mut draft.speed, 0.1..=5.0)
                            .logarithmic(true)
                            .clamping(egui::SliderClamping::Always)
                            .text("Speed"),
                    );
                    if speed.double_clicked() {
                        draft.speed = 1.0;
                    }
                    ui.add(egui::Slider::new(&mut draft.opacity, 0.0..=1.0).text("Opacity"));

                    ui.checkbox(&mut draft.colorful, "Colorful");
                    ui.checkbox(&mut draft.interactive, "Interactive");
                    ui.checkbox(&mut draft.hub_nodes, "Hub nodes");
                    ui.add_enabled(
                        draft.interactive,
                        egui::Checkbox::new(&mut draft.particle_bursts, "Particle bursts"),
                    );
                });

                ui.add_space(8.0);
                if ui.button("Apply").clicked() {
                    self.rebuild();
                }
            });
    }
}
