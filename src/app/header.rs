//! Header bar with theme toggle, settings switch and frame stats

use eframe::egui;

use super::PreviewApp;

impl PreviewApp {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let (nodes, bursts) = self.counts();
        let status = self.status();

        ui.horizontal(|ui| {
            let settings_text = if self.show_settings { "Settings <<<" } else { "Settings >>>" };
            if ui.button(settings_text).clicked() {
                self.show_settings = !self.show_settings;
            }

            let theme_text = if self.theme.is_dark() { "Light mode" } else { "Dark mode" };
            if ui.button(theme_text).clicked() {
                self.set_theme(ctx, self.theme.toggle());
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("{:.0} FPS", self.fps_counter.fps()))
                        .weak()
                        .small(),
                );
                ui.separator();
                ui.label(egui::RichText::new(format!("{} bursts", bursts)).weak().small());
                ui.separator();
                ui.label(egui::RichText::new(format!("{} nodes", nodes)).weak().small());
                ui.separator();
                ui.label(egui::RichText::new(status).weak().small());
            });
        });
    }
}
