//! Native preview window for the molecule backdrop
//!
//! Run with: cargo run --bin molecule-preview --features preview

use molecule_bg::app::{Backdrop, PreviewApp};
use molecule_bg::core::{FieldConfig, Intensity};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,molecule_bg=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = match std::env::var("MOLECULE_CONFIG") {
        Ok(path) => {
            info!(path = %path, "Loading field config");
            FieldConfig::from_json(&std::fs::read_to_string(&path)?)?
        }
        Err(_) => FieldConfig::default(),
    };
    let backdrop = match std::env::var("MOLECULE_VARIANT").as_deref() {
        Ok("drift") => {
            let intensity = std::env::var("MOLECULE_INTENSITY")
                .ok()
                .and_then(|s| Intensity::parse(&s))
                .unwrap_or_default();
            Backdrop::Drift(intensity)
        }
        _ => Backdrop::Molecule,
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Molecule backdrop"),
        ..Default::default()
    };

    eframe::run_native(
        "molecule-preview",
        options,
        Box::new(move |cc| Ok(Box::new(PreviewApp::new(cc, config, backdrop)))),
    )?;
    Ok(())
}
