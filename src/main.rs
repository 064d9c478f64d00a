//! Headless runner for the backdrops: steps a scene at ~60 Hz onto a
//! recording surface and logs what it would draw
//!
//! Run with: cargo run --bin molecule-cli --features cli

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use molecule_bg::core::{DrawList, DriftField, FieldConfig, Intensity, ParticleField, Scene};
    use molecule_bg::theme::{Theme, ThemeColors};
    use molecule_bg::time::{now_millis, FpsCounter};
    use std::time::Duration;
    use tracing::{info, warn};
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,molecule_bg=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
        match std::env::var(key) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(key, value = %raw, "Ignoring unparsable value");
                default
            }),
            Err(_) => default,
        }
    }

    let width: f32 = env_or("MOLECULE_WIDTH", 1280.0);
    let height: f32 = env_or("MOLECULE_HEIGHT", 800.0);
    let frames: u64 = env_or("MOLECULE_FRAMES", 600);
    let seed: Option<u64> = std::env::var("MOLECULE_SEED").ok().and_then(|s| s.parse().ok());
    let variant = std::env::var("MOLECULE_VARIANT").unwrap_or_else(|_| "molecule".to_string());

    let config = match std::env::var("MOLECULE_CONFIG") {
        Ok(path) => {
            info!(path = %path, "Loading field config");
            FieldConfig::from_json(&std::fs::read_to_string(&path)?)?
        }
        Err(_) => FieldConfig::default(),
    };

    let mut scene: Box<dyn Scene> = match variant.as_str() {
        "drift" => {
            let intensity = std::env::var("MOLECULE_INTENSITY")
                .ok()
                .and_then(|s| Intensity::parse(&s))
                .unwrap_or_default();
            let color = ThemeColors::for_theme(Theme::Dark).highlight;
            Box::new(match seed {
                Some(seed) => DriftField::with_seed(intensity, color, width, height, seed),
                None => DriftField::new(intensity, color, width, height),
            })
        }
        "molecule" => Box::new(match seed {
            Some(seed) => ParticleField::with_seed(config, Theme::Dark, width, height, seed),
            None => ParticleField::new(config, Theme::Dark, width, height),
        }),
        other => return Err(format!("Unknown MOLECULE_VARIANT {:?}", other).into()),
    };

    let interactive = scene.is_interactive();
    info!(variant = %variant, width, height, frames, ?seed, interactive, "Starting headless run");

    let mut surface = DrawList::new();
    let mut fps = FpsCounter::new();
    let mut frame_interval = tokio::time::interval(Duration::from_millis(16));
    let mut stats_interval = tokio::time::interval(Duration::from_secs(5));
    let mut frame = 0u64;
    let (cx, cy) = (width / 2.0, height / 2.0);
    let orbit = width.min(height) / 3.0;

    loop {
        tokio::select! {
            _ = frame_interval.tick() => {
                let now = now_millis();
                if interactive {
                    // Pointer circles the centre, clicking every 2 seconds
                    let angle = frame as f32 / 90.0;
                    let (x, y) = (cx + orbit * angle.cos(), cy + orbit * angle.sin());
                    scene.pointer_moved(x, y, now);
                    if frame % 120 == 119 {
                        scene.clicked(x, y);
                    }
                }

                surface.reset();
                scene.frame(now, &mut surface);
                fps.tick(now);
                frame += 1;
                if frames != 0 && frame >= frames {
                    break;
                }
            }
            _ = stats_interval.tick() => {
                info!(
                    frame,
                    draws = surface.len(),
                    circles = surface.filled_circles().count(),
                    orbits = surface.stroked_circles().count(),
                    lines = surface.lines().count(),
                    fps = format!("{:.1}", fps.fps()),
                    "stats"
                );
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }
    }

    if interactive {
        scene.pointer_left();
    }
    info!(frames = frame, draws = surface.len(), "Run finished");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
