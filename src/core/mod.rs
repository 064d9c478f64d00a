//! Platform-agnostic core - shared by the WASM front-end, CLI and preview

pub mod color;
pub mod config;
pub mod drift;
pub mod error;
pub mod field;
pub mod scene;
pub mod surface;

pub use color::Rgba;
pub use config::{FieldConfig, DEFAULT_PALETTE};
pub use drift::{DriftField, Intensity};
pub use error::ConfigError;
pub use field::{BurstParticle, Node, ParticleField, Satellite};
pub use scene::{listeners_for, FrameGate, ListenerKind, Scene};
pub use surface::{DrawCmd, DrawList, Glow, Paint, Point, Surface};
