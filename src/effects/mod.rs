//! Timed text and visibility effects used around the backdrop
//!
//! Each effect is a small state machine advanced by the caller's clock, so the
//! same code runs under browser timers, the CLI and tests.

pub mod cycler;
pub mod loading;
pub mod reveal;
pub mod typewriter;

use thiserror::Error;

pub use cycler::PhraseCycler;
pub use loading::{LoadingPhase, LoadingScreen};
pub use reveal::Reveal;
pub use typewriter::{Typewriter, TypewriterTiming};

#[derive(Debug, Error, PartialEq)]
pub enum EffectError {
    #[error("{0} needs at least one entry")]
    Empty(&'static str),
    #[error("{name} must be a positive number of milliseconds, got {value}")]
    InvalidDelay { name: &'static str, value: f64 },
    #[error("invalid timing options: {0}")]
    Json(String),
}
