//! Molecule backdrop - animated particle field for a portfolio page
//!
//! - `core`: platform-agnostic simulation (nodes, hubs, bursts, drift field)
//!   drawing onto any [`core::Surface`]
//! - `effects`: typewriter, phrase cycler, loading splash, scroll reveal
//! - `web` (wasm feature): canvas mount with animation loop and listeners
//! - `app` (preview feature): native egui preview window

pub mod core;
pub mod effects;
pub mod theme;
pub mod time;

#[cfg(feature = "preview")]
pub mod app;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod web;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub use web::{
    DriftBackground, LoadingSplash, MoleculeBackground, PhraseRotator, ScrollReveal, ThemeToggle,
    TypewriterText,
};
