//! Browser front-end: canvas backdrops and effect bindings for the host page

mod canvas;
mod mount;
mod widgets;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

use crate::core::{DriftField, FieldConfig, Intensity, ParticleField, Rgba};
use crate::theme::{Theme, ThemeColors};
use mount::Mount;

pub use widgets::{LoadingSplash, PhraseRotator, ScrollReveal, ThemeToggle, TypewriterText};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    // Initialize tracing for browser console
    tracing_wasm::set_as_global_default();
}

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

pub(crate) fn viewport_size() -> Result<(f32, f32), JsValue> {
    let window = window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width as f32, height as f32))
}

/// Theme currently applied to the page (`dark` class on `<html>`)
pub(crate) fn document_theme() -> Theme {
    let dark = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false);
    if dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

fn find_canvas(canvas_id: &str) -> Result<HtmlCanvasElement, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("No element with id {:?}", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("Element {:?} is not a canvas", canvas_id)))
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Full-page molecule backdrop
#[wasm_bindgen]
pub struct MoleculeBackground {
    mount: Option<Mount<ParticleField>>,
}

#[wasm_bindgen]
impl MoleculeBackground {
    /// Mount on the canvas with id `canvas_id`. `options` is a plain object
    /// with camelCase keys (or `undefined`); omitted keys take their defaults.
    pub fn mount(canvas_id: &str, options: JsValue) -> Result<MoleculeBackground, JsValue> {
        let config = if options.is_undefined() || options.is_null() {
            FieldConfig::default()
        } else {
            let json: String = js_sys::JSON::stringify(&options)?.into();
            FieldConfig::from_json(&json).map_err(to_js)?
        };
        let canvas = find_canvas(canvas_id)?;
        canvas
            .style()
            .set_property("opacity", &config.opacity.to_string())?;

        let (width, height) = viewport_size()?;
        let field = ParticleField::new(config, document_theme(), width, height);
        Ok(Self {
            mount: Mount::start(canvas, field)?,
        })
    }

    /// False when the canvas had no 2D context or after `unmount`
    pub fn is_running(&self) -> bool {
        self.mount.as_ref().is_some_and(|m| m.is_running())
    }

    /// Re-read the page theme and recolor default node/line colors
    pub fn sync_theme(&self) {
        if let Some(mount) = &self.mount {
            mount.scene().borrow_mut().set_theme(document_theme());
        }
    }

    pub fn burst_count(&self) -> usize {
        self.mount
            .as_ref()
            .map_or(0, |m| m.scene().borrow().bursts().len())
    }

    pub fn unmount(&mut self) {
        if let Some(mut mount) = self.mount.take() {
            mount.unmount();
        }
    }
}

/// Section backdrop of slowly drifting, wrap-around particles
#[wasm_bindgen]
pub struct DriftBackground {
    mount: Option<Mount<DriftField>>,
}

#[wasm_bindgen]
impl DriftBackground {
    /// `intensity` is `light`, `medium` (default) or `strong`; `color` is any
    /// CSS color the backdrop understands, defaulting to the site highlight
    pub fn mount(
        canvas_id: &str,
        intensity: Option<String>,
        color: Option<String>,
    ) -> Result<DriftBackground, JsValue> {
        let intensity = match intensity.as_deref() {
            Some(s) => Intensity::parse(s)
                .ok_or_else(|| JsValue::from_str(&format!("Unknown intensity {:?}", s)))?,
            None => Intensity::default(),
        };
        let color = match color {
            Some(c) => c.parse::<Rgba>().map_err(to_js)?,
            None => ThemeColors::for_theme(document_theme()).highlight,
        };

        let canvas = find_canvas(canvas_id)?;
        let (width, height) = viewport_size()?;
        let field = DriftField::new(intensity, color, width, height);
        Ok(Self {
            mount: Mount::start(canvas, field)?,
        })
    }

    pub fn is_running(&self) -> bool {
        self.mount.as_ref().is_some_and(|m| m.is_running())
    }

    pub fn unmount(&mut self) {
        if let Some(mut mount) = self.mount.take() {
            mount.unmount();
        }
    }
}
