//! Bindings for the theme toggle and the timed text effects

use tracing::{debug, warn};
use wasm_bindgen::prelude::*;

use super::window;
use crate::effects::cycler::SCRAMBLE_INTERVAL_MS;
use crate::effects::{LoadingScreen, PhraseCycler, Reveal, Typewriter, TypewriterTiming};
use crate::theme::Theme;
use crate::time::now_millis;

const THEME_KEY: &str = "theme";
const DARK_CLASS: &str = "dark";

/// Light/dark switch persisted in `localStorage`
#[wasm_bindgen]
pub struct ThemeToggle {
    theme: Theme,
}

#[wasm_bindgen]
impl ThemeToggle {
    /// Resolve the theme from storage or the system color scheme and apply it
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ThemeToggle, JsValue> {
        let window = window()?;
        let stored = window
            .local_storage()?
            .and_then(|s| s.get_item(THEME_KEY).ok().flatten());
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")?
            .is_some_and(|m| m.matches());

        let theme = Theme::resolve(stored.as_deref(), prefers_dark);
        debug!(%theme, stored = ?stored, prefers_dark, "Theme resolved");
        apply_theme(theme)?;
        Ok(Self { theme })
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Flip the theme; returns whether it is now dark
    pub fn toggle(&mut self) -> Result<bool, JsValue> {
        self.theme = self.theme.toggle();
        apply_theme(self.theme)?;
        Ok(self.theme.is_dark())
    }

    pub fn aria_label(&self) -> String {
        match self.theme {
            Theme::Dark => "Switch to light mode".into(),
            Theme::Light => "Switch to dark mode".into(),
        }
    }
}

fn apply_theme(theme: Theme) -> Result<(), JsValue> {
    let window = window()?;
    let root = window
        .document()
        .and_then(|d| d.document_element())
        .ok_or_else(|| JsValue::from_str("No document element"))?;

    let classes = root.class_list();
    match theme {
        Theme::Dark => classes.add_1(DARK_CLASS)?,
        Theme::Light => classes.remove_1(DARK_CLASS)?,
    }

    match window.local_storage()? {
        Some(storage) => storage.set_item(THEME_KEY, theme.as_str())?,
        None => warn!("localStorage unavailable, theme not persisted"),
    }
    Ok(())
}

/// Typewriter text driven by the page clock.
/// Call `tick` from a timer or animation frame and re-render on `true`.
#[wasm_bindgen]
pub struct TypewriterText {
    inner: Typewriter,
}

#[wasm_bindgen]
impl TypewriterText {
    /// `timing` is a plain object with `typingMs`, `deletingMs` and `holdMs`
    /// (or `undefined` for the defaults)
    #[wasm_bindgen(constructor)]
    pub fn new(
        words: Vec<String>,
        looping: Option<bool>,
        timing: JsValue,
    ) -> Result<TypewriterText, JsValue> {
        let timing = if timing.is_undefined() || timing.is_null() {
            TypewriterTiming::default()
        } else {
            let json: String = js_sys::JSON::stringify(&timing)?.into();
            TypewriterTiming::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        let inner = Typewriter::new(words, timing, looping.unwrap_or(true))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }

    pub fn tick(&mut self) -> bool {
        self.inner.update(now_millis())
    }

    pub fn text(&self) -> String {
        self.inner.text().to_string()
    }

    pub fn cursor_blinking(&self) -> bool {
        self.inner.cursor_blinking()
    }
}

/// Loading splash state; poll with `tick`
#[wasm_bindgen]
pub struct LoadingSplash {
    inner: LoadingScreen,
}

impl Default for LoadingSplash {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl LoadingSplash {
    #[wasm_bindgen(constructor)]
    pub fn new() -> LoadingSplash {
        Self {
            inner: LoadingScreen::new(),
        }
    }

    pub fn tick(&mut self) {
        self.inner.update(now_millis());
    }

    pub fn progress(&self) -> u8 {
        self.inner.progress()
    }

    pub fn caption(&self) -> String {
        self.inner.caption().to_string()
    }

    pub fn overlay_visible(&self) -> bool {
        self.inner.overlay_visible()
    }

    pub fn content_revealed(&self) -> bool {
        self.inner.content_revealed(now_millis())
    }
}

/// Rotating hero phrase; swap the displayed text when `tick` returns true
#[wasm_bindgen]
pub struct PhraseRotator {
    inner: PhraseCycler,
}

#[wasm_bindgen]
impl PhraseRotator {
    #[wasm_bindgen(constructor)]
    pub fn new(phrases: Vec<String>, interval_ms: Option<f64>) -> Result<PhraseRotator, JsValue> {
        let inner = PhraseCycler::new(phrases, interval_ms.unwrap_or(SCRAMBLE_INTERVAL_MS))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }

    pub fn tick(&mut self) -> bool {
        self.inner.update(now_millis())
    }

    pub fn current(&self) -> String {
        self.inner.current().to_string()
    }
}

/// Scroll-reveal flag; feed it `IntersectionObserver` ratios
#[wasm_bindgen]
pub struct ScrollReveal {
    inner: Reveal,
}

#[wasm_bindgen]
impl ScrollReveal {
    /// `section` selects the one-shot preset with a timed fallback
    #[wasm_bindgen(constructor)]
    pub fn new(threshold: Option<f32>, trigger_once: Option<bool>, section: Option<bool>) -> ScrollReveal {
        let inner = if section.unwrap_or(false) {
            Reveal::section()
        } else {
            Reveal::new(
                threshold.unwrap_or(crate::effects::reveal::DEFAULT_THRESHOLD),
                trigger_once.unwrap_or(true),
            )
        };
        Self { inner }
    }

    pub fn observe(&mut self, ratio: f32) -> bool {
        self.inner.observe(ratio)
    }

    pub fn tick(&mut self) -> bool {
        self.inner.update(now_millis())
    }

    pub fn is_visible(&self) -> bool {
        self.inner.is_visible()
    }
}
