//! Scroll reveal - visibility flag fed by intersection ratios

/// Default visible-area fraction that triggers a reveal
pub const DEFAULT_THRESHOLD: f32 = 0.1;
/// Sections force themselves visible after this long without an intersection
pub const SECTION_FALLBACK_MS: f64 = 800.0;

#[derive(Clone, Debug)]
pub struct Reveal {
    threshold: f32,
    trigger_once: bool,
    fallback_ms: Option<f64>,
    visible: bool,
    observed: bool,
    started_at: Option<f64>,
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, true)
    }
}

impl Reveal {
    pub fn new(threshold: f32, trigger_once: bool) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            trigger_once,
            fallback_ms: None,
            visible: false,
            observed: false,
            started_at: None,
        }
    }

    /// Page-section preset: one-shot with an 800ms fallback
    pub fn section() -> Self {
        Self::default().with_fallback(SECTION_FALLBACK_MS)
    }

    pub fn with_fallback(mut self, fallback_ms: f64) -> Self {
        self.fallback_ms = Some(fallback_ms);
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed an intersection ratio in `[0, 1]`; returns the new visibility
    pub fn observe(&mut self, ratio: f32) -> bool {
        let intersecting = ratio > 0.0 && ratio >= self.threshold;
        if intersecting {
            self.observed = true;
            self.visible = true;
        } else if !self.trigger_once {
            self.visible = false;
        }
        self.visible
    }

    /// Advance the fallback clock; the first call starts it
    pub fn update(&mut self, now_ms: f64) -> bool {
        let started = *self.started_at.get_or_insert(now_ms);
        if let Some(fallback) = self.fallback_ms {
            if !self.observed && now_ms - started >= fallback {
                self.visible = true;
            }
        }
        self.visible
    }
}
