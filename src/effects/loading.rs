//! Loading splash: eased progress counter, rotating caption, delayed dismissal

use tracing::debug;

use super::cycler::PhraseCycler;

pub const PROGRESS_INTERVAL_MS: f64 = 100.0;
/// Pause at 100% before the splash is dismissed
pub const COMPLETE_DELAY_MS: f64 = 800.0;
/// Page content fades in after this long even if the splash is still up
pub const CONTENT_REVEAL_MS: f64 = 2500.0;
pub const CAPTION_INTERVAL_MS: f64 = 1500.0;
pub const CAPTIONS: [&str; 5] = ["Developer", "Designer", "Creator", "Problem Solver", "Innovator"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingPhase {
    Loading,
    /// Reached 100%, waiting out the completion delay
    Settling,
    Complete,
}

/// Next progress value: large steps early, single steps near the end
pub fn next_progress(progress: u8) -> u8 {
    let increment = ((100 - progress.min(100)) / 10).max(1);
    progress.saturating_add(increment).min(100)
}

#[derive(Clone, Debug)]
pub struct LoadingScreen {
    progress: u8,
    phase: LoadingPhase,
    started_at: Option<f64>,
    next_step_at: f64,
    complete_at: f64,
    caption: PhraseCycler,
}

impl Default for LoadingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingScreen {
    pub fn new() -> Self {
        let captions = CAPTIONS.iter().map(|s| s.to_string()).collect();
        Self {
            progress: 0,
            phase: LoadingPhase::Loading,
            started_at: None,
            next_step_at: 0.0,
            complete_at: f64::INFINITY,
            caption: PhraseCycler::from_non_empty(captions, CAPTION_INTERVAL_MS),
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    pub fn caption(&self) -> &str {
        self.caption.current()
    }

    /// Whether the splash overlay is still shown
    pub fn overlay_visible(&self) -> bool {
        self.phase != LoadingPhase::Complete
    }

    /// Page content is revealed on completion or after [`CONTENT_REVEAL_MS`],
    /// whichever comes first
    pub fn content_revealed(&self, now_ms: f64) -> bool {
        let elapsed = self.started_at.map_or(0.0, |t| now_ms - t);
        self.phase == LoadingPhase::Complete || elapsed >= CONTENT_REVEAL_MS
    }

    /// Catch up to clock time `now_ms`. The first call starts the clock.
    pub fn update(&mut self, now_ms: f64) {
        if self.started_at.is_none() {
            self.started_at = Some(now_ms);
            self.next_step_at = now_ms + PROGRESS_INTERVAL_MS;
        }

        while self.phase == LoadingPhase::Loading && now_ms >= self.next_step_at {
            self.progress = next_progress(self.progress);
            if self.progress == 100 {
                self.phase = LoadingPhase::Settling;
                self.complete_at = self.next_step_at + COMPLETE_DELAY_MS;
                debug!(at_ms = self.next_step_at, "Loading reached 100%");
            }
            self.next_step_at += PROGRESS_INTERVAL_MS;
        }

        if self.phase == LoadingPhase::Settling && now_ms >= self.complete_at {
            self.phase = LoadingPhase::Complete;
            debug!(at_ms = now_ms, "Loading screen complete");
        }

        if self.phase != LoadingPhase::Complete {
            self.caption.update(now_ms);
        }
    }
}
