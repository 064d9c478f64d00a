//! Phrase cycler - rotates through phrases at a fixed interval

use super::EffectError;

/// Interval of the hero text-scramble rotation
pub const SCRAMBLE_INTERVAL_MS: f64 = 3000.0;

#[derive(Clone, Debug)]
pub struct PhraseCycler {
    phrases: Vec<String>,
    interval_ms: f64,
    index: usize,
    next_at: Option<f64>,
}

impl PhraseCycler {
    pub fn new(phrases: Vec<String>, interval_ms: f64) -> Result<Self, EffectError> {
        if phrases.is_empty() {
            return Err(EffectError::Empty("phrase cycler"));
        }
        Ok(Self::from_non_empty(phrases, interval_ms))
    }

    /// Caller guarantees `phrases` is non-empty
    pub(super) fn from_non_empty(phrases: Vec<String>, interval_ms: f64) -> Self {
        debug_assert!(!phrases.is_empty());
        Self {
            phrases,
            interval_ms,
            index: 0,
            next_at: None,
        }
    }

    pub fn current(&self) -> &str {
        &self.phrases[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.phrases.len();
    }

    /// Catch up to clock time `now_ms`. Returns whether the phrase changed.
    pub fn update(&mut self, now_ms: f64) -> bool {
        let mut next_at = self.next_at.unwrap_or(now_ms + self.interval_ms);
        let before = self.index;
        if self.interval_ms > 0.0 {
            while now_ms >= next_at {
                self.advance();
                next_at += self.interval_ms;
            }
        }
        self.next_at = Some(next_at);
        self.index != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycler(interval: f64) -> PhraseCycler {
        PhraseCycler::new(vec!["one".into(), "two".into(), "three".into()], interval).unwrap()
    }

    #[test]
    fn rotates_and_wraps() {
        let mut c = cycler(SCRAMBLE_INTERVAL_MS);
        assert_eq!(c.current(), "one");
        c.advance();
        c.advance();
        assert_eq!(c.current(), "three");
        c.advance();
        assert_eq!(c.current(), "one");
    }

    #[test]
    fn update_steps_once_per_interval() {
        let mut c = cycler(1500.0);
        assert!(!c.update(0.0));
        assert!(!c.update(1499.0));
        assert!(c.update(1500.0));
        assert_eq!(c.current(), "two");
        // Two intervals elapsed at once
        c.update(4500.0);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn zero_interval_never_spins() {
        let mut c = cycler(0.0);
        assert!(!c.update(10.0));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(PhraseCycler::new(Vec::new(), 100.0).is_err());
    }
}
