//! Typewriter: types a word, holds it, deletes it, moves to the next

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::EffectError;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypewriterTiming {
    /// Delay before each typed character
    pub typing_ms: f64,
    /// Delay before each deleted character
    pub deleting_ms: f64,
    /// How long a finished word stays before deletion starts
    pub hold_ms: f64,
}

impl TypewriterTiming {
    /// Parse camelCase JSON options; omitted keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, EffectError> {
        let timing: TypewriterTiming =
            serde_json::from_str(json).map_err(|e| EffectError::Json(e.to_string()))?;
        timing.validate()?;
        Ok(timing)
    }

    /// Every delay must be finite and above zero
    pub fn validate(&self) -> Result<(), EffectError> {
        for (name, value) in [
            ("typingMs", self.typing_ms),
            ("deletingMs", self.deleting_ms),
            ("holdMs", self.hold_ms),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(EffectError::InvalidDelay { name, value });
            }
        }
        Ok(())
    }
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            typing_ms: 100.0,
            deleting_ms: 50.0,
            hold_ms: 1500.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    words: Vec<String>,
    timing: TypewriterTiming,
    looping: bool,
    word: usize,
    /// Characters of the current word on screen
    shown: usize,
    deleting: bool,
    finished: bool,
    /// Clock time of the next step, set on the first `update`
    next_at: Option<f64>,
}

impl Typewriter {
    pub fn new(words: Vec<String>, timing: TypewriterTiming, looping: bool) -> Result<Self, EffectError> {
        if words.is_empty() {
            return Err(EffectError::Empty("typewriter"));
        }
        timing.validate()?;
        Ok(Self {
            words,
            timing,
            looping,
            word: 0,
            shown: 0,
            deleting: false,
            finished: false,
            next_at: None,
        })
    }

    fn current_word(&self) -> &str {
        &self.words[self.word]
    }

    fn word_len(&self) -> usize {
        self.current_word().chars().count()
    }

    fn is_complete(&self) -> bool {
        self.shown >= self.word_len()
    }

    /// Visible text
    pub fn text(&self) -> &str {
        let word = self.current_word();
        match word.char_indices().nth(self.shown) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }

    pub fn word_index(&self) -> usize {
        self.word
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The cursor blinks only while a finished word is held
    pub fn cursor_blinking(&self) -> bool {
        !self.deleting && self.is_complete()
    }

    /// Delay before the next step, `None` once finished
    pub fn next_delay_ms(&self) -> Option<f64> {
        if self.finished {
            None
        } else if self.deleting {
            Some(self.timing.deleting_ms)
        } else if self.is_complete() {
            Some(self.timing.hold_ms)
        } else {
            Some(self.timing.typing_ms)
        }
    }

    /// Perform one step
    pub fn advance(&mut self) {
        if self.finished {
            return;
        }
        if !self.deleting && !self.is_complete() {
            self.shown += 1;
        } else if !self.deleting {
            if !self.looping && self.word + 1 == self.words.len() {
                self.finished = true;
                return;
            }
            self.deleting = true;
        } else if self.shown > 0 {
            self.shown -= 1;
        } else {
            self.deleting = false;
            self.word = (self.word + 1) % self.words.len();
            trace!(word = self.word, "Typewriter moved to next word");
        }
    }

    /// Catch up to clock time `now_ms`. Returns whether the text changed.
    pub fn update(&mut self, now_ms: f64) -> bool {
        let before = (self.word, self.shown);
        let mut next_at = match self.next_at {
            Some(t) => t,
            None => now_ms + self.next_delay_ms().unwrap_or(0.0),
        };
        while let Some(delay) = self.next_delay_ms() {
            if now_ms < next_at {
                break;
            }
            self.advance();
            next_at += self.next_delay_ms().unwrap_or(delay);
        }
        self.next_at = Some(next_at);
        (self.word, self.shown) != before
    }
}
