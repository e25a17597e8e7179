//! Human-typing simulation.
//!
//! A [`Typist`] expands a string into one timeline event per character, each
//! charged its own delay. This is the principal source of timeline density:
//! players use the resulting inter-event gaps to drive cursor and typing
//! animation, so the per-character granularity must be reproduced exactly.

use crate::recording::timeline::{Timeline, TimelineError};

/// Default per-character delay, in seconds.
pub const DEFAULT_CHAR_DELAY: f64 = 0.05;

/// Types text onto a [`Timeline`] at a fixed per-character pace.
#[derive(Debug, Clone, Copy)]
pub struct Typist {
    delay: f64,
}

impl Typist {
    /// A typist with the given per-character delay, in seconds.
    pub fn new(delay: f64) -> Self {
        Self { delay }
    }

    /// The configured per-character delay, in seconds.
    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// Type `text` onto `timeline`, one output event per character.
    ///
    /// Contributes exactly `text.chars().count()` events and advances the
    /// virtual clock by `count × delay`. An empty string records nothing and
    /// advances nothing. The delay is validated before any character lands,
    /// so an invalid typist never partially mutates the timeline.
    pub fn type_text(&self, timeline: &mut Timeline, text: &str) -> Result<(), TimelineError> {
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(TimelineError::InvalidDelay { delay: self.delay });
        }

        for c in text.chars() {
            timeline.write(c.to_string(), self.delay)?;
        }

        Ok(())
    }
}

impl Default for Typist {
    fn default() -> Self {
        Self::new(DEFAULT_CHAR_DELAY)
    }
}
