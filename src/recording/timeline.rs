//! Virtual-clock event timeline.
//!
//! A [`Timeline`] owns a monotonically non-decreasing virtual clock and an
//! append-only log of output events. Delays are pure clock arithmetic; no
//! wall-clock time passes while a timeline is built, which is what makes
//! recordings reproducible.

use tracing::trace;

use crate::cast::Event;

/// Control sequence recorded by [`Timeline::clear_screen`]: erase the whole
/// screen and move the cursor home.
pub const CLEAR_AND_HOME: &str = "\x1b[2J\x1b[H";

/// Errors from timeline build operations.
///
/// The clock is a monotonic invariant, so anything that could move it
/// backwards (or poison it with a NaN) is rejected before any mutation.
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("write delay must be a finite, non-negative number of seconds (got {delay})")]
    InvalidDelay { delay: f64 },

    #[error("pause duration must be a finite, non-negative number of seconds (got {duration})")]
    InvalidDuration { duration: f64 },
}

/// Monotonic virtual clock plus an append-only sequence of output events.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    clock: f64,
    events: Vec<Event>,
}

impl Timeline {
    /// Create an empty timeline with the clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an output event carrying `text`.
    ///
    /// A positive `delay` advances the clock *before* the event is recorded:
    /// the text becomes visible only after its own delay has elapsed. Players
    /// derive all pacing from this, so the ordering is part of the contract.
    pub fn write(&mut self, text: impl Into<String>, delay: f64) -> Result<(), TimelineError> {
        if !delay.is_finite() || delay < 0.0 {
            return Err(TimelineError::InvalidDelay { delay });
        }

        if delay > 0.0 {
            self.clock += delay;
        }

        let text = text.into();
        trace!(time = self.clock, bytes = text.len(), "timeline write");
        self.events.push(Event::output(self.clock, text));

        Ok(())
    }

    /// Advance the clock without recording anything.
    ///
    /// Produces a visible gap in the replay with no corresponding output.
    pub fn pause(&mut self, duration: f64) -> Result<(), TimelineError> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(TimelineError::InvalidDuration { duration });
        }

        self.clock += duration;
        trace!(time = self.clock, "timeline pause");

        Ok(())
    }

    /// Record a clear-screen event at the current clock value, zero delay.
    pub fn clear_screen(&mut self) -> Result<(), TimelineError> {
        self.write(CLEAR_AND_HOME, 0.0)
    }

    /// Current value of the virtual clock, in seconds.
    pub fn elapsed(&self) -> f64 {
        self.clock
    }

    /// Events recorded so far, in emission order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consume the timeline, yielding the event log.
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}
