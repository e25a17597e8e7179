//! Demo recording sessions.
//!
//! A [`Recorder`] owns one recording: fixed terminal dimensions, session
//! metadata (title, header environment) and the [`Timeline`] being built.
//! Scripts drive it with `write` / `type_text` / `pause` / `clear_screen`,
//! then serialize the finished session exactly once with [`Recorder::save`].
//!
//! # Module layout
//!
//! - [`timeline`]: virtual clock and the append-only event log
//! - [`typing`]: per-character typing simulation on top of the timeline
//!
//! # Usage
//!
//! ```no_run
//! use tdr::Recorder;
//!
//! let mut rec = Recorder::new(80, 24)?.with_title("Quick tour");
//! rec.write("$ ", 0.0)?;
//! rec.type_text("echo hello", 0.05)?;
//! rec.write("\r\nhello\r\n", 0.3)?;
//! rec.save("tour.cast")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod timeline;
pub mod typing;

use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::debug;

use crate::cast::{CastFile, Event, Header, V2Encoder};

pub use timeline::{Timeline, TimelineError, CLEAR_AND_HOME};
pub use typing::{Typist, DEFAULT_CHAR_DELAY};

/// Errors from recorder construction.
#[derive(Debug, thiserror::Error)]
pub enum RecorderError {
    #[error("terminal dimensions must be positive (got {width}x{height})")]
    InvalidDimensions { width: u16, height: u16 },
}

/// One in-memory demo recording session.
///
/// Dimensions are fixed at construction; the event log is append-only while
/// the script runs and is never mutated by serialization, so a built session
/// can be written more than once (only the header wall-clock differs).
#[derive(Debug, Clone)]
pub struct Recorder {
    width: u16,
    height: u16,
    title: String,
    env: BTreeMap<String, String>,
    timeline: Timeline,
}

impl Recorder {
    /// New session with the given terminal dimensions and empty metadata.
    pub fn new(width: u16, height: u16) -> Result<Self, RecorderError> {
        if width == 0 || height == 0 {
            return Err(RecorderError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            title: String::new(),
            env: BTreeMap::new(),
            timeline: Timeline::new(),
        })
    }

    /// Set the recording title carried in the header.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the header environment map.
    pub fn with_env(mut self, env: BTreeMap<String, String>) -> Self {
        self.env = env;
        self
    }

    /// Append an output event, charging `delay` seconds first.
    pub fn write(&mut self, text: impl Into<String>, delay: f64) -> Result<(), TimelineError> {
        self.timeline.write(text, delay)
    }

    /// Type `text` one character at a time at `char_delay` seconds per char.
    pub fn type_text(&mut self, text: &str, char_delay: f64) -> Result<(), TimelineError> {
        Typist::new(char_delay).type_text(&mut self.timeline, text)
    }

    /// Advance the virtual clock without recording output.
    pub fn pause(&mut self, duration: f64) -> Result<(), TimelineError> {
        self.timeline.pause(duration)
    }

    /// Record a clear-screen-and-home event.
    pub fn clear_screen(&mut self) -> Result<(), TimelineError> {
        self.timeline.clear_screen()
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    /// Current virtual-clock value: the replay duration so far, in seconds.
    pub fn elapsed(&self) -> f64 {
        self.timeline.elapsed()
    }

    /// Events recorded so far, in emission order.
    pub fn events(&self) -> &[Event] {
        self.timeline.events()
    }

    /// Number of recorded events.
    pub fn event_count(&self) -> usize {
        self.timeline.len()
    }

    /// Build the v2 header for this session.
    ///
    /// `timestamp` is the wall-clock unix time of the serialization pass,
    /// which is why it is a parameter rather than captured at construction.
    pub fn header(&self, timestamp: i64) -> Header {
        Header::new(
            self.width,
            self.height,
            timestamp,
            self.title.clone(),
            self.env.clone(),
        )
    }

    /// Copy the session into a standalone [`CastFile`].
    pub fn to_cast(&self, timestamp: i64) -> CastFile {
        CastFile {
            header: self.header(timestamp),
            events: self.timeline.events().to_vec(),
        }
    }

    /// Serialize the session to a writer: header line, then one line per
    /// event in stored order. Single streaming pass, no mutation.
    pub fn write_to<W: Write>(&self, writer: &mut W, timestamp: i64) -> Result<()> {
        let mut encoder = V2Encoder::new();

        writer
            .write_all(&encoder.header(&self.header(timestamp)))
            .context("Failed to write header")?;

        for event in self.timeline.events() {
            writer.write_all(&encoder.event(event))?;
        }

        Ok(())
    }

    /// Write the session to `path`, capturing the header timestamp now.
    ///
    /// Partially written files are possible on failure, but the failure
    /// always propagates with the target path attached.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let timestamp = Utc::now().timestamp();

        let file =
            fs::File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
        let mut writer = BufWriter::new(file);

        self.write_to(&mut writer, timestamp)
            .with_context(|| format!("Failed to write recording: {:?}", path))?;
        writer
            .flush()
            .with_context(|| format!("Failed to write recording: {:?}", path))?;

        debug!(
            path = %path.display(),
            events = self.event_count(),
            duration = self.elapsed(),
            "saved recording"
        );

        Ok(())
    }
}
