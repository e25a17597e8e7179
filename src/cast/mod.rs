//! asciicast v2 format writer and parser.
//!
//! Reference: https://docs.asciinema.org/manual/asciicast/v2/
//!
//! A recording is a single JSON object header line followed by one JSON array
//! per event: `[time, "o", data]` with `time` in absolute seconds since the
//! start of the recording. This module provides the types for both directions:
//! the recorder serializes through [`V2Encoder`], and [`CastFile::parse`]
//! reads an artifact back for verification and tooling.

mod v2;

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

pub use v2::V2Encoder;

/// The asciicast header version this crate reads and writes.
pub const FORMAT_VERSION: u8 = 2;

/// asciicast format version.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Version {
    Two,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::Two => write!(f, "2"),
        }
    }
}

/// asciicast v2 header: the first line of a recording.
///
/// Serialized field order follows declaration order and is part of the
/// on-disk contract: version, width, height, timestamp, title, env. `env`
/// is a `BTreeMap` so repeated serializations are byte-identical.
///
/// On the read side only `version`, `width` and `height` are required;
/// recordings from other producers may omit the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub version: u8,
    pub width: u16,
    pub height: u16,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl Header {
    /// Header for a recording with the given dimensions and metadata.
    ///
    /// `timestamp` is the wall-clock unix time of serialization, not of any
    /// point during the build phase.
    pub fn new(
        width: u16,
        height: u16,
        timestamp: i64,
        title: impl Into<String>,
        env: BTreeMap<String, String>,
    ) -> Self {
        Self {
            version: FORMAT_VERSION,
            width,
            height,
            timestamp,
            title: title.into(),
            env,
        }
    }
}

/// Event type codes.
///
/// The recorder only ever produces terminal output, so the output channel
/// (`"o"`) is the whole vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    /// Output (data written to the terminal)
    Output, // "o"
}

impl EventType {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "o" => Some(EventType::Output),
            _ => None,
        }
    }

    pub fn to_code(&self) -> &'static str {
        match self {
            EventType::Output => "o",
        }
    }
}

/// One timestamped unit of terminal output.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Seconds since the start of the recording.
    pub time: f64,
    /// Event type
    pub event_type: EventType,
    /// Payload bytes as UTF-8 text.
    pub data: String,
}

impl Event {
    pub fn new(time: f64, event_type: EventType, data: impl Into<String>) -> Self {
        Self {
            time,
            event_type,
            data: data.into(),
        }
    }

    pub fn output(time: f64, data: impl Into<String>) -> Self {
        Self::new(time, EventType::Output, data)
    }

    pub fn is_output(&self) -> bool {
        self.event_type == EventType::Output
    }

    /// Parse an event from a JSON line.
    pub fn from_json(line: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(line).context("Failed to parse event JSON")?;

        let arr = value.as_array().context("Event must be a JSON array")?;

        if arr.len() < 3 {
            bail!("Event array must have at least 3 elements");
        }

        let time = arr[0].as_f64().context("Event time must be a number")?;

        if time < 0.0 {
            bail!("Event time must be non-negative (got {})", time);
        }

        let code = arr[1].as_str().context("Event type must be a string")?;

        let event_type =
            EventType::from_code(code).with_context(|| format!("Unknown event type: {}", code))?;

        let data = arr[2]
            .as_str()
            .context("Event data must be a string")?
            .to_string();

        Ok(Event {
            time,
            event_type,
            data,
        })
    }

    /// Convert the event to its JSON line (no trailing newline).
    pub fn to_json(&self) -> String {
        serde_json::to_string(&serde_json::json!([
            self.time,
            self.event_type.to_code(),
            self.data
        ]))
        .unwrap()
    }
}

/// Complete asciicast recording: header plus events.
#[derive(Debug, Clone)]
pub struct CastFile {
    pub header: Header,
    pub events: Vec<Event>,
}

impl CastFile {
    /// Create an empty recording with the given header.
    pub fn new(header: Header) -> Self {
        Self {
            header,
            events: Vec::new(),
        }
    }

    /// Parse an asciicast v2 file from a path.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            fs::File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
        let reader = BufReader::new(file);

        Self::parse_reader(reader)
    }

    /// Parse an asciicast v2 file from a reader.
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        // First line is the header
        let header_line = lines
            .next()
            .context("File is empty")?
            .context("Failed to read header line")?;

        let header: Header =
            serde_json::from_str(&header_line).context("Failed to parse header")?;

        if header.version != FORMAT_VERSION {
            bail!(
                "Only asciicast v2 format is supported (got version {})",
                header.version
            );
        }

        // Remaining lines are events
        let mut events = Vec::new();
        for (line_num, line_result) in lines.enumerate() {
            let line =
                line_result.with_context(|| format!("Failed to read line {}", line_num + 2))?;

            if line.trim().is_empty() {
                continue;
            }

            let event = Event::from_json(&line)
                .with_context(|| format!("Failed to parse event on line {}", line_num + 2))?;
            events.push(event);
        }

        Ok(CastFile { header, events })
    }

    /// Parse from a string.
    pub fn parse_str(content: &str) -> Result<Self> {
        let reader = BufReader::new(content.as_bytes());
        Self::parse_reader(reader)
    }

    /// Write the recording to a path.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file =
            fs::File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;

        self.write_to(&mut file)
    }

    /// Write the recording to a writer, one record per line.
    ///
    /// This is a single forward pass: no record depends on a later one, so
    /// output can be streamed straight to the sink.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut encoder = V2Encoder::new();

        writer
            .write_all(&encoder.header(&self.header))
            .context("Failed to write header")?;

        for event in &self.events {
            writer.write_all(&encoder.event(event))?;
        }

        Ok(())
    }

    /// Render the whole recording to a string.
    pub fn to_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Time of the last event, in seconds.
    ///
    /// v2 times are absolute and non-decreasing, so this is the recording's
    /// replay duration.
    pub fn duration(&self) -> f64 {
        self.events.last().map(|e| e.time).unwrap_or(0.0)
    }
}

/// Encoder trait for asciicast formats.
pub trait Encoder {
    fn header(&mut self, header: &Header) -> Vec<u8>;
    fn event(&mut self, event: &Event) -> Vec<u8>;
}

impl Encoder for V2Encoder {
    fn header(&mut self, header: &Header) -> Vec<u8> {
        self.header(header)
    }

    fn event(&mut self, event: &Event) -> Vec<u8> {
        self.event(event)
    }
}

/// Create an encoder for the given version.
pub fn encoder(version: Version) -> Option<Box<dyn Encoder>> {
    match version {
        Version::Two => Some(Box::new(V2Encoder::new())),
    }
}
