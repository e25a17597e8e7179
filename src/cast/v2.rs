//! asciicast v2 encoder.
//!
//! Produces the two record shapes of the format: the header object line and
//! `[time, "o", data]` event lines. v2 times are absolute seconds, so unlike
//! a delta-timed format the encoder carries no state between records.

use super::{Event, Header};

/// Encoder producing asciicast v2 lines, one `Vec<u8>` per record.
pub struct V2Encoder;

impl V2Encoder {
    pub fn new() -> Self {
        Self
    }

    /// Encode the header object as a single newline-terminated line.
    pub fn header(&mut self, header: &Header) -> Vec<u8> {
        let mut data = serde_json::to_string(header).unwrap().into_bytes();
        data.push(b'\n');

        data
    }

    /// Encode one event as a single newline-terminated line.
    pub fn event(&mut self, event: &Event) -> Vec<u8> {
        let mut data = event.to_json().into_bytes();
        data.push(b'\n');

        data
    }
}

impl Default for V2Encoder {
    fn default() -> Self {
        Self::new()
    }
}
