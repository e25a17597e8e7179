//! Terminal Demo Recorder (tdr) Library
//!
//! A Rust library for scripting terminal demos and saving them as
//! asciinema-compatible recordings.

pub mod cast;
pub mod cli;
pub mod config;
pub mod demo;
pub mod recording;
pub mod style;
pub mod version;

pub use cast::{CastFile, Event, EventType, Header};
pub use cli::Cli;
pub use config::Config;
pub use recording::{Recorder, Timeline, Typist};
