//! Version string assembly.
//!
//! Dev builds append the short git commit and build date emitted by the
//! build script; builds with the `release` feature ship the bare crate
//! version for a clean string.

/// Full version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("TDR_BUILD_DATE"),
    ")"
);

/// Full version string shown by `--version`.
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
