//! Semantic color formatting for recorded output.
//!
//! Demo scripts refer to colors by name ("green", "bold", ...) and get back
//! text wrapped in the matching SGR escape sequence plus a trailing reset.
//! The palette is a fixed table; nothing here inspects or validates the text
//! being wrapped.

/// SGR escape sequences for the recording palette.
pub mod sgr {
    pub const RED: &str = "\x1b[0;31m";
    pub const GREEN: &str = "\x1b[0;32m";
    pub const YELLOW: &str = "\x1b[1;33m";
    pub const BLUE: &str = "\x1b[0;34m";
    pub const PURPLE: &str = "\x1b[0;35m";
    pub const CYAN: &str = "\x1b[0;36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Name → opening code table for [`colorize`].
const PALETTE: &[(&str, &str)] = &[
    ("red", sgr::RED),
    ("green", sgr::GREEN),
    ("yellow", sgr::YELLOW),
    ("blue", sgr::BLUE),
    ("purple", sgr::PURPLE),
    ("cyan", sgr::CYAN),
    ("bold", sgr::BOLD),
];

/// Look up the opening SGR code for a palette name.
pub fn lookup(name: &str) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, code)| *code)
}

/// Wrap `text` in the named color followed by a reset.
///
/// Unknown names get no opening code, but the reset suffix is appended
/// either way; `colorize(text, bad_name)` is `text` plus a trailing reset,
/// not a pass-through.
pub fn colorize(text: &str, name: &str) -> String {
    format!("{}{}{}", lookup(name).unwrap_or(""), text, sgr::RESET)
}

/// Whether the tool's own status output should use color.
///
/// Honors the NO_COLOR convention and skips color when stdout is not a TTY.
/// This gates only `tdr`'s messages to the user, never recorded content.
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// [`colorize`] for the tool's own output, downgraded to plain text when
/// color is disabled.
pub fn paint(text: &str, name: &str) -> String {
    if color_enabled() {
        colorize(text, name)
    } else {
        text.to_string()
    }
}
