//! The built-in demo script.
//!
//! [`script`] drives a [`Recorder`] through a short product tour: scripted
//! commands typed character by character, simulated command output, scene
//! changes via clear-screen. The script only appends events; dimensions,
//! title and header environment stay whatever the caller configured.

use unicode_width::UnicodeWidthStr;

use crate::recording::{Recorder, TimelineError};
use crate::style::colorize;

const BANNER_WIDTH: usize = 60;
const RULE_WIDTH: usize = 50;

fn banner() -> String {
    "═".repeat(BANNER_WIDTH)
}

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

/// Center `text` in `width` columns by left padding. Display columns, not
/// bytes, so double-width characters center correctly.
fn centered(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((width - text_width) / 2), text)
}

/// Clear the screen and print a section header with an underline rule.
fn section(rec: &mut Recorder, title: &str) -> Result<(), TimelineError> {
    rec.clear_screen()?;
    rec.write(colorize(&format!("▶ {}\n", title), "blue"), 0.0)?;
    rec.write(format!("{}\n\n", rule()), 0.0)?;
    Ok(())
}

/// Show a shell prompt and type `cmd` at `delay` seconds per character.
fn prompt(rec: &mut Recorder, cmd: &str, delay: f64) -> Result<(), TimelineError> {
    rec.write(colorize("$ ", "cyan"), 0.0)?;
    rec.type_text(cmd, delay)?;
    rec.write("\n", 0.0)?;
    Ok(())
}

/// Animated "working" dots after a command.
fn spinner(rec: &mut Recorder, label: &str) -> Result<(), TimelineError> {
    rec.write(colorize(label, "cyan"), 0.0)?;
    for _ in 0..3 {
        rec.write(".", 0.0)?;
        rec.pause(0.3)?;
    }
    rec.write("\n\n", 0.0)?;
    Ok(())
}

/// Record the full tour onto `rec`, typing commands at `typing_delay`
/// seconds per character.
pub fn script(rec: &mut Recorder, typing_delay: f64) -> Result<(), TimelineError> {
    // Title screen
    rec.clear_screen()?;
    rec.write(format!("{}\n", banner()), 0.0)?;
    rec.write(
        colorize(
            &format!("{}\n", centered("tdr - Scripted Terminal Demos", BANNER_WIDTH)),
            "purple",
        ),
        0.0,
    )?;
    rec.write(format!("{}\n\n", banner()), 0.0)?;
    rec.pause(1.5)?;

    // Introduction
    rec.write(colorize("Welcome to tdr!\n", "yellow"), 0.0)?;
    rec.write("Reproducible terminal recordings, scripted instead of typed\n\n", 0.0)?;
    rec.write("This demo shows:\n", 0.0)?;
    rec.write("  1. Recording a scripted session\n", 0.0)?;
    rec.write("  2. Replaying it with asciinema\n", 0.0)?;
    rec.write("  3. Converting it to GIF and SVG\n\n", 0.0)?;
    rec.pause(2.0)?;

    // Part 1: Record
    section(rec, "Part 1: Record")?;
    rec.pause(1.0)?;

    rec.write(colorize("Step 1: Install the recorder\n", "bold"), 0.0)?;
    rec.write("\n", 0.0)?;
    prompt(rec, "cargo install tdr", typing_delay)?;
    rec.pause(0.5)?;

    rec.write(colorize("Compiling tdr v0.1.0\n", "green"), 0.0)?;
    for krate in ["serde", "serde_json", "clap", "chrono"] {
        rec.write(format!("  + {}\n", krate), 0.0)?;
        rec.pause(0.2)?;
    }
    rec.write("\n", 0.0)?;
    rec.write(colorize("✓ Installed to ~/.cargo/bin/tdr\n\n", "green"), 0.0)?;
    rec.pause(1.5)?;

    rec.write(colorize("Step 2: Record the built-in tour\n", "bold"), 0.0)?;
    rec.write("\n", 0.0)?;
    prompt(rec, "tdr --output tour.cast", typing_delay)?;
    rec.pause(0.5)?;

    rec.write(colorize("Generating demo...\n", "cyan"), 0.0)?;
    rec.write("  80x24 terminal, one event per keystroke\n\n", 0.0)?;
    rec.pause(1.0)?;
    rec.write(colorize("✓ Saved recording to tour.cast\n\n", "green"), 0.0)?;
    rec.pause(1.5)?;

    // Part 2: Replay
    section(rec, "Part 2: Replay")?;
    rec.pause(1.0)?;

    rec.write(colorize("Play it back in any terminal:\n", "bold"), 0.0)?;
    rec.write("\n", 0.0)?;
    prompt(rec, "asciinema play tour.cast", typing_delay)?;
    rec.write("\n", 0.0)?;
    rec.pause(1.0)?;

    rec.write("The session replays exactly as scripted, pauses and\n", 0.0)?;
    rec.write("keystrokes included. Every run is identical.\n\n", 0.0)?;
    rec.pause(2.0)?;

    rec.write(colorize("Or share it online:\n", "bold"), 0.0)?;
    rec.write("\n", 0.0)?;
    prompt(rec, "asciinema upload tour.cast", typing_delay)?;
    rec.pause(0.5)?;
    spinner(rec, "Uploading")?;
    rec.write(colorize("✓ View it at asciinema.org/a/541128\n\n", "green"), 0.0)?;
    rec.pause(2.0)?;

    // Part 3: Convert
    section(rec, "Part 3: Convert")?;
    rec.pause(1.0)?;

    rec.write(colorize("Animated GIF for the README:\n", "bold"), 0.0)?;
    rec.write("\n", 0.0)?;
    prompt(rec, "agg tour.cast tour.gif", typing_delay)?;
    rec.pause(0.5)?;
    rec.write("rendering frames 100% (2304/2304)\n", 0.0)?;
    rec.write(colorize("✓ tour.gif (1.4 MiB)\n\n", "green"), 0.0)?;
    rec.pause(1.5)?;

    rec.write(colorize("Animated SVG for the docs site:\n", "bold"), 0.0)?;
    rec.write("\n", 0.0)?;
    prompt(rec, "svg-term --in tour.cast --out tour.svg", typing_delay)?;
    rec.pause(0.5)?;
    rec.write(colorize("✓ tour.svg\n\n", "green"), 0.0)?;
    rec.pause(2.0)?;

    // Summary
    section(rec, "Summary")?;

    rec.write(colorize("What we just did:\n", "bold"), 0.0)?;
    rec.write("  1. Installed tdr with cargo\n", 0.0)?;
    rec.write("  2. Recorded a scripted session to tour.cast\n", 0.0)?;
    rec.write("  3. Replayed and converted it\n\n", 0.0)?;
    rec.pause(1.5)?;

    rec.write(colorize("Why script your demos?\n\n", "bold"), 0.0)?;
    let reasons = [
        "✓ No typos, no retakes",
        "✓ Same timing on every run",
        "✓ Diffs like source code, because it is",
        "✓ One file plays everywhere asciinema does",
    ];
    for reason in reasons {
        rec.write(format!("  {}\n", reason), 0.0)?;
        rec.pause(0.3)?;
    }
    rec.pause(2.0)?;

    // End screen
    rec.clear_screen()?;
    rec.write("\n\n", 0.0)?;
    rec.write(format!("{}\n", banner()), 0.0)?;
    rec.write(
        colorize(
            &format!("{}\n", centered("Script it once. Replay it anywhere.", BANNER_WIDTH)),
            "green",
        ),
        0.0,
    )?;
    rec.write(format!("{}\n\n", banner()), 0.0)?;

    rec.write(colorize("Get started:\n", "bold"), 0.0)?;
    rec.write("  1. cargo install tdr\n", 0.0)?;
    rec.write("  2. tdr --output demo.cast\n", 0.0)?;
    rec.write("  3. asciinema play demo.cast\n\n", 0.0)?;

    rec.write(colorize("Total runtime: about one minute\n", "cyan"), 0.0)?;
    rec.pause(3.0)?;

    Ok(())
}
