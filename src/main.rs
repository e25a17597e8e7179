//! tdr binary entrypoint.
//!
//! Wires config, flags and the built-in demo script together: load config,
//! apply flag overrides, run the script, save the cast, print next steps.

use std::fs;
use std::io;

use anyhow::{bail, Result};
use clap::{CommandFactory, Parser};
use humansize::{format_size, DECIMAL};

use tdr::cli::{Cli, Format};
use tdr::style::paint;
use tdr::{demo, Config, Recorder};

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    let output = cli.output.unwrap_or_else(|| config.output.clone());

    if cli.format == Format::Svg {
        eprintln!("SVG output is not produced directly. Record a cast and convert it:");
        eprintln!(
            "  svg-term --in {} --out {}",
            output.display(),
            output.with_extension("svg").display()
        );
        bail!("unsupported output format: svg");
    }

    let width = cli.width.unwrap_or(config.width);
    let height = cli.height.unwrap_or(config.height);

    let mut recorder = Recorder::new(width, height)?
        .with_title(config.title.clone())
        .with_env(config.env.clone());

    println!("Generating demo...");
    demo::script(&mut recorder, config.typing_delay)?;

    recorder.save(&output)?;

    let size = fs::metadata(&output).map(|m| m.len()).unwrap_or(0);
    println!(
        "{} Saved recording to {} ({}, {} events, {:.1}s)",
        paint("✓", "green"),
        output.display(),
        format_size(size, DECIMAL),
        recorder.event_count(),
        recorder.elapsed()
    );

    println!();
    println!("Next steps:");
    println!("  1. View:   asciinema play {}", output.display());
    println!("  2. Upload: asciinema upload {}", output.display());
    println!(
        "  3. GIF:    agg {} {}",
        output.display(),
        output.with_extension("gif").display()
    );
    println!(
        "  4. SVG:    svg-term --in {} --out {}",
        output.display(),
        output.with_extension("svg").display()
    );

    Ok(())
}
