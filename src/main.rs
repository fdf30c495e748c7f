//! XKB Layout - keyboard layout compiler
//!
//! Reads an editable keyboard layout file and produces an XKB symbols file
//! and a Unicode keyboard diagram from it.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use xkblayout::config::Config;
use xkblayout::constants::APP_NAME;
use xkblayout::export::render_keyboard_diagram;
use xkblayout::keymap::generate_keymap;
use xkblayout::models::Layout;
use xkblayout::parser::{self, atomic_write};

/// XKB Layout - compile an editable keyboard layout into XKB symbols
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the layout file
    #[arg(value_name = "FILE")]
    layout: PathBuf,

    /// Also write an XKB symbols file
    #[arg(long, value_name = "FILE")]
    keymap: Option<PathBuf>,

    /// Also write a keyboard diagram
    #[arg(long, value_name = "FILE")]
    diagram: Option<PathBuf>,

    /// Overwrite the layout file with the built-in QWERTY layout first
    #[arg(long)]
    reset: bool,

    /// Rewrite the layout file in normalized form
    #[arg(long)]
    normalize: bool,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config, using defaults: {e:#}");
            Config::default()
        }),
    };

    init_tracing(cli.verbose || config.verbose);
    debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    if cli.reset {
        let layout = parser::default_layout().context("Built-in layout is invalid")?;
        parser::save_layout(&layout, &cli.layout)?;
        info!("Reset {} to the built-in QWERTY layout", cli.layout.display());
    }

    let layout = parser::parse_layout(&cli.layout)?;
    debug!(
        "Parsed layout '{}' with {} distinct modifier blocks",
        layout.name(),
        layout.compressed_slots().len()
    );

    if cli.normalize {
        parser::save_layout(&layout, &cli.layout)?;
        info!("Normalized {}", cli.layout.display());
    }

    if let Some(path) = cli.keymap.as_ref().or(config.keymap.output.as_ref()) {
        write_keymap(&layout, &config, path)?;
    }

    if let Some(path) = cli.diagram.as_ref().or(config.diagram.output.as_ref()) {
        atomic_write(path, &render_keyboard_diagram(&layout))?;
        println!("✓ Wrote diagram to: {}", path.display());
    }

    println!(
        "✓ Layout '{}' is valid ({} modifier blocks)",
        layout.name(),
        layout.compressed_slots().len()
    );

    Ok(())
}

/// Generates the symbols file and writes it to `path`.
fn write_keymap(layout: &Layout, config: &Config, path: &Path) -> Result<()> {
    let keymap = generate_keymap(layout, &config.keymap_options());

    if !keymap.fallbacks.is_empty() {
        info!(
            "{} key labels had no keysym name and were encoded by codepoint or passed through",
            keymap.fallbacks.len()
        );
    }

    atomic_write(path, &keymap.text)?;
    println!("✓ Wrote keymap to: {}", path.display());

    Ok(())
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects debug output.
fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
