//! Diff Files: Compare two text files in the terminal.
//!
//! ```text
//! cargo run --example diff_files -- old.txt new.txt --side-by-side
//! RUST_LOG=debug cargo run --example diff_files -- old.txt new.txt
//! ```

use clap::Parser;
use diffcheck::render::{ansi, OutputBuffer};
use diffcheck::{source, Comparison, DiffError, RenderConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "diff_files")]
#[command(about = "Line diff of two text files", long_about = None)]
struct Args {
    /// Original file
    original: PathBuf,

    /// Modified file
    modified: PathBuf,

    /// Show the files in two columns
    #[arg(short, long)]
    side_by_side: bool,

    /// Render config (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<(), DiffError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    if args.no_color {
        config.color = false;
    }

    let comparison = source::compare_files(&args.original, &args.modified)?;
    let Comparison::Ready(script) = comparison else {
        println!("{}", config.empty_message);
        return Ok(());
    };

    let mut output = OutputBuffer::with_capacity(script.len() * 64);
    let stats = if args.side_by_side {
        let width = ansi::terminal_width(&config);
        ansi::render_side_by_side(&script, &config, width, &mut output)?
    } else {
        ansi::render_inline(&script, &config, &mut output)?
    };

    output.flush_to(&mut std::io::stdout().lock())?;

    tracing::info!(
        rows = stats.rows,
        color_changes = stats.color_changes,
        summary = %script.stats(),
        "diff rendered"
    );
    Ok(())
}
