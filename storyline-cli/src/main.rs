//! Storyline command-line front end.
//!
//! Renders recorded content API responses as plain text or JSON.
//!
//! Usage:
//!   storyline --root ./content page home
//!   storyline --root ./content --json articles --starts-with blogs/
//!
//! `--root` is a directory holding `<path>.json` story responses plus
//! `stories.json` and `links.json`.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use storyline_cli::{Command, execute};
use storyline_pipeline::{FileSource, PipelineConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "storyline")]
#[command(about = "Render Storyline content from recorded API responses", version)]
struct Args {
    /// Directory of recorded content responses
    #[arg(short, long, default_value = "content")]
    root: PathBuf,

    /// Pipeline config file (defaults to ~/.storyline/pipeline.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = match &args.config {
        Some(path) => PipelineConfig::load_from(path),
        None => PipelineConfig::load(),
    };
    info!("Reading content from {:?}", args.root);
    let source = FileSource::new(&args.root);

    let rendered = execute(&args.command, &source, &config, args.json)?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
