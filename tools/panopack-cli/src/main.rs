//! Panopack CLI - turn a location into a title-screen panorama resource pack
//!
//! # Usage
//!
//! ```bash
//! # Prompt for everything
//! API_KEY=... panopack
//!
//! # Fully non-interactive
//! panopack --location "New York" --name test_pack --description ""
//! ```
//!
//! Produces `<name>.zip` in the output directory (default: current
//! directory). Scratch `temp_*` directories are created next to it and
//! removed on success.

mod prompt;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use panopack_core::{PackRequest, StreetViewClient, config};

/// Panopack - Minecraft title-screen panoramas from street-level imagery
#[derive(Parser, Debug)]
#[command(name = "panopack")]
#[command(about = "Build a title-screen panorama resource pack for a location")]
#[command(version)]
struct Cli {
    /// Place name or "lat, lng" coordinates (prompted if omitted)
    #[arg(short, long)]
    location: Option<String>,

    /// Pack/zip file name without extension (prompted if omitted)
    #[arg(short, long)]
    name: Option<String>,

    /// In-game pack description (prompted if omitted, may be blank)
    #[arg(short, long)]
    description: Option<String>,

    /// Directory for the archive and scratch directories
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Config file (defaults to config.toml in the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_from(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => config::load(),
    };
    config.streetview.apply_env();
    tracing::debug!(
        "Imagery endpoint {} ({}px, fov {})",
        config.streetview.endpoint,
        config.streetview.image_size,
        config.streetview.fov
    );

    let request = read_request(cli.location, cli.name, cli.description)?;
    request.validate()?;

    let client = StreetViewClient::new(config.streetview)
        .context("Failed to create imagery client")?;
    panopack_core::run(&client, &request, &cli.output_dir)
        .with_context(|| format!("Failed to build '{}'", request.pack_name))?;

    println!("Saved to '{}'!", request.archive_file_name());
    Ok(())
}

/// Fill in any inputs missing from the command line from stdin.
fn read_request(
    location: Option<String>,
    pack_name: Option<String>,
    description: Option<String>,
) -> Result<PackRequest> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let location = prompt::or_ask(location, &mut input, &mut output, prompt::LOCATION_PROMPT)?;
    let pack_name = prompt::or_ask(pack_name, &mut input, &mut output, prompt::PACK_NAME_PROMPT)?;
    let description = prompt::or_ask(
        description,
        &mut input,
        &mut output,
        prompt::DESCRIPTION_PROMPT,
    )?;

    Ok(PackRequest {
        location,
        pack_name,
        description,
    })
}
