//! Orrery Viewer - Main entry point
//!
//! Loads the scene configuration, generates the procedural layout, and
//! hands both to the Bevy application.

mod app;
mod config;

use anyhow::Result;
use clap::Parser;
use orrery_core::SceneBlueprint;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "orrery")]
#[command(about = "Animated planetary scene viewer")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "orrery.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Override the layout seed from the configuration
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the default configuration to the config path and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Orrery v{}", env!("CARGO_PKG_VERSION"));

    if args.write_config {
        config::save_default_config(&args.config)?;
        info!(path = %args.config.display(), "Wrote default configuration");
        return Ok(());
    }

    // Load configuration
    let mut config = config::load_config(&args.config)?;

    // Override seed if specified
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    let blueprint = SceneBlueprint::from_config(&config)?;
    info!(
        markers = blueprint.markers.len(),
        stars = blueprint.stars.len(),
        seed = ?config.seed,
        "Scene layout generated"
    );

    app::run(config, blueprint);

    Ok(())
}
