//! Police hierarchy table generator.
//!
//! Reads the sub-division boundary and police-station GeoJSON files and
//! writes the Range → District → Sub-Division → Police Stations report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use police_hierarchy::config::Config;
use police_hierarchy::pipeline;

#[derive(Parser, Debug)]
#[command(name = "generate")]
#[command(about = "Generate the police hierarchy Markdown table from GeoJSON boundaries")]
struct Args {
    /// Optional TOML config overriding input/output paths and report options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Append the per-district police station index
    #[arg(long)]
    station_index: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    if args.station_index {
        config.report.include_station_index = true;
    }

    let stats = pipeline::run(&config).context("Failed to generate hierarchy table")?;

    info!(
        "{} ranges, {} districts, {} sub-divisions, {} police stations",
        stats.ranges, stats.districts, stats.sub_divisions, stats.police_stations
    );

    Ok(())
}
