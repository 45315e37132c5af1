//! Load → build → render → write.

use std::fs;

use tracing::info;

use crate::config::Config;
use crate::error::{HierarchyError, Result};
use crate::hierarchy::{HierarchyStats, PoliceHierarchy};
use crate::loader::load_feature_collection;
use crate::render::MarkdownRenderer;

/// Render the report for the configured inputs without writing it.
pub fn generate_report(config: &Config) -> Result<(String, HierarchyStats)> {
    info!("Loading GeoJSON files...");
    let sub_divisions = load_feature_collection(&config.input.sub_division_file)?;
    let police_stations = load_feature_collection(&config.input.police_station_file)?;

    let hierarchy = PoliceHierarchy::build(&sub_divisions, &police_stations);
    let report = MarkdownRenderer::new(config.report.clone()).render(&hierarchy);

    Ok((report, hierarchy.stats()))
}

/// Generate the report and overwrite the configured output file.
///
/// Nothing is written if loading fails.
pub fn run(config: &Config) -> Result<HierarchyStats> {
    let (report, stats) = generate_report(config)?;
    let output = &config.output.file;

    info!("Writing output to {}...", output.display());
    fs::write(output, report).map_err(|source| HierarchyError::FileAccess {
        path: output.clone(),
        source,
    })?;

    info!("Done! Markdown table generated successfully.");
    info!("Output file: {}", output.display());

    Ok(stats)
}
