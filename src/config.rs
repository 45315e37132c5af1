use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::RenderOptions;

/// Run configuration. Every field has a default.
///
/// Default paths are relative to the current working directory, not to the
/// executable. Run from the directory that holds `jsongeo/`, or set the
/// paths in a config file.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub report: RenderOptions,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Boundaries carrying RANGE, DISTRICT and SUB_DIVISI properties
    pub sub_division_file: PathBuf,
    /// Points carrying NAME and DISTRICT properties
    pub police_station_file: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            sub_division_file: PathBuf::from("jsongeo/Sub Division Boundary.geojson"),
            police_station_file: PathBuf::from("jsongeo/ps.geojson"),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Markdown report, overwritten on every run
    pub file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("POLICE_HIERARCHY_TABLE.md"),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}
