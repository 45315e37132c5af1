//! Error types for loading, building and writing the hierarchy report.

use std::path::PathBuf;

use thiserror::Error;

/// Every failure the pipeline can surface. All of them are fatal.
#[derive(Debug, Error)]
pub enum HierarchyError {
    /// An input file is missing or unreadable, or the report could not be written.
    #[error("Failed to access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not well-formed JSON (including invalid UTF-8).
    #[error("Failed to parse GeoJSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed GeoJSON whose root object is not a FeatureCollection.
    #[error("GeoJSON in {} must be a FeatureCollection", .path.display())]
    NotFeatureCollection { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, HierarchyError>;
