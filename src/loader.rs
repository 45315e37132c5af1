//! GeoJSON feature collection loading.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{HierarchyError, Result};
use crate::models::FeatureCollection;

/// Read a file and parse it as a GeoJSON FeatureCollection.
///
/// The whole file is read before parsing, so either the full collection is
/// returned or nothing is. Geometry is never decoded.
pub fn load_feature_collection(path: &Path) -> Result<FeatureCollection> {
    let content = fs::read(path).map_err(|source| HierarchyError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let collection = parse_feature_collection(&content, path)?;
    info!(
        "Loaded {} features from {}",
        collection.features().len(),
        path.display()
    );

    Ok(collection)
}

fn parse_feature_collection(content: &[u8], path: &Path) -> Result<FeatureCollection> {
    let collection: FeatureCollection =
        serde_json::from_slice(content).map_err(|source| HierarchyError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if !collection.is_feature_collection() {
        return Err(HierarchyError::NotFeatureCollection {
            path: path.to_path_buf(),
        });
    }

    Ok(collection)
}
