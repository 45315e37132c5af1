//! Minimal GeoJSON shapes.
//!
//! Only `properties` is decoded. Geometry, bbox and any foreign members are
//! skipped without validation.

use serde::Deserialize;
use serde_json::{Map, Value};

pub type Properties = Map<String, Value>;

/// Root object of a boundary dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureCollection {
    /// GeoJSON `type` member, if present.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub features: Option<Vec<Feature>>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: Some("FeatureCollection".to_string()),
            features: Some(features),
        }
    }

    /// True unless the root declares another GeoJSON type or has no `features`.
    pub fn is_feature_collection(&self) -> bool {
        let kind_ok = self
            .kind
            .as_deref()
            .map_or(true, |kind| kind == "FeatureCollection");
        kind_ok && self.features.is_some()
    }

    pub fn features(&self) -> &[Feature] {
        self.features.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<Properties>,
}

impl Feature {
    pub fn new(properties: Option<Properties>) -> Self {
        Self { properties }
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref()?.get(key)
    }
}
