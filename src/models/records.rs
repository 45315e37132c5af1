//! Sub-division and police-station records.
//!
//! Both datasets carry their hierarchy as flat string properties on each
//! feature. Geometry is ignored.

use serde_json::Value;

use super::feature::Feature;

/// Placeholder used whenever a property is missing, null or empty.
pub const UNKNOWN: &str = "UNKNOWN";

/// Property keys in the sub-division boundary dataset.
pub const RANGE_KEY: &str = "RANGE";
pub const DISTRICT_KEY: &str = "DISTRICT";
pub const SUB_DIVISION_KEY: &str = "SUB_DIVISI";

/// Property key for the station name in the police-station dataset.
pub const NAME_KEY: &str = "NAME";

/// Read a feature property as a string, falling back to [`UNKNOWN`].
///
/// Strings are taken as-is (unless empty), numbers and booleans use their
/// JSON text. Null, arrays and objects are treated as absent.
pub fn property_or_unknown(feature: &Feature, key: &str) -> String {
    match feature.property(key) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

/// One row of the sub-division boundary dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubDivisionRecord {
    pub range: String,
    pub district: String,
    pub sub_division: String,
}

impl SubDivisionRecord {
    pub fn from_feature(feature: &Feature) -> Self {
        Self {
            range: property_or_unknown(feature, RANGE_KEY),
            district: property_or_unknown(feature, DISTRICT_KEY),
            sub_division: property_or_unknown(feature, SUB_DIVISION_KEY),
        }
    }
}

/// One point of the police-station dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoliceStationRecord {
    pub name: String,
    pub district: String,
}

impl PoliceStationRecord {
    pub fn from_feature(feature: &Feature) -> Self {
        Self {
            name: property_or_unknown(feature, NAME_KEY),
            district: property_or_unknown(feature, DISTRICT_KEY),
        }
    }
}
