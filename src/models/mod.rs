//! Record types extracted from the boundary datasets.

pub mod feature;
pub mod records;

pub use feature::{Feature, FeatureCollection, Properties};
pub use records::{property_or_unknown, PoliceStationRecord, SubDivisionRecord, UNKNOWN};
