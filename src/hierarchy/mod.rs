//! Range → District → Sub-Division grouping.
//!
//! Sub-division rows are grouped into a three-level tree, police stations
//! are grouped by district only (the station dataset has no sub-division).

mod builder;
mod stats;

pub use builder::{Districts, HierarchyBuilder, PoliceHierarchy, Ranges, SubDivisions};
pub use stats::HierarchyStats;
