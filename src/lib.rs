//! Police hierarchy - Range → District → Sub-Division → Police Station reports
//!
//! This library groups sub-division boundaries and police-station points from
//! GeoJSON into a nested hierarchy and renders it as a Markdown report.

pub mod config;
pub mod error;
pub mod hierarchy;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod render;

pub use error::HierarchyError;
pub use hierarchy::{HierarchyStats, PoliceHierarchy};
pub use models::{PoliceStationRecord, SubDivisionRecord};
pub use render::{MarkdownRenderer, RenderOptions};
