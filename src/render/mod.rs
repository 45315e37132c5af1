//! Markdown report rendering.
//!
//! The report has three sections: an overview table, a detailed view per
//! range and summary statistics. An optional station index can follow.
//! Rendering performs no I/O.

mod sections;

use serde::Deserialize;

use crate::hierarchy::PoliceHierarchy;

/// Default number of station names shown per overview row.
pub const DEFAULT_STATION_PREVIEW_LIMIT: usize = 5;

/// Report layout options, read from the `[report]` config table.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderOptions {
    /// Station names listed in an overview cell before the "+k more" suffix.
    pub station_preview_limit: usize,

    /// Append the "Police Stations by District" section.
    pub include_station_index: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            station_preview_limit: DEFAULT_STATION_PREVIEW_LIMIT,
            include_station_index: false,
        }
    }
}

/// Renders a [`PoliceHierarchy`] as a Markdown document.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, hierarchy: &PoliceHierarchy) -> String {
        let mut lines = Vec::new();

        sections::overview_table(
            &mut lines,
            hierarchy,
            self.options.station_preview_limit,
        );
        sections::detailed_view(&mut lines, hierarchy);
        sections::summary_statistics(&mut lines, &hierarchy.stats());

        if self.options.include_station_index {
            sections::station_index(&mut lines, hierarchy);
        }

        lines.join("\n")
    }
}
