//! Individual report sections, each appending lines to the document.

use crate::hierarchy::{HierarchyStats, PoliceHierarchy};
use crate::models::UNKNOWN;

/// One row per (range, district, sub-division), with repeated range and
/// district cells left blank.
pub(super) fn overview_table(
    lines: &mut Vec<String>,
    hierarchy: &PoliceHierarchy,
    preview_limit: usize,
) {
    lines.push("# Police Hierarchy Table".to_string());
    lines.push(String::new());
    lines.push("## Range → District → Sub-Division → Police Stations".to_string());
    lines.push(String::new());
    lines.push("| Range | District | Sub-Division | Police Stations |".to_string());
    lines.push("|-------|----------|--------------|-----------------|".to_string());

    for (range, districts) in hierarchy.ranges() {
        let mut range_first = true;

        for (district, sub_divisions) in districts {
            let mut district_first = true;
            let stations = station_preview(&hierarchy.sorted_stations(district), preview_limit);

            // Every sub-division row repeats its district's preview.
            for sub_division in sub_divisions {
                let range_cell = if range_first { range.as_str() } else { "" };
                let district_cell = if district_first { district.as_str() } else { "" };

                lines.push(format!(
                    "| {} | {} | {} | {} |",
                    range_cell, district_cell, sub_division, stations
                ));

                range_first = false;
                district_first = false;
            }
        }
    }

    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());
}

/// Comma-joined station names, capped at `limit` with a "+k more" suffix.
pub(super) fn station_preview(stations: &[&str], limit: usize) -> String {
    if stations.len() <= limit {
        return stations.join(", ");
    }

    format!(
        "{} ... (+{} more)",
        stations[..limit].join(", "),
        stations.len() - limit
    )
}

pub(super) fn detailed_view(lines: &mut Vec<String>, hierarchy: &PoliceHierarchy) {
    lines.push("## Detailed View by Range".to_string());
    lines.push(String::new());

    for (range, districts) in hierarchy.ranges() {
        lines.push(format!("### {} Range", range));
        lines.push(String::new());

        for (district, sub_divisions) in districts {
            lines.push(format!("#### {} District", district));
            lines.push(String::new());

            let sub_divisions: Vec<&str> = sub_divisions.iter().map(String::as_str).collect();
            lines.push(format!("**Sub-Divisions:** {}", sub_divisions.join(", ")));
            lines.push(String::new());

            let stations = hierarchy.sorted_stations(district);
            if stations.is_empty() {
                lines.push("*No police stations data available*".to_string());
            } else {
                lines.push("**Police Stations:**".to_string());
                for (i, station) in stations.iter().enumerate() {
                    lines.push(format!("{}. {}", i + 1, station));
                }
            }
            lines.push(String::new());
        }
    }
}

pub(super) fn summary_statistics(lines: &mut Vec<String>, stats: &HierarchyStats) {
    lines.push("---".to_string());
    lines.push(String::new());
    lines.push("## Summary Statistics".to_string());
    lines.push(String::new());
    lines.push(format!("- **Total Ranges:** {}", stats.ranges));
    lines.push(format!("- **Total Districts:** {}", stats.districts));
    lines.push(format!("- **Total Sub-Divisions:** {}", stats.sub_divisions));
    lines.push(format!("- **Total Police Stations:** {}", stats.police_stations));
    lines.push(String::new());
}

/// Numbered station table for every district that has stations, including
/// districts missing from the sub-division data.
pub(super) fn station_index(lines: &mut Vec<String>, hierarchy: &PoliceHierarchy) {
    lines.push("---".to_string());
    lines.push(String::new());
    lines.push("## Police Stations by District".to_string());
    lines.push(String::new());

    for district in hierarchy.stations_by_district().keys() {
        let range = hierarchy.range_of(district).unwrap_or(UNKNOWN);

        lines.push(format!("### {} ({} Range)", district, range));
        lines.push(String::new());
        lines.push("| S.No. | Police Station Name |".to_string());
        lines.push("|-------|---------------------|".to_string());

        for (i, station) in hierarchy.sorted_stations(district).iter().enumerate() {
            lines.push(format!("| {} | {} |", i + 1, station));
        }
        lines.push(String::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::HierarchyBuilder;
    use crate::models::{PoliceStationRecord, SubDivisionRecord};

    fn build(rows: &[(&str, &str, &str)], stations: &[(&str, &str)]) -> PoliceHierarchy {
        let mut builder = HierarchyBuilder::new();
        for (range, district, sub_division) in rows {
            builder.add_sub_division(SubDivisionRecord {
                range: range.to_string(),
                district: district.to_string(),
                sub_division: sub_division.to_string(),
            });
        }
        for (name, district) in stations {
            builder.add_police_station(PoliceStationRecord {
                name: name.to_string(),
                district: district.to_string(),
            });
        }
        builder.finish()
    }

    fn table_rows(lines: &[String]) -> Vec<&str> {
        lines
            .iter()
            .skip(6)
            .take_while(|line| line.starts_with('|'))
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn test_preview_without_suffix() {
        assert_eq!(station_preview(&["A", "B", "C"], 5), "A, B, C");
        assert_eq!(station_preview(&["A", "B", "C", "D", "E"], 5), "A, B, C, D, E");
        assert_eq!(station_preview(&[], 5), "");
    }

    #[test]
    fn test_preview_with_suffix() {
        let stations = ["A", "B", "C", "D", "E", "F", "G"];
        assert_eq!(station_preview(&stations, 5), "A, B, C, D, E ... (+2 more)");
    }

    #[test]
    fn test_overview_blanks_repeated_cells() {
        let hierarchy = build(
            &[
                ("South", "Gamma", "G1"),
                ("North", "Beta", "B2"),
                ("North", "Beta", "B1"),
                ("North", "Alpha", "A1"),
            ],
            &[("PS1", "Beta")],
        );
        let mut lines = Vec::new();
        overview_table(&mut lines, &hierarchy, 5);

        assert_eq!(
            table_rows(&lines),
            vec![
                "| North | Alpha | A1 |  |",
                "|  | Beta | B1 | PS1 |",
                "|  |  | B2 | PS1 |",
                "| South | Gamma | G1 |  |",
            ]
        );
    }

    #[test]
    fn test_overview_one_row_per_triple() {
        let hierarchy = build(
            &[
                ("North", "Alpha", "A1"),
                ("North", "Alpha", "A1"),
                ("North", "Alpha", "A2"),
                ("North", "Beta", "B1"),
            ],
            &[],
        );
        let mut lines = Vec::new();
        overview_table(&mut lines, &hierarchy, 5);

        assert_eq!(table_rows(&lines).len(), 3);
    }

    #[test]
    fn test_overview_repeats_capped_preview_per_sub_division() {
        let stations: Vec<(String, &str)> =
            (1..=7).rev().map(|i| (format!("PS{}", i), "Alpha")).collect();
        let stations: Vec<(&str, &str)> =
            stations.iter().map(|(n, d)| (n.as_str(), *d)).collect();
        let hierarchy = build(&[("North", "Alpha", "A1"), ("North", "Alpha", "A2")], &stations);
        let mut lines = Vec::new();
        overview_table(&mut lines, &hierarchy, 5);

        let preview = "PS1, PS2, PS3, PS4, PS5 ... (+2 more)";
        assert_eq!(
            table_rows(&lines),
            vec![
                format!("| North | Alpha | A1 | {} |", preview),
                format!("|  |  | A2 | {} |", preview),
            ]
        );
    }

    #[test]
    fn test_detailed_view_lists_all_stations() {
        let stations: Vec<(String, &str)> =
            (1..=7).map(|i| (format!("PS{}", i), "Alpha")).collect();
        let stations: Vec<(&str, &str)> =
            stations.iter().map(|(n, d)| (n.as_str(), *d)).collect();
        let hierarchy = build(&[("North", "Alpha", "A2"), ("North", "Alpha", "A1")], &stations);
        let mut lines = Vec::new();
        detailed_view(&mut lines, &hierarchy);

        assert!(lines.contains(&"**Sub-Divisions:** A1, A2".to_string()));
        let numbered: Vec<&String> = lines
            .iter()
            .filter(|line| line.starts_with(char::is_numeric))
            .collect();
        assert_eq!(numbered.len(), 7);
        assert_eq!(numbered[0], "1. PS1");
        assert_eq!(numbered[6], "7. PS7");
    }

    #[test]
    fn test_detailed_view_placeholder_without_stations() {
        let hierarchy = build(&[("North", "Alpha", "A1")], &[("PS1", "Beta")]);
        let mut lines = Vec::new();
        detailed_view(&mut lines, &hierarchy);

        assert!(lines.contains(&"*No police stations data available*".to_string()));
        assert!(!lines.iter().any(|line| line.contains("PS1")));
    }

    #[test]
    fn test_station_index_uses_unknown_range_for_orphans() {
        let hierarchy = build(
            &[("North", "Alpha", "A1")],
            &[("PS2", "Alpha"), ("PS1", "Alpha"), ("PS9", "Nowhere")],
        );
        let mut lines = Vec::new();
        station_index(&mut lines, &hierarchy);

        assert!(lines.contains(&"### Alpha (North Range)".to_string()));
        assert!(lines.contains(&"### Nowhere (UNKNOWN Range)".to_string()));
        let alpha_start = lines
            .iter()
            .position(|line| line == "### Alpha (North Range)")
            .unwrap();
        assert_eq!(lines[alpha_start + 4], "| 1 | PS1 |");
        assert_eq!(lines[alpha_start + 5], "| 2 | PS2 |");
    }
}
