use super::PoliceHierarchy;

/// Aggregate counts shown in the report summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HierarchyStats {
    pub ranges: usize,
    /// (range, district) pairs, so a district under two ranges counts twice.
    pub districts: usize,
    pub sub_divisions: usize,
    /// Every station entry, including duplicates and districts without a range.
    pub police_stations: usize,
}

impl PoliceHierarchy {
    pub fn stats(&self) -> HierarchyStats {
        let ranges = self.ranges();

        HierarchyStats {
            ranges: ranges.len(),
            districts: ranges.values().map(|districts| districts.len()).sum(),
            sub_divisions: ranges
                .values()
                .flat_map(|districts| districts.values())
                .map(|subs| subs.len())
                .sum(),
            police_stations: self
                .stations_by_district()
                .values()
                .map(|stations| stations.len())
                .sum(),
        }
    }
}
