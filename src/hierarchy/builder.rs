//! Building the grouped hierarchy from feature collections.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::models::{FeatureCollection, PoliceStationRecord, SubDivisionRecord};

/// Sub-division names of one district.
pub type SubDivisions = BTreeSet<String>;
/// District name -> sub-divisions.
pub type Districts = BTreeMap<String, SubDivisions>;
/// Range name -> districts.
pub type Ranges = BTreeMap<String, Districts>;

/// The grouped datasets, immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoliceHierarchy {
    ranges: Ranges,
    district_to_range: BTreeMap<String, String>,
    /// Station names per district, in source order.
    stations_by_district: BTreeMap<String, Vec<String>>,
}

impl PoliceHierarchy {
    /// Group both feature collections.
    pub fn build(sub_divisions: &FeatureCollection, police_stations: &FeatureCollection) -> Self {
        let mut builder = HierarchyBuilder::new();

        for feature in sub_divisions.features() {
            builder.add_sub_division(SubDivisionRecord::from_feature(feature));
        }
        for feature in police_stations.features() {
            builder.add_police_station(PoliceStationRecord::from_feature(feature));
        }

        builder.finish()
    }

    pub fn ranges(&self) -> &Ranges {
        &self.ranges
    }

    /// The range a district was last seen under.
    pub fn range_of(&self, district: &str) -> Option<&str> {
        self.district_to_range.get(district).map(String::as_str)
    }

    /// Station names for a district in source order (empty if none).
    pub fn stations(&self, district: &str) -> &[String] {
        self.stations_by_district
            .get(district)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Station names for a district in lexicographic order.
    pub fn sorted_stations(&self, district: &str) -> Vec<&str> {
        let mut stations: Vec<&str> = self.stations(district).iter().map(String::as_str).collect();
        stations.sort_unstable();
        stations
    }

    pub fn stations_by_district(&self) -> &BTreeMap<String, Vec<String>> {
        &self.stations_by_district
    }

    /// Districts that have stations but no sub-division rows.
    pub fn orphan_station_districts(&self) -> Vec<&str> {
        self.stations_by_district
            .keys()
            .filter(|district| !self.district_to_range.contains_key(*district))
            .map(String::as_str)
            .collect()
    }
}

/// Incrementally groups records into a [`PoliceHierarchy`].
#[derive(Debug, Default)]
pub struct HierarchyBuilder {
    hierarchy: PoliceHierarchy,
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a sub-division row. Duplicate rows collapse into one entry.
    pub fn add_sub_division(&mut self, record: SubDivisionRecord) {
        let SubDivisionRecord {
            range,
            district,
            sub_division,
        } = record;

        if let Some(previous) = self
            .hierarchy
            .district_to_range
            .insert(district.clone(), range.clone())
        {
            if previous != range {
                warn!(
                    "District {} appears under ranges {} and {}; using {}",
                    district, previous, range, range
                );
            }
        }

        self.hierarchy
            .ranges
            .entry(range)
            .or_default()
            .entry(district)
            .or_default()
            .insert(sub_division);
    }

    /// Append a station to its district's list.
    pub fn add_police_station(&mut self, record: PoliceStationRecord) {
        self.hierarchy
            .stations_by_district
            .entry(record.district)
            .or_default()
            .push(record.name);
    }

    pub fn finish(self) -> PoliceHierarchy {
        let hierarchy = self.hierarchy;

        for district in hierarchy.orphan_station_districts() {
            warn!(
                "District {} has {} police stations but no sub-division boundaries",
                district,
                hierarchy.stations(district).len()
            );
        }

        debug!(
            "Built hierarchy with {} ranges and {} station districts",
            hierarchy.ranges.len(),
            hierarchy.stations_by_district.len()
        );

        hierarchy
    }
}
