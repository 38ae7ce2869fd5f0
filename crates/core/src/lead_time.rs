//! Delivery Lead Times

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Cities served next day regardless of region.
const FAST_PATH_CITIES: [&str; 5] = ["Douala", "Yaoundé", "Bafoussam", "Bamenda", "Garoua"];

/// Typical delivery days per region.
const REGION_DAYS: [(&str, u32); 10] = [
    ("Centre", 2),
    ("Littoral", 2),
    ("Ouest", 3),
    ("Nord-Ouest", 3),
    ("Sud-Ouest", 3),
    ("Nord", 4),
    ("Adamaoua", 4),
    ("Est", 5),
    ("Sud", 5),
    ("Extrême-Nord", 5),
];

/// Coarse estimate of how many days a delivery takes.
///
/// Lookups are exact, case-sensitive name matches. A fast-path city always wins over its
/// region's figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadTimePolicy {
    /// Days for cities in `fast_path_cities`.
    pub fast_path_days: u32,

    /// Cities with next-day service.
    pub fast_path_cities: FxHashSet<String>,

    /// Days per region.
    pub region_days: FxHashMap<String, u32>,

    /// Days for regions missing from `region_days`.
    pub default_days: u32,
}

impl LeadTimePolicy {
    /// Estimate delivery days for a destination.
    pub fn estimate(&self, region: &str, city: &str) -> u32 {
        if self.fast_path_cities.contains(city) {
            return self.fast_path_days;
        }

        self.region_days
            .get(region)
            .copied()
            .unwrap_or(self.default_days)
    }
}

impl Default for LeadTimePolicy {
    fn default() -> Self {
        Self {
            fast_path_days: 1,
            fast_path_cities: FAST_PATH_CITIES.iter().map(ToString::to_string).collect(),
            region_days: REGION_DAYS
                .iter()
                .map(|(region, days)| ((*region).to_string(), *days))
                .collect(),
            default_days: 3,
        }
    }
}
