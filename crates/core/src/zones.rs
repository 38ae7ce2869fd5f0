//! Delivery Zones

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::fees::FeeSchedule;

/// A geographic destination: region, city and optionally a commune within the city.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneLocation {
    /// Region name.
    pub region: String,

    /// City name, scoped to the region.
    pub city: String,

    /// Commune name, scoped to the city. `None` addresses the whole city.
    pub commune: Option<String>,
}

impl ZoneLocation {
    /// Create a location.
    pub fn new(
        region: impl Into<String>,
        city: impl Into<String>,
        commune: Option<impl Into<String>>,
    ) -> Self {
        Self {
            region: region.into(),
            city: city.into(),
            commune: commune.map(Into::into),
        }
    }

    /// Whether this location covers a whole city rather than a single commune.
    pub fn is_city_wide(&self) -> bool {
        self.commune.is_none()
    }
}

impl Display for ZoneLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.commune {
            Some(commune) => write!(f, "{}, {}, {commune}", self.region, self.city),
            None => write!(f, "{}, {}", self.region, self.city),
        }
    }
}

/// A deliverable zone, keyed by whatever identifier the store uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryZone<Id> {
    /// Store identifier.
    pub id: Id,

    /// Where the zone is.
    pub location: ZoneLocation,

    /// Inactive zones cannot be quoted.
    pub is_active: bool,
}

/// Pricing attached to a single zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryCost {
    /// Fee parameters.
    pub schedule: FeeSchedule,

    /// Inactive costs are treated as missing.
    pub is_active: bool,
}
