//! Delivery Records

use jiff::Timestamp;
use waybill::{
    fees::FeeSchedule,
    zones::{DeliveryCost, DeliveryZone, ZoneLocation},
};

use crate::uuids::TypedUuid;

/// Region UUID
pub type RegionUuid = TypedUuid<RegionRecord>;

/// Region Record
pub struct RegionRecord;

/// City UUID
pub type CityUuid = TypedUuid<CityRecord>;

/// City Record
pub struct CityRecord;

/// Commune UUID
pub type CommuneUuid = TypedUuid<CommuneRecord>;

/// Commune Record
pub struct CommuneRecord;

/// Delivery Zone UUID
pub type DeliveryZoneUuid = TypedUuid<DeliveryZoneRecord>;

/// Delivery Zone Record
#[derive(Debug, Clone)]
pub struct DeliveryZoneRecord {
    /// Unique zone identifier.
    pub uuid: DeliveryZoneUuid,

    /// Region name.
    pub region: String,

    /// City name.
    pub city: String,

    /// Commune name, `None` for a city-wide zone.
    pub commune: Option<String>,

    /// Whether the zone can be quoted.
    pub is_active: bool,

    /// Zone creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}

impl DeliveryZoneRecord {
    /// Where the zone is.
    pub fn location(&self) -> ZoneLocation {
        ZoneLocation::new(&*self.region, &*self.city, self.commune.as_deref())
    }

    /// The zone as seen by the fee engine.
    pub fn to_zone(&self) -> DeliveryZone<DeliveryZoneUuid> {
        DeliveryZone {
            id: self.uuid,
            location: self.location(),
            is_active: self.is_active,
        }
    }
}

/// Delivery Cost Record
#[derive(Debug, Clone)]
pub struct DeliveryCostRecord {
    /// Owning zone.
    pub zone_uuid: DeliveryZoneUuid,

    /// Fee parameters.
    pub schedule: FeeSchedule,

    /// Whether the pricing applies.
    pub is_active: bool,

    /// Cost creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}

impl DeliveryCostRecord {
    /// The cost as seen by the fee engine.
    pub fn to_cost(&self) -> DeliveryCost {
        DeliveryCost {
            schedule: self.schedule,
            is_active: self.is_active,
        }
    }
}
