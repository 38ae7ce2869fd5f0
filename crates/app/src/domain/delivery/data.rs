//! Delivery Data

use waybill::zones::ZoneLocation;

use crate::domain::delivery::records::DeliveryZoneUuid;

/// New Delivery Zone Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewDeliveryZone {
    /// UUID to assign to the zone row.
    pub uuid: DeliveryZoneUuid,

    /// Region, city and optional commune covered by the zone. Missing geography rows are
    /// created alongside the zone.
    pub location: ZoneLocation,
}
