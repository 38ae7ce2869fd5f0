//! Delivery Zones Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use waybill_app::domain::delivery::records::DeliveryZoneRecord;

use crate::{delivery::errors::into_status_error, extensions::*};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ZoneResponse {
    pub uuid: Uuid,
    pub region: String,
    pub city: String,
    /// `null` for a city-wide zone
    pub commune: Option<String>,
    pub is_active: bool,
}

impl From<DeliveryZoneRecord> for ZoneResponse {
    fn from(zone: DeliveryZoneRecord) -> Self {
        Self {
            uuid: zone.uuid.into_uuid(),
            region: zone.region,
            city: zone.city,
            commune: zone.commune,
            is_active: zone.is_active,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ZonesResponse {
    /// Active zones ordered by region, city and commune
    pub zones: Vec<ZoneResponse>,
}

/// Delivery Zones Index Handler
///
/// Returns every active delivery zone.
#[endpoint(tags("delivery"), summary = "List Delivery Zones")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ZonesResponse>, StatusError> {
    let zones = depot
        .delivery_or_500()?
        .list_zones()
        .await
        .map_err(into_status_error)?;

    Ok(Json(ZonesResponse {
        zones: zones.into_iter().map(Into::into).collect(),
    }))
}
