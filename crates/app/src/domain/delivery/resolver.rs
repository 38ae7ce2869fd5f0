//! Zone Resolver

use sqlx::{Postgres, Transaction};
use waybill::zones::ZoneLocation;

use crate::domain::delivery::{
    records::DeliveryZoneRecord,
    repositories::{PgDeliveryZonesRepository, PgGeographyRepository},
};

/// Maps a submitted location onto a registered delivery zone.
///
/// The region is matched first, then the city within it, then the commune
/// within that city. A commune that is not registered under the city means
/// no zone, even when the city has a city-wide zone. Without a commune only
/// the city-wide zone matches.
#[derive(Debug, Clone, Default)]
pub(crate) struct ZoneResolver {
    geography: PgGeographyRepository,
    zones: PgDeliveryZonesRepository,
}

impl ZoneResolver {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            geography: PgGeographyRepository::new(),
            zones: PgDeliveryZonesRepository::new(),
        }
    }

    /// Returns the zone at `location`, active or not.
    pub(crate) async fn resolve(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        location: &ZoneLocation,
    ) -> Result<Option<DeliveryZoneRecord>, sqlx::Error> {
        let Some(region) = self.geography.find_region(tx, &location.region).await? else {
            return Ok(None);
        };

        let Some(city) = self.geography.find_city(tx, region, &location.city).await? else {
            return Ok(None);
        };

        let commune = match location.commune.as_deref() {
            Some(name) => match self.geography.find_commune(tx, city, name).await? {
                Some(commune) => Some(commune),
                None => return Ok(None),
            },
            None => None,
        };

        self.zones
            .find_zone_by_location(tx, region, city, commune)
            .await
    }
}
