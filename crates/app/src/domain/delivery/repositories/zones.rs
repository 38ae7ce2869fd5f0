//! Delivery Zones Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::delivery::records::{
    CityUuid, CommuneUuid, DeliveryZoneRecord, DeliveryZoneUuid, RegionUuid,
};

const FIND_ZONE_BY_LOCATION_SQL: &str = include_str!("../sql/find_zone_by_location.sql");
const GET_ZONE_SQL: &str = include_str!("../sql/get_zone.sql");
const LIST_ACTIVE_ZONES_SQL: &str = include_str!("../sql/list_active_zones.sql");
const CREATE_ZONE_SQL: &str = include_str!("../sql/create_zone.sql");
const SET_ZONE_ACTIVE_SQL: &str = include_str!("../sql/set_zone_active.sql");
const DELETE_ZONE_SQL: &str = include_str!("../sql/delete_zone.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgDeliveryZonesRepository;

impl PgDeliveryZonesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Finds the zone keyed on exactly this region, city and commune.
    ///
    /// A `None` commune matches only the city-wide zone.
    pub(crate) async fn find_zone_by_location(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        region: RegionUuid,
        city: CityUuid,
        commune: Option<CommuneUuid>,
    ) -> Result<Option<DeliveryZoneRecord>, sqlx::Error> {
        query_as::<Postgres, DeliveryZoneRecord>(FIND_ZONE_BY_LOCATION_SQL)
            .bind(region.into_uuid())
            .bind(city.into_uuid())
            .bind(commune.map(CommuneUuid::into_uuid))
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn get_zone(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        zone: DeliveryZoneUuid,
    ) -> Result<DeliveryZoneRecord, sqlx::Error> {
        query_as::<Postgres, DeliveryZoneRecord>(GET_ZONE_SQL)
            .bind(zone.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_active_zones(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<DeliveryZoneRecord>, sqlx::Error> {
        query_as::<Postgres, DeliveryZoneRecord>(LIST_ACTIVE_ZONES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_zone(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        zone: DeliveryZoneUuid,
        region: RegionUuid,
        city: CityUuid,
        commune: Option<CommuneUuid>,
    ) -> Result<DeliveryZoneRecord, sqlx::Error> {
        query_as::<Postgres, DeliveryZoneRecord>(CREATE_ZONE_SQL)
            .bind(zone.into_uuid())
            .bind(region.into_uuid())
            .bind(city.into_uuid())
            .bind(commune.map(CommuneUuid::into_uuid))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn set_zone_active(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        zone: DeliveryZoneUuid,
        is_active: bool,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(SET_ZONE_ACTIVE_SQL)
            .bind(zone.into_uuid())
            .bind(is_active)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_zone(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        zone: DeliveryZoneUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ZONE_SQL)
            .bind(zone.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for DeliveryZoneRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: DeliveryZoneUuid::from_uuid(row.try_get("uuid")?),
            region: row.try_get("region")?,
            city: row.try_get("city")?,
            commune: row.try_get("commune")?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
