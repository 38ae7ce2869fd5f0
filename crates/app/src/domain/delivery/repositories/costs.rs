//! Delivery Costs Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use waybill::fees::FeeSchedule;

use crate::domain::delivery::records::{DeliveryCostRecord, DeliveryZoneUuid};

const GET_ZONE_COST_SQL: &str = include_str!("../sql/get_zone_cost.sql");
const UPSERT_ZONE_COST_SQL: &str = include_str!("../sql/upsert_zone_cost.sql");
const SET_COST_ACTIVE_SQL: &str = include_str!("../sql/set_cost_active.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgDeliveryCostsRepository;

impl PgDeliveryCostsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_cost_by_zone_id(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        zone: DeliveryZoneUuid,
    ) -> Result<Option<DeliveryCostRecord>, sqlx::Error> {
        query_as::<Postgres, DeliveryCostRecord>(GET_ZONE_COST_SQL)
            .bind(zone.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Inserts or replaces the zone's fee schedule, leaving its active flag alone.
    pub(crate) async fn upsert_cost(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        zone: DeliveryZoneUuid,
        schedule: &FeeSchedule,
    ) -> Result<DeliveryCostRecord, sqlx::Error> {
        query_as::<Postgres, DeliveryCostRecord>(UPSERT_ZONE_COST_SQL)
            .bind(zone.into_uuid())
            .bind(schedule.base_fee)
            .bind(schedule.weight_multiplier)
            .bind(schedule.distance_multiplier)
            .bind(schedule.min_fee)
            .bind(schedule.max_fee)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn set_cost_active(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        zone: DeliveryZoneUuid,
        is_active: bool,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(SET_COST_ACTIVE_SQL)
            .bind(zone.into_uuid())
            .bind(is_active)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for DeliveryCostRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            zone_uuid: DeliveryZoneUuid::from_uuid(row.try_get("zone_uuid")?),
            schedule: FeeSchedule {
                base_fee: row.try_get("base_fee")?,
                weight_multiplier: row.try_get("weight_multiplier")?,
                distance_multiplier: row.try_get("distance_multiplier")?,
                min_fee: row.try_get("min_fee")?,
                max_fee: row.try_get("max_fee")?,
            },
            is_active: row.try_get("is_active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
