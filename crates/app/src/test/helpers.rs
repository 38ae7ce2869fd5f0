//! Test Helpers

use rust_decimal::Decimal;
use waybill::{fees::FeeSchedule, zones::ZoneLocation};

use crate::{
    domain::delivery::{
        DeliveryService, DeliveryServiceError, data::NewDeliveryZone,
        records::{DeliveryZoneRecord, DeliveryZoneUuid},
    },
    test::TestContext,
};

pub(crate) fn schedule(
    base_fee: i64,
    weight_multiplier: i64,
    distance_multiplier: i64,
    min_fee: i64,
    max_fee: i64,
) -> FeeSchedule {
    FeeSchedule {
        base_fee: Decimal::from(base_fee),
        weight_multiplier: Decimal::from(weight_multiplier),
        distance_multiplier: Decimal::from(distance_multiplier),
        min_fee: Decimal::from(min_fee),
        max_fee: Decimal::from(max_fee),
    }
}

pub(crate) async fn create_zone(
    ctx: &TestContext,
    location: ZoneLocation,
) -> Result<DeliveryZoneRecord, DeliveryServiceError> {
    ctx.delivery
        .create_zone(NewDeliveryZone {
            uuid: DeliveryZoneUuid::new(),
            location,
        })
        .await
}

pub(crate) async fn create_priced_zone(
    ctx: &TestContext,
    location: ZoneLocation,
    schedule: FeeSchedule,
) -> Result<DeliveryZoneRecord, DeliveryServiceError> {
    let zone = create_zone(ctx, location).await?;

    ctx.delivery.set_zone_cost(zone.uuid, schedule).await?;

    Ok(zone)
}
