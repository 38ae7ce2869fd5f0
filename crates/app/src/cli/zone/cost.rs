use clap::Args;
use rust_decimal::Decimal;
use uuid::Uuid;
use waybill::fees::FeeSchedule;
use waybill_app::domain::delivery::DeliveryService;

use crate::cli::delivery_service;

#[derive(Debug, Args)]
pub(crate) struct SetZoneCostArgs {
    /// Zone to price
    #[arg(long)]
    zone_uuid: Uuid,

    /// Flat charge applied to every delivery
    #[arg(long)]
    base_fee: Decimal,

    /// Charge per kilogram above the free weight
    #[arg(long, default_value_t = Decimal::ZERO)]
    weight_multiplier: Decimal,

    /// Charge per kilometre above the free distance
    #[arg(long, default_value_t = Decimal::ZERO)]
    distance_multiplier: Decimal,

    /// Lowest total fee
    #[arg(long, default_value_t = Decimal::ZERO)]
    min_fee: Decimal,

    /// Highest total fee
    #[arg(long)]
    max_fee: Decimal,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: SetZoneCostArgs) -> Result<(), String> {
    let service = delivery_service(&args.database_url, None).await?;

    let schedule = FeeSchedule {
        base_fee: args.base_fee,
        weight_multiplier: args.weight_multiplier,
        distance_multiplier: args.distance_multiplier,
        min_fee: args.min_fee,
        max_fee: args.max_fee,
    };

    let cost = service
        .set_zone_cost(args.zone_uuid.into(), schedule)
        .await
        .map_err(|error| format!("failed to set zone cost: {error}"))?;

    println!("zone_uuid: {}", cost.zone_uuid);
    println!("base_fee: {}", cost.schedule.base_fee);
    println!("weight_multiplier: {}", cost.schedule.weight_multiplier);
    println!("distance_multiplier: {}", cost.schedule.distance_multiplier);
    println!("min_fee: {}", cost.schedule.min_fee);
    println!("max_fee: {}", cost.schedule.max_fee);
    println!("is_active: {}", cost.is_active);

    Ok(())
}
