use clap::Args;
use uuid::Uuid;
use waybill::zones::ZoneLocation;
use waybill_app::domain::delivery::{DeliveryService, data::NewDeliveryZone};

use crate::cli::delivery_service;

#[derive(Debug, Args)]
pub(crate) struct CreateZoneArgs {
    /// Region name
    #[arg(long)]
    region: String,

    /// City name within the region
    #[arg(long)]
    city: String,

    /// Commune name within the city; the zone covers the whole city when omitted
    #[arg(long)]
    commune: Option<String>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional zone UUID; generated when omitted
    #[arg(long)]
    zone_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateZoneArgs) -> Result<(), String> {
    let service = delivery_service(&args.database_url, None).await?;

    let zone = service
        .create_zone(NewDeliveryZone {
            uuid: args.zone_uuid.unwrap_or_else(Uuid::now_v7).into(),
            location: ZoneLocation::new(args.region, args.city, args.commune),
        })
        .await
        .map_err(|error| format!("failed to create zone: {error}"))?;

    println!("zone_uuid: {}", zone.uuid);
    println!("location: {}", zone.location());
    println!("is_active: {}", zone.is_active);
    println!("pricing is not configured yet; set it with `zone cost`");

    Ok(())
}
