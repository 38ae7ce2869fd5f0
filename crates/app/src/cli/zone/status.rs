use clap::Args;
use uuid::Uuid;
use waybill_app::domain::delivery::DeliveryService;

use crate::cli::delivery_service;

#[derive(Debug, Args)]
pub(crate) struct ZoneStatusArgs {
    /// Zone to update
    #[arg(long)]
    zone_uuid: Uuid,

    /// Change the zone's pricing instead of the zone itself
    #[arg(long)]
    cost: bool,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ZoneStatusArgs, is_active: bool) -> Result<(), String> {
    let service = delivery_service(&args.database_url, None).await?;
    let zone = args.zone_uuid.into();

    let (target, result) = if args.cost {
        ("cost", service.set_cost_active(zone, is_active).await)
    } else {
        ("zone", service.set_zone_active(zone, is_active).await)
    };

    result.map_err(|error| format!("failed to update {target} status: {error}"))?;

    println!("zone_uuid: {}", args.zone_uuid);
    println!("{target}_is_active: {is_active}");

    Ok(())
}
