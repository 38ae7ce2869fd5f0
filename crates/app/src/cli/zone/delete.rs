use clap::Args;
use uuid::Uuid;
use waybill_app::domain::delivery::DeliveryService;

use crate::cli::delivery_service;

#[derive(Debug, Args)]
pub(crate) struct DeleteZoneArgs {
    /// Zone to delete along with its pricing
    #[arg(long)]
    zone_uuid: Uuid,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: DeleteZoneArgs) -> Result<(), String> {
    let service = delivery_service(&args.database_url, None).await?;

    service
        .delete_zone(args.zone_uuid.into())
        .await
        .map_err(|error| format!("failed to delete zone: {error}"))?;

    println!("deleted zone {}", args.zone_uuid);

    Ok(())
}
