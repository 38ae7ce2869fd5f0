use clap::Args;
use tabled::{
    builder::Builder,
    settings::{Color, Style, object::Rows},
};
use waybill_app::domain::delivery::DeliveryService;

use crate::cli::delivery_service;

#[derive(Debug, Args)]
pub(crate) struct ListZonesArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ListZonesArgs) -> Result<(), String> {
    let service = delivery_service(&args.database_url, None).await?;

    let zones = service
        .list_zones()
        .await
        .map_err(|error| format!("failed to list zones: {error}"))?;

    if zones.is_empty() {
        println!("no active zones");
        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["Zone", "Region", "City", "Commune", "Updated"]);

    for zone in &zones {
        builder.push_record([
            zone.uuid.to_string(),
            zone.region.clone(),
            zone.city.clone(),
            zone.commune.clone().unwrap_or_else(|| "(whole city)".to_string()),
            zone.updated_at.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    println!("{table}");

    Ok(())
}
