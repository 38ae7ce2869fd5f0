use std::path::Path;

use clap::{Parser, Subcommand};
use waybill::policy::DeliveryPolicy;
use waybill_app::{
    database::{self, Db},
    domain::delivery::PgDeliveryService,
};

mod migrate;
mod quote;
mod zone;

#[derive(Debug, Parser)]
#[command(name = "waybill-app", about = "Waybill delivery administration", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Zone(zone::ZoneCommand),
    Quote(quote::QuoteArgs),
    Migrate(migrate::MigrateArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Zone(command) => zone::run(command).await,
            Commands::Quote(args) => quote::run(args).await,
            Commands::Migrate(args) => migrate::run(args).await,
        }
    }
}

/// Connect and build a delivery service, loading the policy file when one is given.
pub(crate) async fn delivery_service(
    database_url: &str,
    policy_path: Option<&Path>,
) -> Result<PgDeliveryService, String> {
    let policy = match policy_path {
        Some(path) => DeliveryPolicy::from_path(path)
            .map_err(|error| format!("failed to load delivery policy: {error}"))?,
        None => DeliveryPolicy::default(),
    };

    let pool = database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    Ok(PgDeliveryService::new(Db::new(pool), policy))
}
