use std::path::PathBuf;

use clap::Args;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::XAF};
use tabled::{
    builder::Builder,
    settings::{Alignment, Color, Style, object::{Columns, Rows}},
};
use waybill::request::DeliveryRequest;
use waybill_app::domain::delivery::{DeliveryService, ZoneCalculation};

use crate::cli::delivery_service;

#[derive(Debug, Args)]
pub(crate) struct QuoteArgs {
    /// Destination region
    #[arg(long)]
    region: String,

    /// Destination city
    #[arg(long)]
    city: String,

    /// Destination commune
    #[arg(long)]
    commune: Option<String>,

    /// Parcel weight in kilograms
    #[arg(long)]
    weight: Option<Decimal>,

    /// Travel distance in kilometres
    #[arg(long)]
    distance: Option<Decimal>,

    /// YAML delivery policy; built-in defaults when omitted
    #[arg(long, env = "DELIVERY_POLICY_PATH")]
    delivery_policy: Option<PathBuf>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: QuoteArgs) -> Result<(), String> {
    let service = delivery_service(&args.database_url, args.delivery_policy.as_deref()).await?;

    let request = DeliveryRequest {
        region: args.region,
        city: args.city,
        commune: args.commune,
        weight: args.weight,
        distance: args.distance,
    };

    let calculation = service
        .calculate_fee(request)
        .await
        .map_err(|error| format!("failed to quote delivery: {error}"))?;

    println!("{}", render_quote(&calculation));

    Ok(())
}

fn render_quote(calculation: &ZoneCalculation) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Charge", "Amount"]);
    builder.push_record(["Base fee".to_string(), money(calculation.base_fee)]);
    builder.push_record(["Weight fee".to_string(), money(calculation.weight_fee)]);
    builder.push_record(["Distance fee".to_string(), money(calculation.distance_fee)]);
    builder.push_record(["Total".to_string(), money(calculation.total_fee)]);

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Rows::last(), Color::BOLD);
    table.modify(Columns::last(), Alignment::right());

    let destination = match &calculation.commune {
        Some(commune) => format!("{}, {}, {commune}", calculation.region, calculation.city),
        None => format!("{}, {}", calculation.region, calculation.city),
    };

    format!(
        "zone_uuid: {}\ndestination: {destination}\nestimated_days: {}\n{table}",
        calculation.zone_id, calculation.estimated_days
    )
}

fn money(amount: Decimal) -> String {
    Money::from_decimal(amount, XAF).to_string()
}
