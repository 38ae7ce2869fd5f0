use clap::{Args, Subcommand};

mod cost;
mod create;
mod delete;
mod list;
mod status;

#[derive(Debug, Args)]
pub(crate) struct ZoneCommand {
    #[command(subcommand)]
    command: ZoneSubcommand,
}

#[derive(Debug, Subcommand)]
enum ZoneSubcommand {
    Create(create::CreateZoneArgs),
    List(list::ListZonesArgs),
    Cost(cost::SetZoneCostArgs),
    Activate(status::ZoneStatusArgs),
    Deactivate(status::ZoneStatusArgs),
    Delete(delete::DeleteZoneArgs),
}

pub(crate) async fn run(command: ZoneCommand) -> Result<(), String> {
    match command.command {
        ZoneSubcommand::Create(args) => create::run(args).await,
        ZoneSubcommand::List(args) => list::run(args).await,
        ZoneSubcommand::Cost(args) => cost::run(args).await,
        ZoneSubcommand::Activate(args) => status::run(args, true).await,
        ZoneSubcommand::Deactivate(args) => status::run(args, false).await,
        ZoneSubcommand::Delete(args) => delete::run(args).await,
    }
}
