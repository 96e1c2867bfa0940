use clap::{Args, Subcommand};
use stockroom_app::database::{self, Db};

mod migrate;
mod seed;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Apply pending migrations
    Migrate,

    /// Replace all inventory with random stock for every brand and size
    Seed,
}

pub(crate) async fn run(command: DbCommand) -> Result<(), String> {
    let url = command
        .database_url
        .ok_or_else(|| "DATABASE_URL must be set".to_string())?;

    let pool = database::connect(&url, 1)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    match command.command {
        DbSubcommand::Migrate => migrate::run(&pool).await,
        DbSubcommand::Seed => seed::run(Db::new(pool)).await,
    }
}
