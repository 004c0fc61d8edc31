use clap::{Args, Parser, Subcommand};
use sqlx::PgPool;
use tiffin_app::database;

mod db;
mod tenant;
mod token;

#[derive(Debug, Parser)]
#[command(name = "tiffin-app", about = "Tiffin admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage tenants
    Tenant(tenant::TenantCommand),

    /// Manage API tokens
    Token(token::TokenCommand),

    /// Manage the database schema
    Db(db::DbCommand),
}

/// Connection settings shared by every subcommand.
#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    pub(crate) async fn connect(&self) -> Result<PgPool, String> {
        database::connect(&self.database_url)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))
    }
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Tenant(command) => tenant::run(command).await,
            Commands::Token(command) => token::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}
