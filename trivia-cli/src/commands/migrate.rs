//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool, migrations};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Create tables only, without seeding categories
    #[arg(long)]
    pub no_seed: bool,
}

/// Create the trivia tables and seed categories
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool, !args.no_seed)
        .await
        .context("Failed to run migrations")?;

    pool.close().await;
    Ok(())
}
