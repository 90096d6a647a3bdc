//! HTTP server command for the trivia API

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{
    create_pool_with_options, migrations, CatalogStore, MemoryStore, PgStore,
    DEFAULT_MAX_CONNECTIONS,
};
use trivia_server::models::PageMode;
use trivia_server::{run_server, CategoryCheck, RouteOptions, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Serve from an in-memory store instead of Postgres (data is lost on exit)
    #[arg(long)]
    pub in_memory: bool,

    /// Skip seeding the default categories
    #[arg(long)]
    pub no_seed: bool,

    /// Paging for GET /questions: full or windowed
    #[arg(long, env = "TRIVIA_LIST_QUESTIONS_PAGING", default_value = "full")]
    pub paging: PageMode,

    /// Category reference check on add: strict or permissive
    #[arg(long, env = "TRIVIA_CATEGORY_CHECK", default_value = "strict")]
    pub category_check: CategoryCheck,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn CatalogStore> = if args.in_memory {
        tracing::warn!("Using in-memory store - data will not persist");
        if args.no_seed {
            Arc::new(MemoryStore::new())
        } else {
            Arc::new(MemoryStore::seeded())
        }
    } else {
        let database_url = args
            .database_url
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        let pool = create_pool_with_options(&database_url, args.max_connections)
            .await
            .context("Failed to create database pool")?;

        migrations::run(&pool, !args.no_seed)
            .await
            .context("Failed to run migrations")?;

        Arc::new(PgStore::new(pool))
    };

    let config = ServerConfig {
        bind_addr: args.bind,
        routes: RouteOptions {
            list_questions: args.paging,
            category_check: args.category_check,
        },
    };

    tracing::info!("Starting trivia server on {}", args.bind);

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
