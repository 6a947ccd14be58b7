//! HTTP server command for the expense API
//!
//! Runs the expensectl HTTP server with the expense, upload and teardown routes.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser};

use expensectl_server::config::DEFAULT_PG_PORT;
use expensectl_server::db::{create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
use expensectl_server::uploads::DEFAULT_UPLOADS_DIR;
use expensectl_server::{run_server, AppState, ServerConfig, StoreConfig, UploadStore};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "EXPENSECTL_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Directory uploaded images are written to (created if missing)
    #[arg(long, env = "EXPENSECTL_UPLOADS_DIR", default_value = DEFAULT_UPLOADS_DIR)]
    pub uploads_dir: PathBuf,

    /// Maximum number of pooled store connections
    #[arg(long, env = "EXPENSECTL_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Store connection parameters
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Full connection string; overrides the --pg-* options
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Store host
    #[arg(long, env = "PGHOST", default_value = "localhost")]
    pub pg_host: String,

    /// Store port
    #[arg(long, env = "PGPORT", default_value_t = DEFAULT_PG_PORT)]
    pub pg_port: u16,

    /// Store user
    #[arg(long, env = "PGUSER", default_value = "postgres")]
    pub pg_user: String,

    /// Store password
    #[arg(long, env = "PGPASSWORD", default_value = "", hide_env_values = true)]
    pub pg_password: String,

    /// Store database name
    #[arg(long, env = "PGDATABASE", default_value = "postgres")]
    pub pg_database: String,
}

impl From<StoreArgs> for StoreConfig {
    fn from(args: StoreArgs) -> Self {
        Self {
            database_url: args.database_url.filter(|url| !url.is_empty()),
            host: args.pg_host,
            port: args.pg_port,
            user: args.pg_user,
            password: args.pg_password,
            database: args.pg_database,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store = StoreConfig::from(args.store);
    let options = store
        .connect_options()
        .context("Invalid store connection settings")?;

    tracing::info!(
        store = %store.display_target(),
        max_connections = args.max_connections,
        "Store connections open on first use"
    );
    let pool = create_pool_with_options(options, args.max_connections);

    let state = AppState::new(pool, UploadStore::new(args.uploads_dir));
    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Run server (blocks until shutdown)
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
