//! HTTP server command

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use quizctl_server::db::{create_pool, schema, MemoryQuizStore, PgQuizStore, QuizStore};
use quizctl_server::http::{run_server, ServerConfig};
use quizctl_server::QuizConfig;

use super::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8000)
    #[arg(long, short = 'b', env = "QUIZCTL_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub request_timeout: Option<u64>,

    /// Keep data in process memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub in_memory: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = QuizConfig::load(config_path).context("Failed to load config")?;

    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if args.cors_permissive {
        config.server.cors_permissive = true;
    }
    if let Some(secs) = args.request_timeout {
        config.server.request_timeout_secs = secs;
    }
    args.db.apply(&mut config.database);

    let store: Arc<dyn QuizStore> = if args.in_memory {
        tracing::warn!("Using in-memory store; data is lost on shutdown");
        Arc::new(MemoryQuizStore::new())
    } else {
        let pool = create_pool(&config.database)
            .await
            .with_context(|| format!("Failed to connect to {}", config.database.describe()))?;

        schema::migrate(&pool)
            .await
            .context("Failed to create quiz tables")?;

        Arc::new(PgQuizStore::new(pool))
    };

    tracing::info!("Starting quizctl server on {}", config.server.bind);

    // Blocks until shutdown
    run_server(store, ServerConfig::from(&config.server))
        .await
        .context("Server error")?;

    Ok(())
}
