//! Schema migration command

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use quizctl_server::db::{create_pool, schema};
use quizctl_server::QuizConfig;

use super::DbArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

/// Create quiz tables and exit
pub async fn run_migrate(args: MigrateArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = QuizConfig::load(config_path).context("Failed to load config")?;
    args.db.apply(&mut config.database);

    let pool = create_pool(&config.database)
        .await
        .with_context(|| format!("Failed to connect to {}", config.database.describe()))?;

    schema::migrate(&pool)
        .await
        .context("Failed to create quiz tables")?;

    pool.close().await;
    Ok(())
}
