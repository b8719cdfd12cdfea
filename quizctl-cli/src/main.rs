//! quizctl - quiz API server
//!
//! Subcommands:
//! - `serve`: run the HTTP API (PostgreSQL or in-memory store)
//! - `migrate`: create the quiz tables and exit

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod env;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "quizctl",
    author,
    version,
    about = "Quiz API server: questions, multiple-choice answers, and answer checks"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.quizctl/config.toml if present)
    #[arg(long, short = 'c', global = true, env = "QUIZCTL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the questions and choices tables if missing
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = env::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    dotenv.log();

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args, cli.config.as_deref()).await?,
        Commands::Migrate(args) => {
            commands::migrate::run_migrate(args, cli.config.as_deref()).await?
        }
    }

    Ok(())
}
