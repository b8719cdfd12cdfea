//! Subcommand implementations

pub mod migrate;
pub mod serve;

use clap::Args;
use quizctl_server::DatabaseConfig;

/// Database connection flags shared by `serve` and `migrate`
#[derive(Args, Debug, Default)]
pub struct DbArgs {
    /// Database host
    #[arg(long, env = "QUIZCTL_DB_HOST")]
    pub db_host: Option<String>,

    /// Database port
    #[arg(long, env = "QUIZCTL_DB_PORT")]
    pub db_port: Option<u16>,

    /// Database user
    #[arg(long, env = "QUIZCTL_DB_USER")]
    pub db_user: Option<String>,

    /// Database password
    #[arg(long, env = "QUIZCTL_DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Database name
    #[arg(long, env = "QUIZCTL_DB_NAME")]
    pub db_name: Option<String>,

    /// Maximum pooled connections
    #[arg(long, env = "QUIZCTL_DB_MAX_CONNECTIONS")]
    pub max_connections: Option<u32>,

    /// Full connection string (overrides the discrete fields)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}

impl DbArgs {
    /// Overlay flags and environment variables onto file config.
    pub fn apply(self, db: &mut DatabaseConfig) {
        if let Some(host) = self.db_host {
            db.host = host;
        }
        if let Some(port) = self.db_port {
            db.port = port;
        }
        if let Some(user) = self.db_user {
            db.user = user;
        }
        if let Some(password) = self.db_password {
            db.password = Some(password);
        }
        if let Some(name) = self.db_name {
            db.database = name;
        }
        if let Some(max) = self.max_connections {
            db.max_connections = max;
        }
        if let Some(url) = self.database_url {
            db.url = Some(url);
        }
    }
}
