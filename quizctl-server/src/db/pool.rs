//! Database connection pool management
//!
//! The pool is the per-request session factory: every store call checks a
//! connection out and the guard returns it when dropped, on success and
//! error paths alike.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the options are invalid or the first connection
/// cannot be established.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::default()).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = config.connect_options()?;

    tracing::info!(
        target_db = %config.describe(),
        max_connections = config.max_connections,
        "Connecting to database"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p quizctl-server -- --ignored

    fn test_config() -> DatabaseConfig {
        DatabaseConfig {
            url: Some(std::env::var("DATABASE_URL").expect("DATABASE_URL required")),
            ..DatabaseConfig::default()
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let pool = create_pool(&test_config()).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn invalid_url_is_rejected_before_connecting() {
        let config = DatabaseConfig {
            url: Some("not a connection string".into()),
            ..DatabaseConfig::default()
        };
        assert!(create_pool(&config).await.is_err());
    }
}
