//! # Marquee DB
//!
//! Postgres connection pool and embedded migrations for the Marquee API.
//!
//! # Example
//!
//! ```ignore
//! use marquee_db::{init_db_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = init_db_pool(&std::env::var("DATABASE_URL")?).await?;
//!     run_migrations(&pool).await?;
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Connects a Postgres pool to `database_url`.
///
/// The pool is cheaply cloneable and is shared read-only by every request.
pub async fn init_db_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Database pool initialized");
    Ok(pool)
}

/// Builds a pool that only connects when first used.
pub fn lazy_db_pool(database_url: &str) -> anyhow::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(database_url)
        .context("Invalid database URL")
}

/// Applies the migrations embedded from `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations applied");
    Ok(())
}
