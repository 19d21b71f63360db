//! Database adapters (connection pool + schema bootstrap).

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::instrument;

const SCHEMA: &str = include_str!("../sql/schema.sql");

/// Open a Postgres connection pool.
#[instrument(skip(database_url), err)]
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    tracing::info!(max_connections, "connected to postgres");
    Ok(pool)
}

/// Create the `items` table if it does not exist yet.
#[instrument(skip(pool), err)]
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}
