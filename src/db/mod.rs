//! Persistence for assignments, enrollments and submissions

pub mod connection;
pub mod repositories;

use sqlx::PgPool;

pub use connection::create_pool;

/// Apply the schema in `migrations/`
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::debug!("Schema up to date");
    Ok(())
}
