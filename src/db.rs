//! Database bootstrap: pool construction and the startup connection check.

use crate::config::Settings;
use crate::error::AppError;
use crate::store::ensure_products_table;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Build the process-wide pool. Connections are opened on first use, so an
/// unreachable server does not fail here; only a malformed URL does.
pub fn pool(settings: &Settings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_lazy(&settings.database_url)
}

/// Authenticate against the database and create the products table.
///
/// Never fails: errors are logged and `false` is returned so the server keeps
/// accepting requests, which then fail at the persistence layer.
pub async fn connect(pool: &PgPool) -> bool {
    match authenticate(pool).await {
        Ok(()) => {
            tracing::info!("Conexión exitosa a la BD");
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "Hubo un error al conectar a la BD");
            false
        }
    }
}

async fn authenticate(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    ensure_products_table(pool).await
}
