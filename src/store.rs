//! Product persistence: the store trait handlers depend on, its PostgreSQL implementation, and table DDL.
//! Every method issues exactly one statement.

use crate::error::AppError;
use crate::model::{NewProduct, Product, ProductUpdate};
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, name, price, availability";

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Round-trip to the backing store; used by readiness checks.
    async fn ping(&self) -> Result<(), AppError>;

    async fn list(&self) -> Result<Vec<Product>, AppError>;

    async fn get(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Insert with `availability = true`. Returns the stored row, id included.
    async fn create(&self, product: &NewProduct) -> Result<Product, AppError>;

    /// Overwrite name, price and availability. `None` when no row has this id.
    async fn update(&self, id: i64, update: &ProductUpdate) -> Result<Option<Product>, AppError>;

    /// Negate availability in place. `None` when no row has this id.
    async fn toggle_availability(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

/// Create the `products` table if missing.
pub async fn ensure_products_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = r#"
        CREATE TABLE IF NOT EXISTS products (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL CHECK (btrim(name) <> ''),
            price DOUBLE PRECISION NOT NULL CHECK (price > 0),
            availability BOOLEAN NOT NULL DEFAULT TRUE
        )
    "#;
    sqlx::query(ddl).execute(pool).await?;
    Ok(())
}

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        PgProductStore { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let sql = format!("SELECT {} FROM products ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<Product>, AppError> {
        let sql = format!("SELECT {} FROM products WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, AppError> {
        let sql = format!(
            "INSERT INTO products (name, price, availability) VALUES ($1, $2, TRUE) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, name = %product.name, price = product.price, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(&product.name)
            .bind(product.price)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, update: &ProductUpdate) -> Result<Option<Product>, AppError> {
        let sql = format!(
            "UPDATE products SET name = $2, price = $3, availability = $4 WHERE id = $1 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(&update.name)
            .bind(update.price)
            .bind(update.availability)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn toggle_availability(&self, id: i64) -> Result<Option<Product>, AppError> {
        let sql = format!(
            "UPDATE products SET availability = NOT availability WHERE id = $1 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM products WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
