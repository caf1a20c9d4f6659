use crate::domain::{
    models::product::{Product, ProductDetails, ProductView},
    ports::ProductRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

pub struct SqliteProductRepo {
    pool: SqlitePool,
}

impl SqliteProductRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepo {
    async fn list(&self) -> Result<Vec<ProductView>, AppError> {
        sqlx::query_as::<_, ProductView>(
            "SELECT p.id, d.name, p.in_stock, p.date_added, p.arrival_date \
             FROM products p JOIN product_details d ON d.code = p.details_code \
             ORDER BY p.id ASC",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductView>, AppError> {
        sqlx::query_as::<_, ProductView>(
            "SELECT p.id, d.name, p.in_stock, p.date_added, p.arrival_date \
             FROM products p JOIN product_details d ON d.code = p.details_code \
             WHERE p.id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create(
        &self,
        name: &str,
        in_stock: bool,
        arrival_date: Option<DateTime<Utc>>,
    ) -> Result<Product, AppError> {
        // Details first to obtain its generated code, product second; one
        // transaction so the FK can never dangle.
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let details = sqlx::query_as::<_, ProductDetails>(
            "INSERT INTO product_details (name) VALUES (?) RETURNING code, name",
        )
            .bind(name)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (details_code, date_added, in_stock, arrival_date) \
             VALUES (?, ?, ?, ?) \
             RETURNING id, details_code, date_added, in_stock, arrival_date",
        )
            .bind(details.code)
            .bind(Utc::now())
            .bind(in_stock)
            .bind(arrival_date)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(product)
    }

    async fn update_stock(
        &self,
        id: i64,
        in_stock: bool,
        arrival_date: Option<DateTime<Utc>>,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE products SET in_stock = ?, arrival_date = ? WHERE id = ?",
        )
            .bind(in_stock)
            .bind(arrival_date)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(result.rows_affected() == 1)
    }

    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
