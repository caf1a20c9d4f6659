use crate::domain::models::{
    product::{Product, ProductView},
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    /// Seeding path: returns false when the username already exists.
    async fn insert_if_absent(&self, username: &str, password_hash: &str, role: &str) -> Result<bool, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ProductView>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ProductView>, AppError>;
    /// Writes the details row and the product row in one transaction so a
    /// product is never observable without its details.
    async fn create(
        &self,
        name: &str,
        in_stock: bool,
        arrival_date: Option<DateTime<Utc>>,
    ) -> Result<Product, AppError>;
    /// Overwrites only `in_stock` and `arrival_date`. Returns false when the
    /// id does not exist.
    async fn update_stock(
        &self,
        id: i64,
        in_stock: bool,
        arrival_date: Option<DateTime<Utc>>,
    ) -> Result<bool, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}
