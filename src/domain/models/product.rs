use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Immutable descriptive half of the aggregate. Created once per product,
/// never touched by updates.
#[derive(Debug, Clone, FromRow)]
pub struct ProductDetails {
    pub code: i64,
    pub name: String,
}

/// Mutable stock record. `details_code` and `date_added` are fixed at
/// creation; only `in_stock` and `arrival_date` ever change.
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    pub details_code: i64,
    pub date_added: DateTime<Utc>,
    pub in_stock: bool,
    pub arrival_date: Option<DateTime<Utc>>,
}

/// Projection of a product joined with its details, as returned to clients.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub in_stock: bool,
    pub date_added: DateTime<Utc>,
    pub arrival_date: Option<DateTime<Utc>>,
}
