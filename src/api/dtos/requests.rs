use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::AppError;

pub const MAX_PRODUCT_NAME_LEN: usize = 20;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ProductCreateRequest {
    pub product_name: String,
    pub in_stock: bool,
    pub arrival_date: Option<DateTime<Utc>>,
}

impl ProductCreateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_product_name(&self.product_name)
    }
}

#[derive(Deserialize)]
pub struct ProductUpdateRequest {
    pub product_id: i64,
    pub in_stock: bool,
    pub arrival_date: Option<DateTime<Utc>>,
}

fn validate_product_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("Product name is required.".to_string()));
    }
    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(AppError::Validation(format!(
            "Product name cannot exceed {MAX_PRODUCT_NAME_LEN} characters."
        )));
    }
    Ok(())
}
