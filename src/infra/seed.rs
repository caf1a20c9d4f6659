use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
struct SeedProduct {
    product_name: String,
    in_stock: bool,
    arrival_date: Option<DateTime<Utc>>,
}

/// Populates baseline reference data and the two demo accounts on first
/// start. Gated on emptiness, so reruns are no-ops. User inserts are
/// idempotent under concurrent startups; the product check-then-act is a
/// documented single-instance assumption.
pub async fn seed_if_empty(state: &AppState) -> Result<(), AppError> {
    if state.user_repo.count().await? == 0 {
        for (username, password, role) in [
            ("admin", "admin123", "Editor"),
            ("viewer", "viewer123", "Viewer"),
        ] {
            let hash = hash_password(password)?;
            if state.user_repo.insert_if_absent(username, &hash, role).await? {
                info!("Seeded user '{}' with role {}", username, role);
            }
        }
    }

    if state.product_repo.count().await? == 0 {
        let seed_products: Vec<SeedProduct> =
            serde_json::from_str(include_str!("seed_data/products.json"))
                .map_err(|e| {
                    tracing::error!("Invalid product seed data: {}", e);
                    AppError::Internal
                })?;

        let count = seed_products.len();
        for p in seed_products {
            state
                .product_repo
                .create(&p.product_name, p.in_stock, p.arrival_date)
                .await?;
        }
        info!("Seeded {} baseline products", count);
    }

    Ok(())
}

fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string())
}
