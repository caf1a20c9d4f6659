use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::dtos::requests::{ProductCreateRequest, ProductUpdateRequest};
use crate::api::extractors::auth::AuthUser;
use crate::api::extractors::json::ValidatedJson;
use crate::domain::models::user::Role;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/v1/products` — any authenticated role.
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    info!("Retrieving all products");

    let products = state.product_repo.list().await?;
    if products.is_empty() {
        warn!("No products found");
        return Err(AppError::NotFound("No products available".to_string()));
    }

    Ok(Json(products))
}

/// `GET /api/v1/products/{id}` — Viewer or Editor.
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    user.authorize(&[Role::Viewer, Role::Editor])?;

    info!("Retrieving product with ID: {}", id);

    let product = state
        .product_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product with ID {id} not found")))?;

    Ok(Json(product))
}

/// `POST /api/v1/products` — Editor only. 201 with a Location header
/// pointing at the get-by-id route.
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ValidatedJson(payload): ValidatedJson<ProductCreateRequest>,
) -> Result<impl IntoResponse, AppError> {
    user.authorize(&[Role::Editor])?;
    payload.validate()?;

    info!("Attempting to add a new product");

    let product = state
        .product_repo
        .create(payload.product_name.trim(), payload.in_stock, payload.arrival_date)
        .await?;

    info!("Product added successfully with ID: {}", product.id);

    let view = state
        .product_repo
        .find_by_id(product.id)
        .await?
        .ok_or(AppError::Internal)?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/v1/products/{}", product.id))],
        Json(view),
    ))
}

/// `PUT /api/v1/products` — Editor only. Touches only the stock fields;
/// name and date_added are immutable.
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ValidatedJson(payload): ValidatedJson<ProductUpdateRequest>,
) -> Result<impl IntoResponse, AppError> {
    user.authorize(&[Role::Editor])?;

    info!("Attempting to update product with ID: {}", payload.product_id);

    let updated = state
        .product_repo
        .update_stock(payload.product_id, payload.in_stock, payload.arrival_date)
        .await?;

    if !updated {
        warn!("Product with ID: {} not found for update", payload.product_id);
        return Err(AppError::NotFound(format!(
            "Product with ID {} not found",
            payload.product_id
        )));
    }

    info!("Product with ID: {} updated successfully", payload.product_id);

    Ok(StatusCode::NO_CONTENT)
}
