use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::{requests::LoginRequest, responses::LoginResponse};
use crate::api::extractors::json::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// `POST /api/v1/auth/login`. Returns the token together with the role so
/// clients can gate their UI without decoding the token themselves.
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("Attempting to authenticate user: {}", payload.username);

    let token = state
        .auth_service
        .authenticate(&payload.username, &payload.password)
        .await?;

    // Defensive: the user could in principle vanish between authenticate
    // and this lookup.
    let role = state
        .auth_service
        .role_of(&payload.username)
        .await?
        .map(|r| r.as_str().to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    info!("User {} authenticated successfully", payload.username);

    Ok(Json(LoginResponse { token, role }))
}
