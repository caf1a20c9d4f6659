use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, StatusCode},
};
use chrono::Utc;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::sync::Arc;

use crate::domain::models::{auth::Claims, user::Role};
use crate::error::AppError;
use crate::state::AppState;
use tracing::Span;

/// Authenticated caller, extracted from the `Authorization: Bearer` header.
/// Signature, expiry, issuer and audience are all checked here; role checks
/// happen per endpoint via [`AuthUser::authorize`].
pub struct AuthUser {
    pub username: String,
    pub role: Role,
}

impl AuthUser {
    /// Role-gate for a single operation. The allowed set is declared at the
    /// call site so the policy stays visible next to the handler.
    pub fn authorize(&self, allowed: &[Role]) -> Result<(), AppError> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            Err(AppError::Forbidden(format!(
                "role '{}' may not perform this operation",
                self.role.as_str()
            )))
        }
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(StatusCode::UNAUTHORIZED)?
            .to_str()
            .map_err(|_| StatusCode::UNAUTHORIZED)?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let decoding_key = DecodingKey::from_secret(app_state.config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[&app_state.config.jwt_issuer]);
        validation.set_audience(&[&app_state.config.jwt_audience]);

        let token_data = decode::<Claims>(token, &decoding_key, &validation)
            .map_err(|_| StatusCode::UNAUTHORIZED)?;

        // Expiry is a closed bound: the token is invalid from the exp
        // instant itself, not one second later.
        if token_data.claims.exp as i64 <= Utc::now().timestamp() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        Span::current().record("username", token_data.claims.sub.as_str());

        Ok(AuthUser {
            username: token_data.claims.sub,
            role: token_data.claims.role,
        })
    }
}
