use axum::extract::{rejection::JsonRejection, FromRequest, Request};

use crate::error::AppError;

/// `axum::Json` with the rejection mapped into [`AppError::Validation`], so
/// a malformed body surfaces as 400 like every other validation failure
/// instead of axum's default 422.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(ValidatedJson(value)),
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        }
    }
}
