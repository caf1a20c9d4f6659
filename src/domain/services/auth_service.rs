use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::config::Config;
use crate::domain::models::{auth::Claims, user::{Role, User}};
use crate::domain::ports::UserRepository;
use crate::error::AppError;

pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    config: Config,
    encoding_key: EncodingKey,
}

impl AuthService {
    pub fn new(user_repo: Arc<dyn UserRepository>, config: Config) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        Self { user_repo, config, encoding_key }
    }

    /// Verifies the credentials and issues a signed token carrying the
    /// user's role. Unknown username and wrong password are deliberately
    /// indistinguishable: same error, no log line for either.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or(AppError::Unauthorized)?;

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|_| AppError::Internal)?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AppError::Unauthorized)?;

        self.issue_token(&user)
    }

    /// Role lookup for the login response. `None` stands for a user that
    /// vanished between authenticate and lookup; not expected in normal
    /// operation.
    pub async fn role_of(&self, username: &str) -> Result<Option<Role>, AppError> {
        let user = self.user_repo.find_by_username(username).await?;
        Ok(user.map(|u| u.role))
    }

    fn issue_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now + Duration::hours(self.config.token_expiration_hours);

        let claims = Claims {
            iss: self.config.jwt_issuer.clone(),
            sub: user.username.clone(),
            aud: self.config.jwt_audience.clone(),
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
            role: user.role,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                tracing::error!("JWT encoding failed: {}", e);
                AppError::Internal
            })
    }
}
