use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub jwt_audience: String,
    pub token_expiration_hours: i64,
}

impl Config {
    /// Missing signing material is a startup failure, never a per-request one.
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_issuer: env::var("JWT_ISSUER").expect("JWT_ISSUER must be set"),
            jwt_audience: env::var("JWT_AUDIENCE").expect("JWT_AUDIENCE must be set"),
            token_expiration_hours: env::var("TOKEN_EXPIRATION_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
        }
    }
}
