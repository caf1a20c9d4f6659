use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{ProductRepository, UserRepository};
use crate::domain::services::auth_service::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub product_repo: Arc<dyn ProductRepository>,
    pub auth_service: Arc<AuthService>,
}
