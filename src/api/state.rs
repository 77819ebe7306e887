//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Wire the MongoDB-backed repository and service from a live connection.
    pub fn from_database(database: &Database) -> Self {
        let user_repo = Arc::new(UserStore::new(database));
        Self::new(Arc::new(UserManager::new(user_repo)))
    }

    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }
}
