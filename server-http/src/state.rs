use shared::config::ServerConfig;
use std::sync::Arc;

use crate::accounts::AccountStore;
use crate::store::Database;

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub accounts: Arc<AccountStore>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig, accounts: AccountStore) -> Self {
        Self {
            db: Arc::new(Database::new()),
            accounts: Arc::new(accounts),
            config: Arc::new(config),
        }
    }
}
