//! Shared server state.

use std::sync::Arc;

use sqlbridge_configuration::ServiceConfig;
use sqlbridge_execution::{create_pool, PoolExecutor, QueryExecutor};

/// State shared by every request: the database collaborator, injected
/// at construction rather than reached for as a global.
#[derive(Clone)]
pub struct ServerState {
    pub executor: Arc<dyn QueryExecutor>,
}

impl ServerState {
    pub fn new(executor: Arc<dyn QueryExecutor>) -> Self {
        Self { executor }
    }
}

/// Build the production state: a pool-backed executor over the
/// configured database.
pub fn create_state(config: &ServiceConfig) -> Result<ServerState, sqlx::Error> {
    let pool = create_pool(config.connection_uri.as_str())?;
    Ok(ServerState::new(Arc::new(PoolExecutor::new(pool))))
}
