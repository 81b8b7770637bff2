use std::sync::Arc;

use exampulumi_db::models::item::ItemGateway;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: exampulumi_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Persistence gateway for items, built over `pool`.
    pub items: ItemGateway,
}

impl AppState {
    pub fn new(pool: exampulumi_db::DbPool, config: ServerConfig) -> Self {
        Self {
            items: ItemGateway::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
