use std::sync::Arc;

use backoffice_db::store::{IdentityStore, MenuStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Menu persistence.
    pub menus: Arc<dyn MenuStore>,
    /// Member and authorization group lookups.
    pub identities: Arc<dyn IdentityStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state around a store that serves both menus and identities.
    pub fn new<S>(store: S, config: ServerConfig) -> Self
    where
        S: MenuStore + IdentityStore + Clone + 'static,
    {
        Self {
            menus: Arc::new(store.clone()),
            identities: Arc::new(store),
            config: Arc::new(config),
        }
    }
}
