//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through Axum's state
//! extraction. Sessions are not part of the state; they reach handlers through the
//! `SessionManagerLayer` installed in `main`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Clones share the pool.
    pub db: DatabaseConnection,

    /// Token the SSO gateway must present to log a user in.
    pub gateway_token: Arc<str>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, gateway_token: impl Into<Arc<str>>) -> Self {
        Self {
            db,
            gateway_token: gateway_token.into(),
        }
    }
}
