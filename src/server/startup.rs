use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use sea_orm::{DatabaseConnection, DbErr};
use tower_http::cors::{Any, CorsLayer};
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{config::Config, error::AppError};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Connect and acquire timeouts come from `DATABASE_TIMEOUT_SECS`; a call that runs into them
/// fails like any other storage error.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let timeout = Duration::from_secs(config.database_timeout_secs);

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.connect_timeout(timeout)
        .acquire_timeout(timeout)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions live in their own table of the same Sqlite pool and expire after
/// `SESSION_INACTIVITY_DAYS` without a request.
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store
        .migrate()
        .await
        .map_err(|e| DbErr::Custom(e.to_string()))?;

    Ok(SessionManagerLayer::new(store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            config.session_inactivity_days,
        ))))
}

/// Builds the CORS layer from the configured origin allow-list.
///
/// Without configured origins any origin may call the API, but the browser will not send the
/// session cookie. With an allow-list, only the listed origins are accepted and credentials
/// are allowed.
pub fn build_cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods([
        Method::GET,
        Method::POST,
        Method::PATCH,
        Method::DELETE,
        Method::OPTIONS,
    ]);

    if config.cors_allowed_origins.is_empty() {
        tracing::info!("CORS: allowing any origin without credentials");
        return cors.allow_origin(Any).allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    tracing::info!(origins = ?config.cors_allowed_origins, "CORS: allowing configured origins");

    cors.allow_origin(origins)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}
