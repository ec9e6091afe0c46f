mod model;
mod server;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let cors = startup::build_cors_layer(&config);

    let app = router::router()
        .with_state(AppState::new(db, config.sso_gateway_token.as_str()))
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!(addr = %config.bind_addr, "Starting server");

    axum::serve(listener, app).await?;

    Ok(())
}
