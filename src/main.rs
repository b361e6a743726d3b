mod model;
mod server;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    scheduler::revocation_prune,
    service::auth::token::TokenAuthority,
    startup,
    state::{AppState, ServiceSettings},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::bootstrap_admin(&db, &config).await?;

    let revocations = startup::build_revocation_store(&config, &db);
    let tokens = TokenAuthority::new(
        config.jwt_secret.as_bytes(),
        config.jwt_algorithm,
        chrono::Duration::minutes(config.access_token_expire_minutes),
    );

    let state = AppState::new(db, tokens, revocations, ServiceSettings::from_config(&config));

    let mut scheduler =
        revocation_prune::start_scheduler(state.revocations.clone(), state.locks.clone()).await?;

    let app = server::router::router()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    scheduler.shutdown().await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
