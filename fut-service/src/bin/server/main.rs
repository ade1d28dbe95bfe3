use std::sync::Arc;
use std::time::Duration;

use auth::TokenIssuer;
use auth::TokenVerifier;
use fut_service::config::Config;
use fut_service::domain::credential::service::AuthService;
use fut_service::inbound::http::router::create_router;
use fut_service::outbound::football::FootballDataClient;
use fut_service::outbound::repositories::PostgresCredentialStore;
use sqlx::postgres::PgPoolOptions;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fut_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "fut-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_lifetime_minutes = config.jwt.expiration_minutes,
        store_timeout_ms = config.store.timeout_millis,
        football_base_url = %config.football.base_url,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pg_pool).await?;
        tracing::info!(database = "postgresql", "Database migrations completed");
    }

    let shutdown = CancellationToken::new();

    let secret = config.jwt.secret.as_bytes();
    let token_issuer = TokenIssuer::new(secret, config.jwt.token_lifetime());
    let token_verifier = Arc::new(TokenVerifier::new(secret));
    let credential_store = Arc::new(PostgresCredentialStore::new(pg_pool.clone()));
    let football_client = Arc::new(FootballDataClient::from_config(&config.football)?);

    let auth_service = Arc::new(
        AuthService::new(credential_store, token_issuer)
            .with_store_timeout(config.store.timeout())
            .with_cancellation(shutdown.clone()),
    );

    let http_address = format!("{}:{}", config.server.host, config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, token_verifier, football_client);

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    pg_pool.close().await;
    tracing::info!("Server exited successfully");

    Ok(())
}

async fn shutdown_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping...");
    shutdown.cancel();
}
