use std::net::SocketAddr;
use std::sync::Arc;

use msru_core::lifecycle::LifecycleHandle;
use msru_directus::{ContentApi, DirectusClient, DirectusConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use msru_api::config::ServerConfig;
use msru_api::router::build_app_router;
use msru_api::startup::spawn_bootstrap;
use msru_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "msru_api=debug,msru_content=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let directus_config = DirectusConfig::from_env();
    tracing::info!(base_url = %directus_config.base_url, "Loaded content service configuration");

    // --- Content service ---
    let client = DirectusClient::new(directus_config).expect("Failed to build content client");
    let content: Arc<dyn ContentApi> = Arc::new(client);

    // --- Bootstrap (runs while the server answers 503) ---
    let lifecycle = LifecycleHandle::new();
    let bootstrap_handle = spawn_bootstrap(Arc::clone(&content), lifecycle.clone());

    // --- App state ---
    let state = AppState {
        content,
        lifecycle,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // Bootstrap is not cancellable; stop waiting on it once the server is down.
    bootstrap_handle.abort();
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
