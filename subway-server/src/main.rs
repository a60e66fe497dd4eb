use subway_server::config::ServerConfig;
use subway_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Controlled via RUST_LOG, e.g. RUST_LOG=subway_server=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("subway_server=info,tower_http=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(2);
        }
    };

    // Build app state
    let state = AppState::default();

    // Create router
    let app = create_router(state);

    // Bind and serve
    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %config.addr, "failed to bind: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!("Subway server listening on http://{}", config.addr);
    tracing::info!("API Endpoints:");
    tracing::info!("  GET|POST          /stations");
    tracing::info!("  DELETE            /stations/:id");
    tracing::info!("  GET|POST          /lines");
    tracing::info!("  GET|PUT|DELETE    /lines/:id");
    tracing::info!("  POST              /lines/:id/sections");
    tracing::info!("  DELETE            /lines/:id/sections?stationId=");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
