use server_http::accounts::AccountStore;
use server_http::{build_router, AppState};
use shared::config::ServerConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEMO_CUSTOMERS: usize = 25;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file (if exists)
    let dotenv = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server_http=info,tower_http=info".into()),
        )
        .init();

    info!("Starting transportadora reference backend...");
    match dotenv {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    // Load configuration from environment variables
    let config = ServerConfig::from_env();
    let addr = config.bind_addr();

    // Initialize state
    let state = AppState::new(config, AccountStore::demo(DEMO_CUSTOMERS));

    // Build router
    let router = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("HTTP Server listening on http://{}", addr);
    info!("Try: curl http://{}/api/estados", addr);

    // Graceful shutdown handler
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    info!("Server shutdown complete.");
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }

    info!("Shutting down gracefully...");
}
