// src/main.rs

use dotenvy::dotenv;
use quiz_api::config::Config;
use quiz_api::routes;
use quiz_api::state::AppState;
use quiz_api::store::QuizStore;
use std::net::SocketAddr;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Create AppState with the in-memory quiz store
    let state = AppState {
        store: QuizStore::new(),
        config: config.clone(),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listening address");

    // Start the server
    axum::serve(listener, app)
        .await
        .expect("Server exited with error");
}
