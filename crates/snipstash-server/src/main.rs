use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use snipstash_server::config::ServerConfig;
use snipstash_server::router;
use snipstash_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env();

    let store = snipstash_storage::init_store(
        &config.store_backend,
        &config.mongo_uri,
        &config.mongo_db,
    )
    .await?;

    let app = router(AppState { store }, &config.allowed_origins);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "snipstash listening");
    axum::serve(listener, app).await?;

    Ok(())
}
