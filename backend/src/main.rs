use std::{net::SocketAddr, sync::Arc};

use inventory_planner::{
    clock::SystemClock, config::Config, create_app, feeds::ensure_data_directories, init_tracing,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before tracing so RUST_LOG and INV_LOG_FORMAT apply
    dotenvy::dotenv().ok();
    init_tracing();

    // Load configuration
    let config = Config::load()?;

    tracing::info!("Starting Inventory Planner Server");
    tracing::info!("Environment: {}", config.environment);

    ensure_data_directories(&config.data).await?;
    tracing::info!("Data directory: {}", config.data.dir.display());

    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::new(host, config.server.port);

    // Create application state
    let state = AppState::new(config, Arc::new(SystemClock));

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
