//! Inventory Planner - Backend Server
//!
//! Serves the product catalog, warehouse stock and monthly demand forecasts,
//! and derives replenishment orders and shortage reports from them.

use std::sync::Arc;

use axum::{http::Method, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod clock;
pub mod config;
pub mod error;
pub mod feeds;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use clock::Clock;
use feeds::{FeedConfig, FeedStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub feeds: FeedStore,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: Config, clock: Arc<dyn Clock>) -> Self {
        let feeds = FeedStore::new(FeedConfig::from(&config.data));
        Self {
            config: Arc::new(config),
            feeds,
            clock,
        }
    }
}

/// Initialize tracing; `INV_LOG_FORMAT=json` switches to JSON lines
pub fn init_tracing() {
    let json = std::env::var("INV_LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inventory_planner=debug,tower_http=debug".into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
