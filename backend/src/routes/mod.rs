//! Route definitions for the inventory planner

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        // Raw feeds
        .route("/products", get(handlers::list_products))
        .route("/warehouse_stock", get(handlers::get_warehouse_stock))
        .route("/forecast", get(handlers::get_forecast))
        // Derived plans
        .route("/orders", get(handlers::get_orders))
        .route("/reports", get(handlers::get_reports))
}
