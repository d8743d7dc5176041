//! HTTP handlers for catalog, stock and forecast endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use shared::{Catalog, StockLevels};

use crate::error::AppResult;
use crate::handlers::MonthQuery;
use crate::services::inventory::{ForecastView, InventoryService};
use crate::AppState;

/// List the product catalog
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Catalog>> {
    let service = InventoryService::new(state.feeds);
    let catalog = service.products().await?;
    Ok(Json(catalog))
}

/// Get current warehouse stock
pub async fn get_warehouse_stock(State(state): State<AppState>) -> AppResult<Json<StockLevels>> {
    let service = InventoryService::new(state.feeds);
    let stock = service.stock().await?;
    Ok(Json(stock))
}

/// Get the demand forecast for a month
pub async fn get_forecast(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<ForecastView>> {
    let month = query.resolve(state.clock.as_ref())?;
    let service = InventoryService::new(state.feeds);
    let forecast = service.forecast(month).await?;
    Ok(Json(forecast))
}
