//! HTTP handlers for order planning and shortage reports

use axum::{
    extract::{Query, State},
    Json,
};
use shared::{OrderPlans, ShortageEntry};

use crate::error::AppResult;
use crate::handlers::{MonthQuery, Outcome};
use crate::services::PlanningService;
use crate::AppState;

/// Plan replenishment orders for a month
pub async fn get_orders(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<Outcome<OrderPlans>>> {
    let month = query.resolve(state.clock.as_ref())?;
    let service = PlanningService::new(state.feeds);
    let plans = service.orders(month).await?;

    if plans.is_empty() {
        return Ok(Json(Outcome::no_data(format!(
            "No order data for {}",
            month
        ))));
    }
    Ok(Json(Outcome::Data(plans)))
}

/// Get the shortage report for a month
pub async fn get_reports(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<Outcome<Vec<ShortageEntry>>>> {
    let month = query.resolve(state.clock.as_ref())?;
    let service = PlanningService::new(state.feeds);
    let report = service.shortages(month).await?;

    if report.is_empty() {
        return Ok(Json(Outcome::no_data(format!(
            "No report data for {}",
            month
        ))));
    }
    Ok(Json(Outcome::Data(report)))
}
