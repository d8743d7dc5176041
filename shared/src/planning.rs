//! Replenishment order planning
//!
//! Simulates day-by-day depletion of current stock against forecast demand.
//! Whenever simulated stock drops below zero on some day, an order is
//! recorded on the previous forecast day, sized to the demand of the next
//! `days_to_cover` forecast days starting at the shortfall day. The order is
//! added back into simulated stock and the simulation continues.

use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{ForecastPoint, Forecasts, OrderPlan, OrderPlans, StockLevels};
use crate::types::ProductId;

/// Stock and demand of a product whose difference `Decimal` cannot hold
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("quantities for product {0} exceed the supported range")]
pub struct QuantityOverflow(pub ProductId);

/// Plan replenishment orders for one product.
///
/// Every forecast date appears in the plan. A shortfall on the first
/// forecast day has no earlier day to order on and stays unplanned. When two
/// shortfalls map to the same order day the later one overwrites the earlier
/// one; with a [`ForecastSeries`](crate::models::ForecastSeries) this cannot
/// happen since its dates are unique. A `days_to_cover` of zero is treated
/// as one.
///
/// Returns `None` when the simulated stock or an order leaves the range of
/// `Decimal`.
pub fn plan_orders(
    current_stock: Decimal,
    days_to_cover: u32,
    forecast: &[ForecastPoint],
) -> Option<OrderPlan> {
    let window = days_to_cover.max(1) as usize;

    let mut orders: IndexMap<NaiveDate, Decimal> = forecast
        .iter()
        .map(|point| (point.date, Decimal::ZERO))
        .collect();

    let mut stock = current_stock;
    for (i, point) in forecast.iter().enumerate() {
        stock = stock.checked_sub(point.predicted_quantity)?;

        if stock < Decimal::ZERO && i > 0 {
            let order_day = forecast[i - 1].date;
            let window_end = (i + window).min(forecast.len());
            let total_demand = forecast[i..window_end]
                .iter()
                .try_fold(Decimal::ZERO, |sum, p| sum.checked_add(p.predicted_quantity))?;

            orders.insert(order_day, total_demand);
            stock = stock.checked_add(total_demand)?;
        }
    }

    Some(OrderPlan::from(orders))
}

/// Plan orders for every product of a forecast feed.
///
/// Products with an empty forecast are skipped. Products without a stock
/// record plan from zero stock with the default coverage horizon.
pub fn plan_all_orders(
    stock_levels: &StockLevels,
    forecasts: &Forecasts,
) -> Result<OrderPlans, QuantityOverflow> {
    forecasts
        .iter()
        .filter(|(_, series)| !series.is_empty())
        .map(|(product_id, series)| {
            let level = stock_levels.get(product_id).copied().unwrap_or_default();
            let plan = plan_orders(level.stock, level.days_to_cover, series)
                .ok_or_else(|| QuantityOverflow(product_id.clone()))?;
            Ok((product_id.clone(), plan))
        })
        .collect()
}
