//! Purchase order planning and shortage reporting

use shared::{build_report, plan_all_orders, Month, OrderPlans, QuantityOverflow, ShortageEntry};

use crate::error::AppResult;
use crate::feeds::{FeedError, FeedStore};

/// Planning service deriving orders and shortages from the feeds
#[derive(Clone)]
pub struct PlanningService {
    feeds: FeedStore,
}

impl PlanningService {
    pub fn new(feeds: FeedStore) -> Self {
        Self { feeds }
    }

    /// Plan replenishment orders for every forecast product of `month`
    pub async fn orders(&self, month: Month) -> AppResult<OrderPlans> {
        let stock_levels = self.feeds.load_stock().await?;
        let forecasts = self.feeds.load_forecast(month).await?;

        let plans = plan_all_orders(&stock_levels, &forecasts).map_err(out_of_range)?;
        tracing::info!(
            %month,
            products = plans.len(),
            ordering = plans.values().filter(|plan| plan.order_days().next().is_some()).count(),
            "Planned orders"
        );
        Ok(plans)
    }

    /// Products whose demand over `month` exceeds current stock
    pub async fn shortages(&self, month: Month) -> AppResult<Vec<ShortageEntry>> {
        let stock_levels = self.feeds.load_stock().await?;
        let forecasts = self.feeds.load_forecast(month).await?;
        let catalog = self.feeds.load_catalog().await?;

        let report = build_report(&month.dates(), &stock_levels, &forecasts, &catalog)
            .map_err(out_of_range)?;
        tracing::info!(%month, shortages = report.len(), "Built shortage report");
        Ok(report)
    }
}

/// Forecast series totals are bounded when loaded, so only a stock level
/// can push the arithmetic out of range.
fn out_of_range(err: QuantityOverflow) -> FeedError {
    tracing::warn!("{}", err);
    FeedError::corrupt("stock file", err)
}
