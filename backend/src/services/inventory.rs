//! Read access to the catalog, stock and forecast feeds

use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use shared::{Catalog, Month, ProductId, StockLevels};

use crate::error::AppResult;
use crate::feeds::FeedStore;

/// Forecast as served to clients: product id to date to predicted quantity
pub type ForecastView = IndexMap<ProductId, IndexMap<NaiveDate, Decimal>>;

/// Inventory service for the raw feeds
#[derive(Clone)]
pub struct InventoryService {
    feeds: FeedStore,
}

impl InventoryService {
    pub fn new(feeds: FeedStore) -> Self {
        Self { feeds }
    }

    /// Get the product catalog
    pub async fn products(&self) -> AppResult<Catalog> {
        Ok(self.feeds.load_catalog().await?)
    }

    /// Get current warehouse stock
    pub async fn stock(&self) -> AppResult<StockLevels> {
        Ok(self.feeds.load_stock().await?)
    }

    /// Get the forecast for a month, flattened to a date map per product
    pub async fn forecast(&self, month: Month) -> AppResult<ForecastView> {
        let forecasts = self.feeds.load_forecast(month).await?;
        Ok(forecasts
            .iter()
            .map(|(product_id, series)| (product_id.clone(), series.by_date()))
            .collect())
    }
}
