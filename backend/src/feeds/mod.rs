//! Read-only data feeds: catalog, stock and monthly forecasts
//!
//! Every load reads its file fresh; nothing is cached between requests.

mod catalog;
mod error;
mod forecast;
mod stock;

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use shared::{Catalog, Forecasts, Month, StockLevels};

use crate::config::DataConfig;

pub use catalog::parse_catalog;
pub use error::FeedError;
pub use forecast::parse_forecast;
pub use stock::parse_stock;

/// File locations of the feeds
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub stock_file: PathBuf,
    pub products_file: PathBuf,
    pub forecast_dir: PathBuf,
}

impl FeedConfig {
    /// Forecast file for a month, e.g. `forecasts/forecast_2024-03.json`
    pub fn forecast_file(&self, month: Month) -> PathBuf {
        self.forecast_dir.join(format!("forecast_{}.json", month))
    }
}

impl From<&DataConfig> for FeedConfig {
    fn from(data: &DataConfig) -> Self {
        Self {
            stock_file: data.stock_file.clone(),
            products_file: data.products_file.clone(),
            forecast_dir: data.forecast_dir.clone(),
        }
    }
}

/// Loads feeds from the configured files
#[derive(Debug, Clone)]
pub struct FeedStore {
    config: Arc<FeedConfig>,
}

impl FeedStore {
    pub fn new(config: FeedConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Load current stock levels
    pub async fn load_stock(&self) -> Result<StockLevels, FeedError> {
        let resource = "stock file";
        let data = read_feed(&self.config.stock_file, resource).await?;
        let levels = parse_stock(&data).map_err(|reason| corrupt(resource, reason))?;

        tracing::debug!(products = levels.len(), "Loaded stock feed");
        Ok(levels)
    }

    /// Load the product catalog
    pub async fn load_catalog(&self) -> Result<Catalog, FeedError> {
        let resource = "catalog file";
        let data = read_feed(&self.config.products_file, resource).await?;
        let catalog = parse_catalog(&data).map_err(|reason| corrupt(resource, reason))?;

        tracing::debug!(products = catalog.len(), "Loaded catalog feed");
        Ok(catalog)
    }

    /// Load the forecast published for `month`
    pub async fn load_forecast(&self, month: Month) -> Result<Forecasts, FeedError> {
        let resource = format!("forecast file for {}", month);
        let data = read_feed(&self.config.forecast_file(month), &resource).await?;
        let forecasts = parse_forecast(&data).map_err(|reason| corrupt(&resource, reason))?;

        tracing::debug!(%month, products = forecasts.len(), "Loaded forecast feed");
        Ok(forecasts)
    }
}

async fn read_feed(path: &Path, resource: &str) -> Result<Vec<u8>, FeedError> {
    match tokio::fs::read(path).await {
        Ok(data) => Ok(data),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "{} is missing", resource);
            Err(FeedError::NotFound(resource.to_string()))
        }
        Err(err) => Err(corrupt(resource, err)),
    }
}

fn corrupt(resource: &str, reason: impl ToString) -> FeedError {
    let err = FeedError::corrupt(resource, reason);
    tracing::warn!("{}", err);
    err
}

/// Create the data and forecast directories if they do not exist yet
pub async fn ensure_data_directories(data: &DataConfig) -> io::Result<()> {
    tokio::fs::create_dir_all(&data.dir).await?;
    tokio::fs::create_dir_all(&data.forecast_dir).await?;
    Ok(())
}
