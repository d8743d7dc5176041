//! Forecast feed parsing (`forecast_YYYY-MM.json`)

use indexmap::IndexMap;
use serde::Deserialize;
use shared::{ForecastPoint, ForecastSeries, Forecasts};

#[derive(Debug, Deserialize)]
struct ForecastRecord {
    #[serde(default)]
    forecast: Vec<ForecastPoint>,
}

/// Parse a monthly forecast document keyed by product id
pub fn parse_forecast(data: &[u8]) -> Result<Forecasts, String> {
    let records: IndexMap<String, ForecastRecord> =
        serde_json::from_slice(data).map_err(|e| e.to_string())?;

    records
        .into_iter()
        .map(|(product_id, record)| {
            let series = ForecastSeries::new(record.forecast)
                .map_err(|e| format!("product {}: {}", product_id, e))?;
            Ok((product_id, series))
        })
        .collect()
}
