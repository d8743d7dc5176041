//! Shortage reporting over a date range

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Catalog, Forecasts, ShortageEntry, StockLevels};
use crate::planning::QuantityOverflow;

/// Build the shortage report for `date_range`.
///
/// Walks products in stock feed order. A product is reported when it has a
/// forecast, appears in the catalog, and its demand over `date_range`
/// exceeds its current stock. `date_range` must be sorted ascending.
pub fn build_report(
    date_range: &[NaiveDate],
    stock_levels: &StockLevels,
    forecasts: &Forecasts,
    catalog: &Catalog,
) -> Result<Vec<ShortageEntry>, QuantityOverflow> {
    let mut report = Vec::new();
    for (product_id, level) in stock_levels {
        let Some(series) = forecasts.get(product_id) else {
            continue;
        };
        let required_quantity = series
            .demand_within(date_range)
            .checked_sub(level.stock)
            .ok_or_else(|| QuantityOverflow(product_id.clone()))?;
        if required_quantity <= Decimal::ZERO {
            continue;
        }

        if let Some(product) = catalog.get(product_id) {
            report.push(ShortageEntry {
                name: product.name.clone(),
                required_quantity,
                unit: product.unit.clone(),
            });
        }
    }
    Ok(report)
}
