//! WebAssembly module for the inventory planner
//!
//! Provides client-side computation for:
//! - What-if order planning against an edited forecast
//! - Calendar dates of a report month

use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

pub use shared::models::*;
pub use shared::types::*;

/// Plan orders for one product.
///
/// `forecast_json` is the feed's list of `{date, predicted_quantity}`
/// objects. Returns the plan as a JSON object of date to ordered quantity.
#[wasm_bindgen]
pub fn plan_orders_json(
    current_stock: f64,
    days_to_cover: u32,
    forecast_json: &str,
) -> Result<String, JsValue> {
    plan_orders_inner(current_stock, days_to_cover, forecast_json)
        .map_err(|e| JsValue::from_str(&e))
}

/// Every date of a `YYYY-MM` month as `YYYY-MM-DD` strings
#[wasm_bindgen]
pub fn month_dates(month: &str) -> Result<js_sys::Array, JsValue> {
    let dates = month_dates_inner(month).map_err(|e| JsValue::from_str(&e))?;
    Ok(dates.into_iter().map(JsValue::from).collect())
}

fn plan_orders_inner(
    current_stock: f64,
    days_to_cover: u32,
    forecast_json: &str,
) -> Result<String, String> {
    let stock = Decimal::try_from(current_stock)
        .map_err(|e| format!("Invalid stock value: {}", e))?;
    let points: Vec<ForecastPoint> = serde_json::from_str(forecast_json)
        .map_err(|e| format!("Invalid forecast JSON: {}", e))?;
    let series = ForecastSeries::new(points).map_err(|e| format!("Invalid forecast: {}", e))?;

    let plan = shared::plan_orders(stock, days_to_cover, &series)
        .ok_or_else(|| "Quantities exceed the supported range".to_string())?;
    serde_json::to_string(&plan).map_err(|e| e.to_string())
}

fn month_dates_inner(month: &str) -> Result<Vec<String>, String> {
    let month: Month = month.parse().map_err(|e: MonthParseError| e.to_string())?;
    Ok(month
        .dates()
        .iter()
        .map(|date| date.format("%Y-%m-%d").to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_orders_inner() {
        let forecast = r#"[
            {"date": "2024-03-01", "predicted_quantity": 4},
            {"date": "2024-03-02", "predicted_quantity": 4},
            {"date": "2024-03-03", "predicted_quantity": 4},
            {"date": "2024-03-04", "predicted_quantity": 4}
        ]"#;
        let plan: serde_json::Value =
            serde_json::from_str(&plan_orders_inner(10.0, 3, forecast).unwrap()).unwrap();

        assert_eq!(plan["2024-03-02"].as_f64(), Some(8.0));
        assert_eq!(plan["2024-03-04"].as_f64(), Some(0.0));
    }

    #[test]
    fn test_plan_orders_inner_rejects_bad_input() {
        assert!(plan_orders_inner(10.0, 3, "not json").is_err());
        assert!(plan_orders_inner(f64::NAN, 3, "[]").is_err());

        let unordered = r#"[
            {"date": "2024-03-02", "predicted_quantity": 1},
            {"date": "2024-03-01", "predicted_quantity": 1}
        ]"#;
        let err = plan_orders_inner(10.0, 3, unordered).unwrap_err();
        assert!(err.starts_with("Invalid forecast:"));
    }

    #[test]
    fn test_plan_orders_inner_reports_overflow() {
        let forecast = r#"[{"date": "2024-03-01", "predicted_quantity": 5e28}]"#;
        let err = plan_orders_inner(-5e28, 3, forecast).unwrap_err();
        assert_eq!(err, "Quantities exceed the supported range");

        let doubled = r#"[
            {"date": "2024-03-01", "predicted_quantity": 5e28},
            {"date": "2024-03-02", "predicted_quantity": 5e28}
        ]"#;
        let err = plan_orders_inner(0.0, 3, doubled).unwrap_err();
        assert!(err.starts_with("Invalid forecast:"));
    }

    #[test]
    fn test_month_dates_inner() {
        let dates = month_dates_inner("2024-02").unwrap();
        assert_eq!(dates.len(), 29);
        assert_eq!(dates[0], "2024-02-01");
        assert_eq!(dates[28], "2024-02-29");
        assert!(month_dates_inner("Feb").is_err());
    }
}
