//! Validation utilities for feed records

use crate::models::{Product, StockLevel};

/// Validate the coverage horizon of a stock record
pub fn validate_days_to_cover(days_to_cover: u32) -> Result<(), &'static str> {
    if days_to_cover < 1 {
        return Err("days_to_cover must be at least 1");
    }
    Ok(())
}

/// Validate a stock record
pub fn validate_stock_level(level: &StockLevel) -> Result<(), &'static str> {
    validate_days_to_cover(level.days_to_cover)
}

/// Validate catalog metadata for a product
pub fn validate_product(product: &Product) -> Result<(), &'static str> {
    if product.name.trim().is_empty() {
        return Err("Product name cannot be empty");
    }
    if product.unit.trim().is_empty() {
        return Err("Product unit cannot be empty");
    }
    Ok(())
}
