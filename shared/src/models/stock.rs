//! Warehouse stock models

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Coverage horizon used when a product has no stock record
pub const DEFAULT_DAYS_TO_COVER: u32 = 7;

/// Current stock of one product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    /// Units on hand; may be fractional
    pub stock: Decimal,
    /// Number of forecast days an order should satisfy once it arrives
    pub days_to_cover: u32,
}

impl Default for StockLevel {
    fn default() -> Self {
        Self {
            stock: Decimal::ZERO,
            days_to_cover: DEFAULT_DAYS_TO_COVER,
        }
    }
}

/// Stock levels keyed by product, in feed order
pub type StockLevels = IndexMap<ProductId, StockLevel>;
