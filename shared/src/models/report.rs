//! Shortage report models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product whose demand over the report period exceeds its stock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortageEntry {
    pub name: String,
    /// Demand not covered by current stock; always positive
    #[serde(rename = "quantity")]
    pub required_quantity: Decimal,
    pub unit: String,
}
