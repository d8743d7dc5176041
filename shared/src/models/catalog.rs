//! Product catalog models

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Display metadata for a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub unit: String,
    pub shelf_life_days: u32,
}

/// The product catalog, in feed order
pub type Catalog = IndexMap<ProductId, Product>;
