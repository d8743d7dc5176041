//! Purchase order plan models

use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Ordered quantity per date for one product.
///
/// Holds one entry per forecast date, in forecast order. Dates without an
/// order carry zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderPlan(IndexMap<NaiveDate, Decimal>);

impl OrderPlan {
    pub fn get(&self, date: &NaiveDate) -> Option<Decimal> {
        self.0.get(date).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &Decimal)> {
        self.0.iter()
    }

    pub fn dates(&self) -> impl Iterator<Item = &NaiveDate> {
        self.0.keys()
    }

    /// Dates that carry a non-zero order
    pub fn order_days(&self) -> impl Iterator<Item = (&NaiveDate, &Decimal)> {
        self.0.iter().filter(|(_, quantity)| !quantity.is_zero())
    }
}

impl From<IndexMap<NaiveDate, Decimal>> for OrderPlan {
    fn from(quantities: IndexMap<NaiveDate, Decimal>) -> Self {
        Self(quantities)
    }
}

/// Order plans keyed by product, in forecast feed order
pub type OrderPlans = IndexMap<ProductId, OrderPlan>;
