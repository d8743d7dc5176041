//! HTTP handlers for the inventory planner

mod health;
mod inventory;
mod planning;

pub use health::*;
pub use inventory::*;
pub use planning::*;

use serde::{Deserialize, Serialize};
use shared::Month;

use crate::clock::Clock;
use crate::error::AppResult;

/// `?month=YYYY-MM` query parameter
#[derive(Debug, Default, Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}

impl MonthQuery {
    /// Requested month, or the current calendar month when absent or blank
    pub fn resolve(&self, clock: &dyn Clock) -> AppResult<Month> {
        match self.month.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token.parse::<Month>()?),
            _ => Ok(clock.current_month()),
        }
    }
}

/// Response body that is either data or an explanation of why there is none
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    Data(T),
    NoData { message: String },
}

impl<T> Outcome<T> {
    pub fn no_data(message: impl Into<String>) -> Self {
        Outcome::NoData {
            message: message.into(),
        }
    }
}
