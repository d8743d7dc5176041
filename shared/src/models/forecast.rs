//! Demand forecast models

use std::ops::Deref;

use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::ProductId;

/// Predicted demand for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted_quantity: Decimal,
}

impl ForecastPoint {
    pub fn new(date: NaiveDate, predicted_quantity: Decimal) -> Self {
        Self {
            date,
            predicted_quantity,
        }
    }
}

/// Reasons a sequence of points is not a valid forecast series
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("dates must be ascending: {next} follows {previous}")]
    OutOfOrder {
        previous: NaiveDate,
        next: NaiveDate,
    },

    #[error("duplicate forecast date {0}")]
    DuplicateDate(NaiveDate),

    #[error("predicted quantity for {date} is negative ({quantity})")]
    NegativeQuantity { date: NaiveDate, quantity: Decimal },

    #[error("total predicted quantity exceeds the supported range")]
    TotalOverflow,
}

/// Forecast points for one product, strictly ascending by date.
///
/// Quantities are non-negative and their total is representable, so any sum
/// over a subset of the points is too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ForecastSeries(Vec<ForecastPoint>);

impl ForecastSeries {
    pub fn new(points: Vec<ForecastPoint>) -> Result<Self, SeriesError> {
        let mut total = Decimal::ZERO;
        for point in &points {
            if point.predicted_quantity < Decimal::ZERO {
                return Err(SeriesError::NegativeQuantity {
                    date: point.date,
                    quantity: point.predicted_quantity,
                });
            }
            total = total
                .checked_add(point.predicted_quantity)
                .ok_or(SeriesError::TotalOverflow)?;
        }
        for pair in points.windows(2) {
            let (previous, next) = (pair[0].date, pair[1].date);
            if next == previous {
                return Err(SeriesError::DuplicateDate(next));
            }
            if next < previous {
                return Err(SeriesError::OutOfOrder { previous, next });
            }
        }
        Ok(Self(points))
    }

    pub fn points(&self) -> &[ForecastPoint] {
        &self.0
    }

    /// Total predicted demand over the points whose date is in `date_range`.
    ///
    /// `date_range` must be sorted ascending.
    pub fn demand_within(&self, date_range: &[NaiveDate]) -> Decimal {
        self.0
            .iter()
            .filter(|point| date_range.binary_search(&point.date).is_ok())
            .map(|point| point.predicted_quantity)
            .sum()
    }

    /// Date to predicted quantity, in series order
    pub fn by_date(&self) -> IndexMap<NaiveDate, Decimal> {
        self.0
            .iter()
            .map(|point| (point.date, point.predicted_quantity))
            .collect()
    }
}

impl Deref for ForecastSeries {
    type Target = [ForecastPoint];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Vec<ForecastPoint>> for ForecastSeries {
    type Error = SeriesError;

    fn try_from(points: Vec<ForecastPoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

/// Forecast series keyed by product, in feed order
pub type Forecasts = IndexMap<ProductId, ForecastSeries>;
