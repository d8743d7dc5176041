//! Common types used across the platform

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Product identifier as it appears in the feeds (`"1"`, `"42"`)
pub type ProductId = String;

/// Errors raised while parsing a `YYYY-MM` month token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthParseError {
    #[error("month must use the YYYY-MM format, got '{0}'")]
    Format(String),

    #[error("month number must be between 1 and 12, got {0}")]
    OutOfRange(u32),
}

/// A calendar month, addressed by its `YYYY-MM` token
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::OutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// The month a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|next| next - Duration::days(1))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Every calendar date of the month, first to last inclusive
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.first_day()
            .iter_days()
            .take_while(|day| *day <= self.last_day())
            .collect()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_error = || MonthParseError::Format(s.to_string());

        let (year, month) = s.trim().split_once('-').ok_or_else(format_error)?;
        let all_digits = |part: &str, len: usize| {
            part.len() == len && part.chars().all(|c| c.is_ascii_digit())
        };
        if !all_digits(year, 4) || !all_digits(month, 2) {
            return Err(format_error());
        }

        let year: i32 = year.parse().map_err(|_| format_error())?;
        let month: u32 = month.parse().map_err(|_| format_error())?;
        Month::new(year, month)
    }
}

impl TryFrom<String> for Month {
    type Error = MonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.to_string()
    }
}

/// Normalize a product id read from a tabular feed.
///
/// Numeric columns come through as `7`, `7.0` or ` 7 `; all of them
/// identify product `"7"`.
pub fn normalize_product_id(raw: &str) -> Option<ProductId> {
    let trimmed = raw.trim();
    if let Ok(id) = trimmed.parse::<i64>() {
        return Some(id.to_string());
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => Some((value as i64).to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        let month: Month = "2024-03".parse().unwrap();
        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 3);
        assert_eq!(month.to_string(), "2024-03");
    }

    #[test]
    fn test_parse_month_rejects_bad_tokens() {
        assert!(matches!("2024-3".parse::<Month>(), Err(MonthParseError::Format(_))));
        assert!(matches!("202403".parse::<Month>(), Err(MonthParseError::Format(_))));
        assert!(matches!("abcd-ef".parse::<Month>(), Err(MonthParseError::Format(_))));
        assert!(matches!("".parse::<Month>(), Err(MonthParseError::Format(_))));
        assert_eq!(
            "2024-13".parse::<Month>(),
            Err(MonthParseError::OutOfRange(13))
        );
        assert_eq!(
            "2024-00".parse::<Month>(),
            Err(MonthParseError::OutOfRange(0))
        );
    }

    #[test]
    fn test_month_dates_cover_whole_month() {
        let feb_leap: Month = "2024-02".parse().unwrap();
        let dates = feb_leap.dates();
        assert_eq!(dates.len(), 29);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(dates[28], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let feb: Month = "2023-02".parse().unwrap();
        assert_eq!(feb.dates().len(), 28);

        let december: Month = "2023-12".parse().unwrap();
        assert_eq!(december.dates().len(), 31);
        assert_eq!(
            december.last_day(),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_month_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 17).unwrap();
        let month = Month::from_date(date);
        assert_eq!(month.to_string(), "2024-11");
        assert_eq!(month.first_day(), NaiveDate::from_ymd_opt(2024, 11, 1).unwrap());
        assert_eq!(month.last_day(), NaiveDate::from_ymd_opt(2024, 11, 30).unwrap());
    }

    #[test]
    fn test_month_serde_as_token() {
        let month: Month = serde_json::from_str("\"2024-05\"").unwrap();
        assert_eq!(month, Month::new(2024, 5).unwrap());
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"2024-05\"");
        assert!(serde_json::from_str::<Month>("\"May 2024\"").is_err());
    }

    #[test]
    fn test_normalize_product_id() {
        assert_eq!(normalize_product_id("7"), Some("7".to_string()));
        assert_eq!(normalize_product_id(" 7 "), Some("7".to_string()));
        assert_eq!(normalize_product_id("7.0"), Some("7".to_string()));
        assert_eq!(normalize_product_id("007"), Some("7".to_string()));
        assert_eq!(normalize_product_id("7.5"), None);
        assert_eq!(normalize_product_id("milk"), None);
    }
}
