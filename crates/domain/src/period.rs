//! Billing period — a calendar month written as `YYYY-MM`.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A billing month such as `2024-01`.
///
/// Stored as a validated first-of-month date so ordering and formatting are
/// always consistent with the `yearmonth` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    /// Build a period from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Month`] when `month` is outside `1..=12` or
    /// `year` is outside `0..=9999`.
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        if !(0..=9999).contains(&year) {
            return Err(ValidationError::Month);
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or(ValidationError::Month)
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (year, month) = s.split_once('-').ok_or(ValidationError::Month)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(ValidationError::Month);
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::Month);
        }
        let year = year.parse().map_err(|_| ValidationError::Month)?;
        let month = month.parse().map_err(|_| ValidationError::Month)?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_canonical_month() {
        let period: YearMonth = "2024-01".parse().unwrap();
        assert_eq!(period.year(), 2024);
        assert_eq!(period.month(), 1);
        assert_eq!(period.to_string(), "2024-01");
    }

    #[test]
    fn should_reject_malformed_months() {
        for input in ["", "2024", "2024-1", "2024-13", "2024-00", "24-01", "2024/01", "abcd-ef", "2024-01-15"] {
            assert_eq!(
                YearMonth::from_str(input),
                Err(ValidationError::Month),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn should_order_chronologically() {
        let dec: YearMonth = "2023-12".parse().unwrap();
        let jan: YearMonth = "2024-01".parse().unwrap();
        assert!(dec < jan);
    }

    #[test]
    fn should_serialize_as_string() {
        let period = YearMonth::new(2024, 3).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, "\"2024-03\"");
        let parsed: YearMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, period);
    }
}
