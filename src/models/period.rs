//! Summary period granularity
//!
//! A [`Period`] maps a transaction date to an integer bucket: the ISO-8601
//! week number, the calendar month, or the calendar year.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity used when grouping transactions into summary rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// ISO-8601 week of the year (1-53)
    Week,
    /// Calendar month (1-12)
    #[default]
    Month,
    /// Calendar year
    Year,
}

impl Period {
    /// Get all periods in order of increasing span
    pub fn all() -> &'static [Self] {
        &[Self::Week, Self::Month, Self::Year]
    }

    /// Bucket key for a date under this period
    ///
    /// Weeks follow ISO-8601: 2024-12-30 falls in week 1 (of 2025) and
    /// 2021-01-01 falls in week 53 (of 2020). Only the week number is kept.
    pub fn bucket(&self, date: NaiveDate) -> i32 {
        match self {
            Self::Week => date.iso_week().week() as i32,
            Self::Month => date.month() as i32,
            Self::Year => date.year(),
        }
    }

    /// Human label, e.g. "Week"
    pub fn label(&self) -> &'static str {
        match self {
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
            Self::Year => write!(f, "year"),
        }
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" | "weekly" => Ok(Self::Week),
            "month" | "monthly" => Ok(Self::Month),
            "year" | "yearly" => Ok(Self::Year),
            _ => Err(PeriodParseError(s.to_string())),
        }
    }
}

/// Error returned when a period name is not week, month or year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodParseError(pub String);

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid period '{}' (expected week, month or year)", self.0)
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_and_year_buckets() {
        let d = date(2024, 1, 15);
        assert_eq!(Period::Month.bucket(d), 1);
        assert_eq!(Period::Year.bucket(d), 2024);
        assert_eq!(Period::Month.bucket(date(2024, 12, 31)), 12);
    }

    #[test]
    fn test_iso_week_year_boundary() {
        // Monday 2024-12-30 starts ISO week 1 of 2025
        assert_eq!(Period::Week.bucket(date(2024, 12, 30)), 1);
        assert_eq!(Period::Week.bucket(date(2024, 12, 31)), 1);
        assert_eq!(Period::Week.bucket(date(2025, 1, 1)), 1);
        // Friday 2021-01-01 still belongs to ISO week 53 of 2020
        assert_eq!(Period::Week.bucket(date(2021, 1, 1)), 53);
        assert_eq!(Period::Week.bucket(date(2020, 12, 31)), 53);
        // Sunday 2023-01-01 is in week 52 of 2022
        assert_eq!(Period::Week.bucket(date(2023, 1, 1)), 52);
        assert_eq!(Period::Week.bucket(date(2023, 1, 2)), 1);
    }

    #[test]
    fn test_parse() {
        assert_eq!("week".parse::<Period>().unwrap(), Period::Week);
        assert_eq!("Month".parse::<Period>().unwrap(), Period::Month);
        assert_eq!(" YEAR ".parse::<Period>().unwrap(), Period::Year);
        assert!("quarter".parse::<Period>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for period in Period::all() {
            assert_eq!(period.to_string().parse::<Period>().unwrap(), *period);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Period::Week).unwrap(), "\"week\"");
        let p: Period = serde_json::from_str("\"year\"").unwrap();
        assert_eq!(p, Period::Year);
    }
}
