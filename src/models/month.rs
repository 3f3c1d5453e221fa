//! Calendar-month key ("YYYY-MM")
//!
//! The reporting collaborator buckets totals by calendar month and labels the
//! buckets with "YYYY-MM" strings, which order correctly under plain string
//! comparison. `Month` keeps that contract while giving the rest of the crate
//! a typed, `Ord` value instead of raw strings.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar month, e.g. 2025-03
///
/// Field order matters: deriving `Ord` on (year, month) matches the
/// lexicographic order of the "YYYY-MM" wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month, returning None for an out-of-range month number
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The twelve months of a calendar year, in chronological order
    ///
    /// This is the month series report callers usually pass to the
    /// aggregator.
    pub fn year_series(year: i32) -> Vec<Self> {
        (1..=12).map(|month| Self { year, month }).collect()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Three-letter label for chart axes and table headers
    pub fn short_label(&self) -> &'static str {
        match self.month {
            1 => "Jan",
            2 => "Feb",
            3 => "Mar",
            4 => "Apr",
            5 => "May",
            6 => "Jun",
            7 => "Jul",
            8 => "Aug",
            9 => "Sep",
            10 => "Oct",
            11 => "Nov",
            _ => "Dec",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    /// Parse a "YYYY-MM" month key
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (year_str, month_str) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year_str
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month_str
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month).ok_or(MonthParseError::InvalidMonth(month))
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MonthVisitor;

        impl Visitor<'_> for MonthVisitor {
            type Value = Month;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a \"YYYY-MM\" month key")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Month, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(MonthVisitor)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let month: Month = "2025-03".parse().unwrap();
        assert_eq!(month.year(), 2025);
        assert_eq!(month.month(), 3);
        assert_eq!(month.to_string(), "2025-03");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("2025".parse::<Month>().is_err());
        assert!("2025-13".parse::<Month>().is_err());
        assert!("2025-00".parse::<Month>().is_err());
        assert!("20xx-01".parse::<Month>().is_err());
    }

    #[test]
    fn test_ord_matches_string_order() {
        let a: Month = "2024-12".parse().unwrap();
        let b: Month = "2025-01".parse().unwrap();
        let c: Month = "2025-02".parse().unwrap();
        assert!(a < b && b < c);
        assert!(a.to_string() < b.to_string() && b.to_string() < c.to_string());
    }

    #[test]
    fn test_year_series() {
        let series = Month::year_series(2025);
        assert_eq!(series.len(), 12);
        assert_eq!(series[0].to_string(), "2025-01");
        assert_eq!(series[11].to_string(), "2025-12");
        assert!(series.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_short_label() {
        let jan: Month = "2025-01".parse().unwrap();
        let dec: Month = "2025-12".parse().unwrap();
        assert_eq!(jan.short_label(), "Jan");
        assert_eq!(dec.short_label(), "Dec");
    }

    #[test]
    fn test_serde_round_trip() {
        let month: Month = "2025-07".parse().unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "\"2025-07\"");
        let back: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(back, month);
    }
}
