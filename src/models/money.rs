//! Money type for representing monetary amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues during aggregation. On the wire (report files, chart rows) amounts
//! travel as plain decimal numbers (`120.5` is one hundred twenty and a half
//! currency units), so serde converts between the two forms.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// A monetary amount stored as cents (hundredths of the currency unit)
///
/// The reporting collaborator emits totals as decimal numbers with at most
/// two fractional digits; anything finer is rounded half-away-from-zero on
/// the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole-unit portion (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        let remainder = self.0 % 100;
        if remainder < 0 {
            -remainder
        } else {
            remainder
        }
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is strictly positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The amount as a decimal number of currency units
    ///
    /// This is the wire form and is also what percentage/bar math uses;
    /// exactness is not required there.
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Build from a decimal number of currency units, rounding to cents
    pub fn from_decimal(value: f64) -> Self {
        Self((value * 100.0).round() as i64)
    }

    /// Divide by a count, rounding to the nearest cent
    ///
    /// Used for averages; `divisor` is clamped to at least 1 so an empty
    /// series averages to the total itself rather than dividing by zero.
    pub fn divide_by(&self, divisor: usize) -> Self {
        let divisor = divisor.max(1) as i64;
        // Round half away from zero to keep income/expense symmetric.
        let cents = self.0;
        let quotient = (2 * cents + cents.signum() * divisor) / (2 * divisor);
        Self(quotient)
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.major().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.major(), self.cents_part())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.major().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.major(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MoneyVisitor;

        impl Visitor<'_> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal amount of currency units")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
                v.checked_mul(100)
                    .map(Money::from_cents)
                    .ok_or_else(|| E::custom("amount out of range"))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
                i64::try_from(v)
                    .ok()
                    .and_then(|units| units.checked_mul(100))
                    .map(Money::from_cents)
                    .ok_or_else(|| E::custom("amount out of range"))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
                if v.is_finite() {
                    Ok(Money::from_decimal(v))
                } else {
                    Err(E::custom("amount must be finite"))
                }
            }
        }

        deserializer.deserialize_any(MoneyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.major(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(1050).format_with_symbol("$"), "$10.50");
        assert_eq!(Money::from_cents(-75).format_with_symbol("€"), "-€0.75");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
    }

    #[test]
    fn test_divide_by() {
        assert_eq!(Money::from_cents(30000).divide_by(2).cents(), 15000);
        // 100.00 / 3 = 33.3333... -> 33.33
        assert_eq!(Money::from_cents(10000).divide_by(3).cents(), 3333);
        // 0.05 / 2 = 0.025 -> rounds away from zero to 0.03
        assert_eq!(Money::from_cents(5).divide_by(2).cents(), 3);
        assert_eq!(Money::from_cents(-5).divide_by(2).cents(), -3);
        // Divisor clamped to 1
        assert_eq!(Money::from_cents(700).divide_by(0).cents(), 700);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_deserialize_wire_forms() {
        // Integers are whole units, floats are decimal units
        assert_eq!(serde_json::from_str::<Money>("120").unwrap().cents(), 12000);
        assert_eq!(
            serde_json::from_str::<Money>("120.5").unwrap().cents(),
            12050
        );
        // Sub-cent precision rounds to the nearest cent
        assert_eq!(
            serde_json::from_str::<Money>("0.005").unwrap().cents(),
            1
        );
        assert!(serde_json::from_str::<Money>("\"120\"").is_err());
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_integers() {
        // 92233720368547758 whole units is the largest amount that still
        // fits in cents.
        assert_eq!(
            serde_json::from_str::<Money>("92233720368547758")
                .unwrap()
                .cents(),
            9223372036854775800
        );
        assert!(serde_json::from_str::<Money>("92233720368547759").is_err());
        assert!(serde_json::from_str::<Money>("-92233720368547759").is_err());
        assert!(serde_json::from_str::<Money>("9223372036854775807").is_err());
        assert!(serde_json::from_str::<Money>("18446744073709551615").is_err());
    }

    #[test]
    fn test_serialize_as_decimal() {
        let json = serde_json::to_string(&Money::from_cents(12050)).unwrap();
        assert_eq!(json, "120.5");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cents(), 12050);
    }
}
