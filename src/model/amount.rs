//! Amount type for handling rupee values entered by the user or read from disk.
//!
//! This module provides the `Amount` type which wraps `Decimal` and handles
//! parsing values that may or may not include a rupee sign and commas.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Represents a rupee amount.
///
/// This type wraps `Decimal` and parses leniently: an optional `₹` prefix and
/// thousands-separator commas are stripped, and input that still fails to parse — or
/// parses negative — coerces to zero instead of producing an error. Amounts render as
/// `₹1,234.56`.
///
/// # Examples
///
/// Parsing with a rupee sign:
/// ```
/// # use spendwise::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("₹1,250.50").unwrap();
/// assert_eq!(amount.to_string(), "₹1,250.50");
/// ```
///
/// Malformed input coerces to zero:
/// ```
/// # use spendwise::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("twelve").unwrap();
/// assert!(amount.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    value: Decimal,
}

impl Amount {
    /// Creates a new Amount from a Decimal value.
    pub const fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.value().is_zero()
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && self.value().is_sign_positive()
    }

    /// Returns true if the amount is negative. Parsed amounts are never negative, but
    /// derived figures such as savings can be.
    pub fn is_negative(&self) -> bool {
        self.value().is_sign_negative() && !self.is_zero()
    }
}

/// Negative input coerces to zero: user-entered amounts and limits are non-negative.
fn coerce_non_negative(value: Decimal) -> Decimal {
    if value.is_sign_negative() {
        Decimal::ZERO
    } else {
        value
    }
}

impl FromStr for Amount {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let without_sign = trimmed
            .strip_prefix('₹')
            .or_else(|| trimmed.strip_prefix("Rs."))
            .unwrap_or(trimmed)
            .trim_start();

        // Remove commas (thousand separators)
        let without_commas = without_sign.replace(',', "");

        let value = Decimal::from_str(&without_commas).unwrap_or_default();
        Ok(Amount::new(coerce_non_negative(value)))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sign, num) = if self.is_negative() {
            ("-", self.value().abs())
        } else {
            ("", self.value())
        };
        write!(
            f,
            "{sign}₹{}",
            format_num::format_num!(",.2", num.to_f64().unwrap_or_default())
        )
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Serialize as a string with the rupee sign
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Scanner results carry bare JSON numbers; our own documents carry the
        // formatted string.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => {
                let value = Decimal::from_f64(n).unwrap_or_default();
                Ok(Amount::new(coerce_non_negative(value)))
            }
            Raw::Text(s) => Ok(Amount::from_str(&s).unwrap_or_default()),
        }
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Self) -> Self::Output {
        Amount::new(self.value() + rhs.value())
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount::new(self.value() - rhs.value())
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        Amount::new(iter.map(|a| a.value()).sum())
    }
}
