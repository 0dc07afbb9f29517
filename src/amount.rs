//! Fixed-point currency amount with 2 decimal places.
//!
//! Uses `rust_decimal` internally with scale enforcement so that totals
//! computed from statement lines compare exactly against the issuer's
//! printed figures.

use crate::error::ReconcileError;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// A signed currency value that always carries exactly 2 decimal places.
///
/// Positive values are charges, negative values are credits or payments.
///
/// # Examples
///
/// ```
/// use statement_reconciler::Amount;
///
/// let amount = Amount::parse_statement("($1,234.5)").unwrap();
/// assert_eq!(amount.to_string(), "-1234.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates a new `Amount` from a `Decimal`, normalizing to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value;
        normalized.rescale(Self::SCALE);
        Amount(normalized)
    }

    /// Creates an amount from a whole number of cents.
    pub fn from_cents(cents: i64) -> Self {
        Amount(Decimal::new(cents, Self::SCALE))
    }

    /// Parses an amount the way it is printed on a statement.
    ///
    /// Strips `,` thousands separators and a `$` currency symbol; a token
    /// wrapped in parentheses is negated.
    pub fn parse_statement(token: &str) -> Result<Self, ReconcileError> {
        let trimmed = token.trim();
        let (inner, negative) = match trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
        {
            Some(inner) => (inner, true),
            None => (trimmed, false),
        };

        let cleaned: String = inner.chars().filter(|c| *c != ',' && *c != '$').collect();
        let value = Decimal::from_str(&cleaned).map_err(|_| ReconcileError::InvalidAmount {
            token: token.to_string(),
        })?;

        Ok(Amount::new(if negative { -value } else { value }))
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` for charges (strictly greater than zero).
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Amount(self.0.abs())
    }

    /// The underlying decimal value.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Amount::new(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount::new(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.0.rescale(Self::SCALE);
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount::new(self.0 - rhs.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
        self.0.rescale(Self::SCALE);
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Amount(-self.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, |acc, a| acc + a)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    /// Accepts either a JSON string or a JSON number.
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let decimal = <Decimal as Deserialize>::deserialize(deserializer)?;
        Ok(Amount::new(decimal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_normalizes_scale() {
        assert_eq!(Amount::from_str("1").unwrap().to_string(), "1.00");
        assert_eq!(Amount::from_str("1.5").unwrap().to_string(), "1.50");
        assert_eq!(Amount::from_str("  2.25  ").unwrap().to_string(), "2.25");
    }

    #[test]
    fn test_parse_statement_plain_and_grouped() {
        assert_eq!(Amount::parse_statement("75.00").unwrap(), Amount::from_cents(7500));
        assert_eq!(
            Amount::parse_statement("2,348.84").unwrap(),
            Amount::from_cents(234_884)
        );
        assert_eq!(
            Amount::parse_statement("1,000,000").unwrap(),
            Amount::from_cents(100_000_000)
        );
    }

    #[test]
    fn test_parse_statement_currency_symbol() {
        assert_eq!(Amount::parse_statement("$14.16").unwrap(), Amount::from_cents(1416));
        assert_eq!(
            Amount::parse_statement("-$3,463.00").unwrap(),
            Amount::from_cents(-346_300)
        );
    }

    #[test]
    fn test_parse_statement_parentheses_negate() {
        assert_eq!(
            Amount::parse_statement("(3,463.00)").unwrap(),
            Amount::from_cents(-346_300)
        );
        assert_eq!(Amount::parse_statement("($5)").unwrap(), Amount::from_cents(-500));
    }

    #[test]
    fn test_parse_statement_rejects_text() {
        assert!(matches!(
            Amount::parse_statement("BC"),
            Err(ReconcileError::InvalidAmount { .. })
        ));
        assert!(Amount::parse_statement("").is_err());
    }

    #[test]
    fn test_arithmetic_preserves_scale() {
        let a = Amount::from_str("1.5").unwrap();
        let b = Amount::from_str("2.25").unwrap();

        assert_eq!((a + b).to_string(), "3.75");
        assert_eq!((a - b).to_string(), "-0.75");
        assert_eq!((-(a - b)).to_string(), "0.75");
        assert_eq!((a - b).abs(), Amount::from_cents(75));
    }

    #[test]
    fn test_sum_and_sign_helpers() {
        let amounts = [Amount::from_cents(7500), Amount::from_cents(2500)];
        let total: Amount = amounts.iter().sum();
        assert_eq!(total.to_string(), "100.00");

        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::ZERO.is_positive());
        assert!(Amount::from_cents(1).is_positive());
        assert!(!Amount::from_cents(-1).is_positive());
    }

    #[test]
    fn test_serde_string_and_number() {
        let json = serde_json::to_string(&Amount::from_cents(5936)).unwrap();
        assert_eq!(json, "\"59.36\"");

        let from_str: Amount = serde_json::from_str("\"0.01\"").unwrap();
        let from_num: Amount = serde_json::from_str("0.01").unwrap();
        assert_eq!(from_str, Amount::from_cents(1));
        assert_eq!(from_num, Amount::from_cents(1));
    }

    #[test]
    fn test_deserialize_rescales_to_cents() {
        let whole: Amount = serde_json::from_str("5").unwrap();
        assert_eq!(whole.to_string(), "5.00");

        let fields: Vec<Amount> = serde_json::from_str(r#"["1.5", 2.25]"#).unwrap();
        assert_eq!(fields, vec![Amount::from_cents(150), Amount::from_cents(225)]);
    }
}
