//! Monetary amounts in integer minor units.
//!
//! Balances and amounts are kept as `i64` cents so that repeated deposits and
//! withdrawals never drift the way binary floating point does. `Decimal` is
//! only used at the edges: parsing amounts out of JSON and rendering them back.
//!
//! For example:
//! - 10.50 is stored as 1050 cents
//! - 500 is stored as 50000 cents

use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Number of minor units in one major unit.
const MINOR_UNITS: i64 = 100;

/// Reasons an amount could not be turned into `Cents`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// Value is not a number or a numeric string.
    #[error("amount is not a number")]
    NotANumber,

    /// Value has finer precision than one cent.
    #[error("amount has more than two decimal places")]
    TooPrecise,

    /// Value does not fit in the minor-unit range.
    #[error("amount is out of range")]
    OutOfRange,
}

/// An amount of money counted in cents.
///
/// May be negative as a parsed request value; the account store refuses
/// non-positive amounts and never lets a balance drop below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cents(i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, other: Cents) -> Option<Cents> {
        self.0.checked_add(other.0).map(Cents)
    }


    /// Convert a major-unit decimal into cents, rejecting sub-cent precision.
    pub fn from_decimal(amount: Decimal) -> Result<Self, AmountError> {
        let scaled = amount
            .checked_mul(Decimal::from(MINOR_UNITS))
            .ok_or(AmountError::OutOfRange)?;

        if !scaled.fract().is_zero() {
            return Err(AmountError::TooPrecise);
        }

        scaled.to_i64().map(Cents).ok_or(AmountError::OutOfRange)
    }

    /// Major-unit value, e.g. `Cents(55000)` becomes `550`.
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2).normalize()
    }

    /// Parse the `amount` field of a request body.
    ///
    /// Accepts JSON numbers and strings holding a decimal literal. Booleans,
    /// arrays, objects and `null` are rejected.
    pub fn from_json(value: &Value) -> Result<Self, AmountError> {
        match value {
            Value::Number(number) => number.to_string().parse(),
            Value::String(text) => text.parse(),
            _ => Err(AmountError::NotANumber),
        }
    }
}

impl FromStr for Cents {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // serde_json renders large and tiny floats in exponent form
        let amount = Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map_err(|_| AmountError::NotANumber)?;

        Self::from_decimal(amount)
    }
}

impl Sub for Cents {
    type Output = Cents;

    fn sub(self, other: Cents) -> Cents {
        Cents(self.0 - other.0)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

/// Rendered as a plain JSON number in major units.
impl Serialize for Cents {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.to_decimal(), serializer)
    }
}
