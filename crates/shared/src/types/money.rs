//! Monetary amount with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal`, which stores an integer mantissa
//! together with an explicit scale.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::currency::CurrencyUnit;
use crate::error::{MoneyError, MoneyResult};

/// An immutable numeric value bound to one currency.
///
/// Operations that derive a new amount always keep the currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonetaryAmount {
    currency: CurrencyUnit,
    number: Decimal,
}

impl MonetaryAmount {
    /// Creates a new amount.
    #[must_use]
    pub const fn new(currency: CurrencyUnit, number: Decimal) -> Self {
        Self { currency, number }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: CurrencyUnit) -> Self {
        Self::new(currency, Decimal::ZERO)
    }

    /// Derives an amount of the same currency with another number.
    #[must_use]
    pub fn with_number(&self, number: Decimal) -> Self {
        Self::new(self.currency.clone(), number)
    }

    /// The currency this amount is bound to.
    pub const fn currency(&self) -> &CurrencyUnit {
        &self.currency
    }

    /// The numeric value.
    pub const fn number(&self) -> Decimal {
        self.number
    }

    /// Number of digits after the decimal point in the stored value.
    pub const fn scale(&self) -> u32 {
        self.number.scale()
    }

    /// Integer part as `i64`, or `None` if it does not fit.
    pub fn to_i64(&self) -> Option<i64> {
        self.number.trunc().to_i64()
    }

    /// Integer part as `i32`, or `None` if it does not fit.
    pub fn to_i32(&self) -> Option<i32> {
        self.number.trunc().to_i32()
    }

    /// Converts the number into any type `rust_decimal` can convert to.
    pub fn number_as<T>(&self) -> Result<T, T::Error>
    where
        T: TryFrom<Decimal>,
    {
        T::try_from(self.number)
    }

    /// Rounds to `decimal_places` with the given strategy.
    #[must_use]
    pub fn with_scale(&self, decimal_places: u32, strategy: RoundingStrategy) -> Self {
        self.with_number(self.number.round_dp_with_strategy(decimal_places, strategy))
    }

    /// Drops the fractional part, rounding toward zero.
    #[must_use]
    pub fn truncate(&self) -> Self {
        self.with_number(self.number.trunc())
    }

    /// Rounds to the currency's fraction digits using Banker's Rounding.
    ///
    /// Amounts whose currency has no fixed minor unit are returned unchanged.
    #[must_use]
    pub fn round_to_currency(&self) -> Self {
        match self.currency.default_fraction_digits() {
            Some(digits) => self.with_scale(digits, RoundingStrategy::MidpointNearestEven),
            None => self.clone(),
        }
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.number.is_zero()
    }

    /// Returns true if the amount is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.number > Decimal::ZERO
    }

    /// Returns true if the amount is less than zero.
    pub fn is_negative(&self) -> bool {
        self.number < Decimal::ZERO
    }

    /// Returns the amount with the sign flipped.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.with_number(-self.number)
    }

    /// Adds an amount of the same currency.
    pub fn checked_add(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        self.number
            .checked_add(other.number)
            .map(|number| self.with_number(number))
            .ok_or_else(|| MoneyError::ArithmeticOverflow(format!("{self} + {other}")))
    }

    /// Subtracts an amount of the same currency.
    pub fn checked_sub(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        self.number
            .checked_sub(other.number)
            .map(|number| self.with_number(number))
            .ok_or_else(|| MoneyError::ArithmeticOverflow(format!("{self} - {other}")))
    }

    fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency.to_string(),
                got: other.currency.to_string(),
            })
        }
    }
}

impl std::fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency, self.number)
    }
}
