//! Minor part extraction.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use moneta_shared::{MonetaryAmount, MoneyError, MoneyResult};

use super::MonetaryFunction;

/// Extracts the fractional remainder left after major part truncation.
///
/// `CHF 2.35` becomes `CHF 0.35` and `BHD -1.345` becomes `BHD -0.345`.
/// Counted in minor units these are `35` and `-345`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinorPart;

impl MinorPart {
    /// Returns the operator.
    #[must_use]
    pub const fn of() -> Self {
        Self
    }

    /// The fractional remainder as an amount in the same currency.
    #[must_use]
    pub fn from_amount(amount: &MonetaryAmount) -> MonetaryAmount {
        amount.with_number(amount.number().fract())
    }

    /// The remainder in minor units as `i64`.
    ///
    /// Minor units follow the currency's default fraction digits, or the
    /// amount's scale when the currency has none. Extra digits are truncated.
    pub fn from_as_long(amount: &MonetaryAmount) -> MoneyResult<i64> {
        minor_units(amount)?
            .to_i64()
            .ok_or_else(|| overflow(amount, "i64"))
    }

    /// The remainder in minor units as `i32`.
    pub fn from_as_integer(amount: &MonetaryAmount) -> MoneyResult<i32> {
        minor_units(amount)?
            .to_i32()
            .ok_or_else(|| overflow(amount, "i32"))
    }
}

fn minor_units(amount: &MonetaryAmount) -> MoneyResult<Decimal> {
    let digits = amount
        .currency()
        .default_fraction_digits()
        .unwrap_or_else(|| amount.scale());
    (0..digits)
        .try_fold(amount.number().fract(), |acc, _| acc.checked_mul(Decimal::TEN))
        .map(|units| units.trunc())
        .ok_or_else(|| overflow(amount, "minor units"))
}

fn overflow(amount: &MonetaryAmount, target: &str) -> MoneyError {
    MoneyError::ArithmeticOverflow(format!("minor part of {amount} does not fit into {target}"))
}

impl MonetaryFunction<MonetaryAmount, MonetaryAmount> for MinorPart {
    fn apply(&self, amount: &MonetaryAmount) -> MonetaryAmount {
        Self::from_amount(amount)
    }
}

impl std::fmt::Display for MinorPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MinorPart [MonetaryAmount -> MonetaryAmount]")
    }
}
