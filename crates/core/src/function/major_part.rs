//! Major part extraction.

use moneta_shared::{MonetaryAmount, MoneyError, MoneyResult};

use super::MonetaryFunction;

/// Extracts the major units of an amount, truncating toward zero.
///
/// `CHF 2.35` becomes `CHF 2` and `BHD -1.345` becomes `BHD -1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MajorPart;

impl MajorPart {
    /// Returns the operator.
    #[must_use]
    pub const fn of() -> Self {
        Self
    }

    /// The major part as an amount of scale 0 in the same currency.
    #[must_use]
    pub fn from_amount(amount: &MonetaryAmount) -> MonetaryAmount {
        amount.truncate()
    }

    /// The major part as `i64`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if the value does not fit.
    pub fn from_as_long(amount: &MonetaryAmount) -> MoneyResult<i64> {
        amount.to_i64().ok_or_else(|| overflow(amount, "i64"))
    }

    /// The major part as `i32`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if the value does not fit.
    pub fn from_as_integer(amount: &MonetaryAmount) -> MoneyResult<i32> {
        amount.to_i32().ok_or_else(|| overflow(amount, "i32"))
    }
}

fn overflow(amount: &MonetaryAmount, target: &str) -> MoneyError {
    MoneyError::ArithmeticOverflow(format!("{amount} does not fit into {target}"))
}

impl MonetaryFunction<MonetaryAmount, MonetaryAmount> for MajorPart {
    fn apply(&self, amount: &MonetaryAmount) -> MonetaryAmount {
        Self::from_amount(amount)
    }
}

impl std::fmt::Display for MajorPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MajorPart [MonetaryAmount -> MonetaryAmount]")
    }
}
