//! Minimum and maximum of a collection of amounts.
//!
//! Amounts are compared by number only; mixing currencies is undefined here.
//! On ties the first equal element wins.

use moneta_shared::{MonetaryAmount, MoneyError, MoneyResult};

use super::MonetaryFunction;

/// Selects the smallest amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimum;

impl Minimum {
    /// Returns the operator.
    #[must_use]
    pub const fn of() -> Self {
        Self
    }

    /// The smallest of `amounts`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `amounts` is empty.
    pub fn of_all<'a, I>(amounts: I) -> MoneyResult<MonetaryAmount>
    where
        I: IntoIterator<Item = &'a MonetaryAmount>,
    {
        pick(amounts, |candidate, best| candidate.number() < best.number())
    }
}

/// Selects the largest amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct Maximum;

impl Maximum {
    /// Returns the operator.
    #[must_use]
    pub const fn of() -> Self {
        Self
    }

    /// The largest of `amounts`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `amounts` is empty.
    pub fn of_all<'a, I>(amounts: I) -> MoneyResult<MonetaryAmount>
    where
        I: IntoIterator<Item = &'a MonetaryAmount>,
    {
        pick(amounts, |candidate, best| candidate.number() > best.number())
    }
}

fn pick<'a, I>(
    amounts: I,
    replaces: impl Fn(&MonetaryAmount, &MonetaryAmount) -> bool,
) -> MoneyResult<MonetaryAmount>
where
    I: IntoIterator<Item = &'a MonetaryAmount>,
{
    let mut amounts = amounts.into_iter();
    let first = amounts.next().ok_or_else(|| {
        MoneyError::InvalidArgument("At least one amount is required".to_string())
    })?;
    let best = amounts.fold(first, |best, candidate| {
        if replaces(candidate, best) { candidate } else { best }
    });
    Ok(best.clone())
}

impl MonetaryFunction<[MonetaryAmount], MoneyResult<MonetaryAmount>> for Minimum {
    fn apply(&self, amounts: &[MonetaryAmount]) -> MoneyResult<MonetaryAmount> {
        Self::of_all(amounts)
    }
}

impl MonetaryFunction<[MonetaryAmount], MoneyResult<MonetaryAmount>> for Maximum {
    fn apply(&self, amounts: &[MonetaryAmount]) -> MoneyResult<MonetaryAmount> {
        Self::of_all(amounts)
    }
}

impl std::fmt::Display for Minimum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Minimum [Iterable<MonetaryAmount> -> MonetaryAmount]")
    }
}

impl std::fmt::Display for Maximum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Maximum [Iterable<MonetaryAmount> -> MonetaryAmount]")
    }
}
