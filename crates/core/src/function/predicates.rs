//! Ready-made predicates over amounts.

use std::sync::Arc;

use rust_decimal::Decimal;

use moneta_shared::{CurrencyUnit, MonetaryAmount};

use super::Predicate;

/// Accepts amounts in the given currency.
pub fn currency_is(currency: CurrencyUnit) -> Predicate<MonetaryAmount> {
    Arc::new(move |amount: &MonetaryAmount| *amount.currency() == currency)
}

/// Accepts zero amounts.
pub fn is_zero() -> Predicate<MonetaryAmount> {
    Arc::new(MonetaryAmount::is_zero)
}

/// Accepts amounts greater than zero.
pub fn is_positive() -> Predicate<MonetaryAmount> {
    Arc::new(MonetaryAmount::is_positive)
}

/// Accepts amounts less than zero.
pub fn is_negative() -> Predicate<MonetaryAmount> {
    Arc::new(MonetaryAmount::is_negative)
}

/// Accepts amounts whose number exceeds `threshold`.
pub fn greater_than(threshold: Decimal) -> Predicate<MonetaryAmount> {
    Arc::new(move |amount: &MonetaryAmount| amount.number() > threshold)
}

/// Accepts amounts whose number is below `threshold`.
pub fn less_than(threshold: Decimal) -> Predicate<MonetaryAmount> {
    Arc::new(move |amount: &MonetaryAmount| amount.number() < threshold)
}
