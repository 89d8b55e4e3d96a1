//! Pure operators over monetary amounts.
//!
//! This module implements:
//! - Major and minor part extraction
//! - Minimum and maximum aggregation
//! - Predicate combinators (and, or/xor, not)
//! - Ready-made predicates over amounts

pub mod combinator;
pub mod extrema;
pub mod major_part;
pub mod minor_part;
pub mod predicates;

#[cfg(test)]
mod props;

use std::sync::Arc;

pub use combinator::{AndPredicate, NotPredicate, OrPredicate};
pub use extrema::{Maximum, Minimum};
pub use major_part::MajorPart;
pub use minor_part::MinorPart;

/// A function from `&T` to `R`.
///
/// Implemented by every operator in this module and by any closure
/// `Fn(&T) -> R`.
pub trait MonetaryFunction<T: ?Sized, R> {
    /// Applies the function.
    fn apply(&self, value: &T) -> R;
}

impl<T: ?Sized, R, F> MonetaryFunction<T, R> for F
where
    F: Fn(&T) -> R,
{
    fn apply(&self, value: &T) -> R {
        self(value)
    }
}

/// A shareable boolean-valued function.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Wraps a closure as a [`Predicate`].
pub fn predicate<T, F>(f: F) -> Predicate<T>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}
