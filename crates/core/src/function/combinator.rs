//! Boolean combinators over sets of predicates.
//!
//! Combinators are immutable values. Every `with_*` and `clear_*` call
//! returns a new combinator and leaves the receiver untouched, so a
//! configured combinator can be shared freely. Sub-predicates are evaluated
//! in insertion order.

use std::fmt;
use std::sync::Arc;

use super::{MonetaryFunction, Predicate};

struct PredicateSet<T: ?Sized> {
    predicates: Vec<Predicate<T>>,
}

impl<T: ?Sized> PredicateSet<T> {
    const fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    fn extended<I>(&self, predicates: I) -> Self
    where
        I: IntoIterator<Item = Predicate<T>>,
    {
        let mut all = self.predicates.clone();
        all.extend(predicates);
        Self { predicates: all }
    }

    fn iter(&self) -> impl Iterator<Item = &Predicate<T>> {
        self.predicates.iter()
    }
}

impl<T: ?Sized> Clone for PredicateSet<T> {
    fn clone(&self) -> Self {
        Self {
            predicates: self.predicates.clone(),
        }
    }
}

macro_rules! predicate_builder {
    ($name:ident) => {
        impl<T: ?Sized> $name<T> {
            /// Returns a copy with `predicates` appended.
            #[must_use]
            pub fn with_predicates<I>(&self, predicates: I) -> Self
            where
                I: IntoIterator<Item = Predicate<T>>,
            {
                let mut next = self.clone();
                next.set = self.set.extended(predicates);
                next
            }

            /// Returns a copy with one predicate appended.
            #[must_use]
            pub fn with_predicate(&self, predicate: Predicate<T>) -> Self {
                self.with_predicates([predicate])
            }

            /// Returns a copy without any predicates.
            #[must_use]
            pub fn clear_predicates(&self) -> Self {
                let mut next = self.clone();
                next.set = PredicateSet::new();
                next
            }

            /// The configured predicates, in evaluation order.
            pub fn predicates(&self) -> &[Predicate<T>] {
                &self.set.predicates
            }

            /// Returns true if no predicate is configured.
            pub fn is_empty(&self) -> bool {
                self.set.predicates.is_empty()
            }
        }

        impl<T: ?Sized> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: ?Sized> MonetaryFunction<T, bool> for $name<T> {
            fn apply(&self, value: &T) -> bool {
                self.test(value)
            }
        }

        impl<T: ?Sized + 'static> $name<T> {
            /// Turns the combinator into a predicate, e.g. for nesting.
            pub fn into_predicate(self) -> Predicate<T> {
                Arc::new(move |value: &T| self.test(value))
            }
        }
    };
}

/// Accepts a value iff every sub-predicate accepts it.
///
/// An empty combinator accepts everything.
pub struct AndPredicate<T: ?Sized> {
    set: PredicateSet<T>,
}

impl<T: ?Sized> AndPredicate<T> {
    /// Creates a combinator without predicates.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            set: PredicateSet::new(),
        }
    }

    /// Evaluates the combinator.
    pub fn test(&self, value: &T) -> bool {
        self.set.iter().all(|predicate| predicate(value))
    }
}

impl<T: ?Sized> Clone for AndPredicate<T> {
    fn clone(&self) -> Self {
        Self {
            set: self.set.clone(),
        }
    }
}

predicate_builder!(AndPredicate);

/// Accepts a value if a sub-predicate accepts it.
///
/// In exclusive mode any predicate evaluated after an accepting one ends the
/// evaluation with `false`, whether it accepts or rejects. The result then
/// depends on order and is not a parity XOR. An empty combinator rejects
/// everything in both modes.
pub struct OrPredicate<T: ?Sized> {
    set: PredicateSet<T>,
    exclusive: bool,
}

impl<T: ?Sized> OrPredicate<T> {
    /// Creates a non-exclusive combinator without predicates.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            set: PredicateSet::new(),
            exclusive: false,
        }
    }

    /// Returns a copy modelling XOR (`true`) or plain OR (`false`).
    #[must_use]
    pub fn with_xor(&self, exclusive: bool) -> Self {
        Self {
            set: self.set.clone(),
            exclusive,
        }
    }

    /// Returns true if this combinator models XOR.
    pub const fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    /// Evaluates the combinator.
    pub fn test(&self, value: &T) -> bool {
        if !self.exclusive {
            return self.set.iter().any(|predicate| predicate(value));
        }
        let mut accepted = false;
        for predicate in self.set.iter() {
            if accepted {
                return false;
            }
            accepted = predicate(value);
        }
        accepted
    }
}

impl<T: ?Sized> Clone for OrPredicate<T> {
    fn clone(&self) -> Self {
        Self {
            set: self.set.clone(),
            exclusive: self.exclusive,
        }
    }
}

predicate_builder!(OrPredicate);

/// Accepts a value iff no sub-predicate accepts it.
///
/// An empty combinator accepts everything.
pub struct NotPredicate<T: ?Sized> {
    set: PredicateSet<T>,
}

impl<T: ?Sized> NotPredicate<T> {
    /// Creates a combinator without predicates.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            set: PredicateSet::new(),
        }
    }

    /// Evaluates the combinator.
    pub fn test(&self, value: &T) -> bool {
        !self.set.iter().any(|predicate| predicate(value))
    }
}

impl<T: ?Sized> Clone for NotPredicate<T> {
    fn clone(&self) -> Self {
        Self {
            set: self.set.clone(),
        }
    }
}

predicate_builder!(NotPredicate);

impl<T: ?Sized> fmt::Debug for AndPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndPredicate")
            .field("predicates", &self.set.predicates.len())
            .finish()
    }
}

impl<T: ?Sized> fmt::Debug for OrPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrPredicate")
            .field("predicates", &self.set.predicates.len())
            .field("exclusive", &self.exclusive)
            .finish()
    }
}

impl<T: ?Sized> fmt::Debug for NotPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotPredicate")
            .field("predicates", &self.set.predicates.len())
            .finish()
    }
}

impl<T: ?Sized> fmt::Display for AndPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AndPredicate")
    }
}

impl<T: ?Sized> fmt::Display for OrPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrPredicate [XOR={}]", self.exclusive)
    }
}

impl<T: ?Sized> fmt::Display for NotPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NotPredicate")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::predicate;
    use rstest::rstest;

    fn always() -> Predicate<i32> {
        predicate(|_| true)
    }

    fn never() -> Predicate<i32> {
        predicate(|_| false)
    }

    fn from_flags(flags: &[bool]) -> Vec<Predicate<i32>> {
        flags
            .iter()
            .map(|&flag| if flag { always() } else { never() })
            .collect()
    }

    #[test]
    fn test_and_requires_every_predicate() {
        let and = AndPredicate::new().with_predicates([always(), never()]);
        assert!(!and.test(&1));
        assert!(AndPredicate::new().with_predicates([always(), always()]).test(&1));
    }

    #[test]
    fn test_or_requires_one_predicate() {
        let or = OrPredicate::new().with_predicates([always(), never()]);
        assert!(or.test(&1));
        assert!(!OrPredicate::new().with_predicates([never(), never()]).test(&1));
    }

    #[rstest]
    #[case(&[true, true], false)]
    #[case(&[false, true], true)]
    #[case(&[true, false], false)]
    #[case(&[false, false], false)]
    #[case(&[true], true)]
    #[case(&[false, true, false], false)]
    #[case(&[false, false, true], true)]
    fn test_xor_short_circuits_in_order(#[case] flags: &[bool], #[case] expected: bool) {
        let xor = OrPredicate::new()
            .with_xor(true)
            .with_predicates(from_flags(flags));
        assert_eq!(xor.test(&0), expected);
    }

    #[test]
    fn test_xor_stops_evaluating_after_decision() {
        let panicking: Predicate<i32> = predicate(|_| panic!("evaluated after decision"));
        let xor = OrPredicate::new()
            .with_xor(true)
            .with_predicates([always(), always(), panicking]);
        assert!(!xor.test(&0));
    }

    #[test]
    fn test_not_rejects_when_any_accepts() {
        assert!(NotPredicate::new().with_predicate(never()).test(&1));
        assert!(!NotPredicate::new().with_predicates([always(), never()]).test(&1));
    }

    #[test]
    fn test_empty_combinators() {
        assert!(AndPredicate::<i32>::new().test(&1));
        assert!(!OrPredicate::<i32>::new().test(&1));
        assert!(!OrPredicate::<i32>::new().with_xor(true).test(&1));
        assert!(NotPredicate::<i32>::new().test(&1));
    }

    #[test]
    fn test_builders_return_new_values() {
        let base = AndPredicate::new().with_predicate(always());
        let extended = base.with_predicate(never());
        assert_eq!(base.predicates().len(), 1);
        assert_eq!(extended.predicates().len(), 2);
        assert!(base.test(&1));
        assert!(!extended.test(&1));

        let cleared = extended.clear_predicates();
        assert!(cleared.is_empty());
        assert_eq!(extended.predicates().len(), 2);
    }

    #[test]
    fn test_builders_keep_xor_flag() {
        let xor = OrPredicate::new().with_xor(true).with_predicate(always());
        assert!(xor.is_exclusive());
        assert!(xor.clear_predicates().is_exclusive());
        assert!(!xor.with_xor(false).is_exclusive());
        assert_eq!(xor.with_xor(false).predicates().len(), 1);
    }

    #[test]
    fn test_value_dependent_predicates() {
        let in_range = AndPredicate::new()
            .with_predicate(predicate(|v: &i32| *v > 0))
            .with_predicate(predicate(|v: &i32| *v < 10));
        assert!(in_range.test(&5));
        assert!(!in_range.test(&10));
        assert!(in_range.apply(&1));
    }

    #[test]
    fn test_nested_combinators() {
        let any = OrPredicate::new().with_predicates([never(), always()]);
        let all = AndPredicate::new().with_predicates([always(), any.into_predicate()]);
        assert!(all.test(&0));
        let none = NotPredicate::new().with_predicate(all.into_predicate());
        assert!(!none.test(&0));
    }

    #[test]
    fn test_display() {
        assert_eq!(OrPredicate::<i32>::new().to_string(), "OrPredicate [XOR=false]");
        assert_eq!(
            OrPredicate::<i32>::new().with_xor(true).to_string(),
            "OrPredicate [XOR=true]"
        );
        assert_eq!(AndPredicate::<i32>::new().to_string(), "AndPredicate");
        assert_eq!(NotPredicate::<i32>::new().to_string(), "NotPredicate");
    }
}
