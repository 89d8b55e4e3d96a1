//! Property-based tests for amount operators.
//!
//! - Major and minor part reconstruct the amount
//! - Major part truncates toward zero
//! - Minimum and maximum bound every element

use proptest::prelude::*;
use rust_decimal::Decimal;

use moneta_shared::{CurrencyUnit, MonetaryAmount};

use super::{MajorPart, Maximum, Minimum, MinorPart};

/// Strategy to generate signed amounts with up to 4 decimals.
fn signed_number() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64, 0u32..=4)
        .prop_map(|(units, scale)| Decimal::new(units, scale))
}

fn chf(number: Decimal) -> MonetaryAmount {
    MonetaryAmount::new(CurrencyUnit::iso("CHF").with_default_fraction_digits(2), number)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Major part plus minor part equals the original number.
    #[test]
    fn prop_major_plus_minor_is_identity(number in signed_number()) {
        let amount = chf(number);
        let major = MajorPart::from_amount(&amount);
        let minor = MinorPart::from_amount(&amount);
        prop_assert_eq!(major.checked_add(&minor).unwrap(), amount);
    }

    /// The major part never moves away from zero and drops all fraction digits.
    #[test]
    fn prop_major_part_truncates_toward_zero(number in signed_number()) {
        let major = MajorPart::from_amount(&chf(number)).number();
        prop_assert!(major.abs() <= number.abs());
        prop_assert!((number - major).abs() < Decimal::ONE);
        prop_assert_eq!(major.scale(), 0);
    }

    /// The minor part carries the sign of the amount.
    #[test]
    fn prop_minor_part_keeps_sign(number in signed_number()) {
        let minor = MinorPart::from_amount(&chf(number));
        prop_assert!(!(minor.is_positive() && number.is_sign_negative()));
        prop_assert!(!(minor.is_negative() && number > Decimal::ZERO));
    }

    /// Minimum and maximum are elements that bound every element.
    #[test]
    fn prop_extrema_bound_all(numbers in prop::collection::vec(signed_number(), 1..20)) {
        let amounts: Vec<_> = numbers.into_iter().map(chf).collect();
        let min = Minimum::of_all(&amounts).unwrap();
        let max = Maximum::of_all(&amounts).unwrap();
        prop_assert!(amounts.contains(&min));
        prop_assert!(amounts.contains(&max));
        for amount in &amounts {
            prop_assert!(min.number() <= amount.number());
            prop_assert!(amount.number() <= max.number());
        }
    }
}
