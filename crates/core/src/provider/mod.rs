//! Currency provider roles and their built-in defaults.
//!
//! A provider role is a trait the registry binds to exactly one instance:
//! - [`CurrencyUnitProvider`] - lookup and enumeration of currency units
//! - [`CurrencyUnitMapper`] - mapping of units between namespaces

pub mod default;
pub mod platform;

use std::collections::BTreeSet;
use std::fmt::Debug;

use chrono::{DateTime, Utc};
use moneta_shared::{CurrencyUnit, Locale, MoneyResult};

pub use default::{DefaultCurrencyUnitMapper, DefaultCurrencyUnitProvider};
pub use platform::{IsoCurrency, PlatformCurrencies};

/// Resolves currency units by namespace and code.
///
/// A `timestamp` of `None` means the present; providers without history
/// answer negatively for any other point in time.
pub trait CurrencyUnitProvider: Debug + Send + Sync {
    /// The namespace assumed when callers give none.
    fn default_namespace(&self) -> &str;

    /// Returns true if the namespace is known at the timestamp.
    fn is_namespace_available(&self, namespace: &str, timestamp: Option<DateTime<Utc>>) -> bool;

    /// All namespaces known at the timestamp.
    fn namespaces(&self, timestamp: Option<DateTime<Utc>>) -> BTreeSet<String>;

    /// Returns true if the code resolves under the namespace at the timestamp.
    fn is_available(&self, namespace: &str, code: &str, timestamp: Option<DateTime<Utc>>) -> bool;

    /// Resolves a unit, failing with `UnknownCurrency` when it does not exist.
    fn get(
        &self,
        namespace: &str,
        code: &str,
        timestamp: Option<DateTime<Utc>>,
    ) -> MoneyResult<CurrencyUnit>;

    /// All units of the namespace at the timestamp.
    fn get_all(&self, namespace: &str, timestamp: Option<DateTime<Utc>>) -> BTreeSet<CurrencyUnit>;

    /// The units used in the locale at the timestamp.
    fn get_all_for_locale(
        &self,
        locale: &Locale,
        timestamp: Option<DateTime<Utc>>,
    ) -> BTreeSet<CurrencyUnit>;
}

/// Maps currency units into another namespace.
pub trait CurrencyUnitMapper: Debug + Send + Sync {
    /// Maps `unit` into `target_namespace`, `None` if no mapping exists.
    fn map(
        &self,
        target_namespace: &str,
        timestamp: Option<DateTime<Utc>>,
        unit: &CurrencyUnit,
    ) -> Option<CurrencyUnit>;
}
