//! Built-in providers used when nothing is registered for a role.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use moneta_shared::{CurrencyUnit, ISO_NAMESPACE, Locale, MoneyError, MoneyResult};

use super::platform::PlatformCurrencies;
use super::{CurrencyUnitMapper, CurrencyUnitProvider};

/// Current ISO 4217 currencies from the platform table. Has no history.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCurrencyUnitProvider {
    table: PlatformCurrencies,
}

impl DefaultCurrencyUnitProvider {
    /// Creates the provider.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: PlatformCurrencies,
        }
    }
}

impl CurrencyUnitProvider for DefaultCurrencyUnitProvider {
    fn default_namespace(&self) -> &str {
        ISO_NAMESPACE
    }

    fn is_namespace_available(&self, namespace: &str, timestamp: Option<DateTime<Utc>>) -> bool {
        timestamp.is_none() && namespace == ISO_NAMESPACE
    }

    fn namespaces(&self, timestamp: Option<DateTime<Utc>>) -> BTreeSet<String> {
        if timestamp.is_some() {
            return BTreeSet::new();
        }
        BTreeSet::from([ISO_NAMESPACE.to_string()])
    }

    fn is_available(&self, namespace: &str, code: &str, timestamp: Option<DateTime<Utc>>) -> bool {
        timestamp.is_none() && self.table.lookup(namespace, code).is_some()
    }

    fn get(
        &self,
        namespace: &str,
        code: &str,
        timestamp: Option<DateTime<Utc>>,
    ) -> MoneyResult<CurrencyUnit> {
        if timestamp.is_some() {
            return Err(MoneyError::unknown_currency(namespace, code, timestamp));
        }
        self.table
            .lookup(namespace, code)
            .map(|currency| currency.to_unit())
            .ok_or_else(|| MoneyError::unknown_currency(namespace, code, None))
    }

    fn get_all(&self, namespace: &str, timestamp: Option<DateTime<Utc>>) -> BTreeSet<CurrencyUnit> {
        if !self.is_namespace_available(namespace, timestamp) {
            return BTreeSet::new();
        }
        self.table.all().map(|currency| currency.to_unit()).collect()
    }

    fn get_all_for_locale(
        &self,
        locale: &Locale,
        timestamp: Option<DateTime<Utc>>,
    ) -> BTreeSet<CurrencyUnit> {
        if timestamp.is_some() {
            return BTreeSet::new();
        }
        self.table
            .for_locale(locale)
            .map(|currency| currency.to_unit())
            .into_iter()
            .collect()
    }
}

/// Mapper that knows no mappings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCurrencyUnitMapper;

impl CurrencyUnitMapper for DefaultCurrencyUnitMapper {
    fn map(
        &self,
        _target_namespace: &str,
        _timestamp: Option<DateTime<Utc>>,
        _unit: &CurrencyUnit,
    ) -> Option<CurrencyUnit> {
        None
    }
}
