//! Main access point for currency lookup and mapping.
//!
//! [`MonetaryCurrencies`] is constructed once by the application and shared
//! by handle. Every query is delegated to the providers bound in its
//! [`ProviderRegistry`].

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use moneta_shared::{CurrencyUnit, Locale, MonetaConfig, MoneyError, MoneyResult};

use crate::registry::ProviderRegistry;

/// Currency lookup and mapping over the registry's providers.
#[derive(Debug, Default)]
pub struct MonetaryCurrencies {
    registry: ProviderRegistry,
    default_namespace: Option<String>,
}

impl MonetaryCurrencies {
    /// Creates the facade over a registry.
    #[must_use]
    pub fn new(registry: ProviderRegistry) -> Self {
        Self {
            registry,
            default_namespace: None,
        }
    }

    /// Creates the facade, applying the configured default namespace.
    #[must_use]
    pub fn with_config(registry: ProviderRegistry, config: &MonetaConfig) -> Self {
        Self {
            registry,
            default_namespace: config.default_namespace().map(str::to_string),
        }
    }

    /// The underlying registry.
    pub const fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// The configured default namespace, or the provider's.
    pub fn default_namespace(&self) -> String {
        self.default_namespace.clone().unwrap_or_else(|| {
            self.registry
                .currency_unit_provider()
                .default_namespace()
                .to_string()
        })
    }

    /// Returns true if the namespace is currently defined.
    pub fn is_namespace_available(&self, namespace: &str) -> bool {
        self.registry
            .currency_unit_provider()
            .is_namespace_available(namespace, None)
    }

    /// All currently defined namespaces.
    pub fn namespaces(&self) -> BTreeSet<String> {
        self.registry.currency_unit_provider().namespaces(None)
    }

    /// Returns true if the code is currently defined under the namespace.
    pub fn is_available(&self, namespace: &str, code: &str) -> bool {
        self.is_available_at(namespace, code, None)
    }

    /// Returns true if the code is defined under the namespace at the timestamp.
    pub fn is_available_at(
        &self,
        namespace: &str,
        code: &str,
        timestamp: Option<DateTime<Utc>>,
    ) -> bool {
        self.registry
            .currency_unit_provider()
            .is_available(namespace, code, timestamp)
    }

    /// Returns true if the code is defined under the default namespace.
    pub fn is_code_available(&self, code: &str) -> bool {
        self.is_available(&self.default_namespace(), code)
    }

    /// Looks up a current currency.
    pub fn get(&self, namespace: &str, code: &str) -> MoneyResult<CurrencyUnit> {
        self.get_at(namespace, code, None)
    }

    /// Looks up a currency valid at the timestamp.
    pub fn get_at(
        &self,
        namespace: &str,
        code: &str,
        timestamp: Option<DateTime<Utc>>,
    ) -> MoneyResult<CurrencyUnit> {
        self.registry
            .currency_unit_provider()
            .get(namespace, code, timestamp)
    }

    /// Looks up a current currency in the default namespace.
    pub fn get_by_code(&self, code: &str) -> MoneyResult<CurrencyUnit> {
        self.get(&self.default_namespace(), code)
    }

    /// All current currencies of a namespace.
    ///
    /// Fails with `InvalidArgument` if the namespace is not defined.
    pub fn get_all(&self, namespace: &str) -> MoneyResult<BTreeSet<CurrencyUnit>> {
        self.get_all_at(namespace, None)
    }

    /// All currencies of a namespace valid at the timestamp.
    ///
    /// The namespace itself must be currently defined; the result may be empty.
    pub fn get_all_at(
        &self,
        namespace: &str,
        timestamp: Option<DateTime<Utc>>,
    ) -> MoneyResult<BTreeSet<CurrencyUnit>> {
        if !self.is_namespace_available(namespace) {
            return Err(MoneyError::InvalidArgument(format!(
                "Invalid namespace: {namespace}"
            )));
        }
        Ok(self
            .registry
            .currency_unit_provider()
            .get_all(namespace, timestamp))
    }

    /// The current currencies of a locale.
    pub fn get_all_for_locale(&self, locale: &Locale) -> BTreeSet<CurrencyUnit> {
        self.get_all_for_locale_at(locale, None)
    }

    /// The currencies of a locale valid at the timestamp.
    pub fn get_all_for_locale_at(
        &self,
        locale: &Locale,
        timestamp: Option<DateTime<Utc>>,
    ) -> BTreeSet<CurrencyUnit> {
        self.registry
            .currency_unit_provider()
            .get_all_for_locale(locale, timestamp)
    }

    /// Maps a unit into the target namespace.
    pub fn map(&self, target_namespace: &str, unit: &CurrencyUnit) -> Option<CurrencyUnit> {
        self.map_at(target_namespace, None, unit)
    }

    /// Maps a unit into the target namespace as of the timestamp.
    pub fn map_at(
        &self,
        target_namespace: &str,
        timestamp: Option<DateTime<Utc>>,
        unit: &CurrencyUnit,
    ) -> Option<CurrencyUnit> {
        self.registry
            .currency_unit_mapper()
            .map(target_namespace, timestamp, unit)
    }

    /// Maps every unit into the target namespace, in input order.
    ///
    /// Fails with `InvalidArgument` on the first unit that cannot be mapped.
    pub fn map_all(
        &self,
        target_namespace: &str,
        units: &[CurrencyUnit],
    ) -> MoneyResult<Vec<CurrencyUnit>> {
        self.map_all_at(target_namespace, None, units)
    }

    /// Maps every unit into the target namespace as of the timestamp.
    pub fn map_all_at(
        &self,
        target_namespace: &str,
        timestamp: Option<DateTime<Utc>>,
        units: &[CurrencyUnit],
    ) -> MoneyResult<Vec<CurrencyUnit>> {
        let mapper = self.registry.currency_unit_mapper();
        units
            .iter()
            .map(|unit| {
                mapper.map(target_namespace, timestamp, unit).ok_or_else(|| {
                    MoneyError::InvalidArgument(format!(
                        "Cannot map currency {unit} to namespace {target_namespace}"
                    ))
                })
            })
            .collect()
    }
}
