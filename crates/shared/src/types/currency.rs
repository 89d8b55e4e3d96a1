//! Currency unit identified by namespace and code.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Namespace of the ISO 4217 currency codes.
pub const ISO_NAMESPACE: &str = "ISO-4217";

/// An immutable currency identifier.
///
/// Two units are equal when namespace and code are equal; the numeric code
/// and fraction digits are descriptive only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyUnit {
    namespace: String,
    code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    numeric_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_fraction_digits: Option<u32>,
}

impl CurrencyUnit {
    /// Creates a unit with no numeric code and no default fraction digits.
    pub fn new(namespace: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            code: code.into(),
            numeric_code: None,
            default_fraction_digits: None,
        }
    }

    /// Creates a unit in the ISO 4217 namespace.
    pub fn iso(code: impl Into<String>) -> Self {
        Self::new(ISO_NAMESPACE, code)
    }

    /// Returns a copy carrying the given numeric code.
    #[must_use]
    pub fn with_numeric_code(mut self, numeric_code: u16) -> Self {
        self.numeric_code = Some(numeric_code);
        self
    }

    /// Returns a copy carrying the given default fraction digits.
    #[must_use]
    pub fn with_default_fraction_digits(mut self, digits: u32) -> Self {
        self.default_fraction_digits = Some(digits);
        self
    }

    /// The namespace, e.g. `ISO-4217`.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The code, unique within the namespace.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The numeric code, if the namespace defines one.
    pub const fn numeric_code(&self) -> Option<u16> {
        self.numeric_code
    }

    /// Number of minor-unit digits, if the currency has a fixed minor unit.
    pub const fn default_fraction_digits(&self) -> Option<u32> {
        self.default_fraction_digits
    }

    /// Returns true if the unit lives in the ISO 4217 namespace.
    pub fn is_iso(&self) -> bool {
        self.namespace == ISO_NAMESPACE
    }
}

impl PartialEq for CurrencyUnit {
    fn eq(&self, other: &Self) -> bool {
        self.namespace == other.namespace && self.code == other.code
    }
}

impl Eq for CurrencyUnit {}

impl Hash for CurrencyUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.namespace.hash(state);
        self.code.hash(state);
    }
}

impl PartialOrd for CurrencyUnit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CurrencyUnit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.namespace
            .cmp(&other.namespace)
            .then_with(|| self.code.cmp(&other.code))
    }
}

impl std::fmt::Display for CurrencyUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_iso() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}:{}", self.namespace, self.code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_currency_unit_iso() {
        let chf = CurrencyUnit::iso("CHF");
        assert_eq!(chf.namespace(), ISO_NAMESPACE);
        assert_eq!(chf.code(), "CHF");
        assert!(chf.is_iso());
        assert_eq!(chf.numeric_code(), None);
        assert_eq!(chf.default_fraction_digits(), None);
    }

    #[test]
    fn test_identity_ignores_descriptive_fields() {
        let plain = CurrencyUnit::iso("CHF");
        let rich = CurrencyUnit::iso("CHF")
            .with_numeric_code(756)
            .with_default_fraction_digits(2);
        assert_eq!(plain, rich);

        let mut set = HashSet::new();
        set.insert(plain);
        assert!(!set.insert(rich));
    }

    #[test]
    fn test_namespace_is_part_of_identity() {
        assert_ne!(CurrencyUnit::iso("BTC"), CurrencyUnit::new("CRYPTO", "BTC"));
    }

    #[test]
    fn test_ordering_by_namespace_then_code() {
        let mut units = vec![
            CurrencyUnit::iso("USD"),
            CurrencyUnit::new("CRYPTO", "BTC"),
            CurrencyUnit::iso("CHF"),
        ];
        units.sort();
        let codes: Vec<_> = units.iter().map(CurrencyUnit::code).collect();
        assert_eq!(codes, vec!["BTC", "CHF", "USD"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(CurrencyUnit::iso("CHF").to_string(), "CHF");
        assert_eq!(CurrencyUnit::new("CRYPTO", "BTC").to_string(), "CRYPTO:BTC");
    }

    #[test]
    fn test_serde_skips_missing_descriptors() {
        let json = serde_json::to_string(&CurrencyUnit::iso("CHF")).unwrap();
        assert_eq!(json, r#"{"namespace":"ISO-4217","code":"CHF"}"#);

        let parsed: CurrencyUnit =
            serde_json::from_str(r#"{"namespace":"ISO-4217","code":"JPY","numeric_code":392}"#)
                .unwrap();
        assert_eq!(parsed.numeric_code(), Some(392));
        assert_eq!(parsed.default_fraction_digits(), None);
    }
}
