//! Language and country pair used for locale-based currency lookup.

use serde::{Deserialize, Serialize};

use crate::error::MoneyError;

/// A locale such as `de-CH`.
///
/// Language is stored lowercase, country uppercase. Serialized as its
/// `Display` form and deserialized through `FromStr`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    country: Option<String>,
}

impl Locale {
    /// Creates a locale with a country.
    pub fn new(language: &str, country: &str) -> Self {
        Self {
            language: language.to_lowercase(),
            country: Some(country.to_uppercase()),
        }
    }

    /// Creates a language-only locale.
    pub fn language(language: &str) -> Self {
        Self {
            language: language.to_lowercase(),
            country: None,
        }
    }

    /// The ISO 639 language code.
    pub fn language_code(&self) -> &str {
        &self.language
    }

    /// The ISO 3166 country code, if any.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}-{country}", self.language),
            None => write!(f, "{}", self.language),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MoneyError::InvalidArgument(format!("Invalid locale: {s}"));
        let mut parts = s.split(['-', '_']);

        let language = parts.next().filter(|l| is_alpha(l, 2..=3)).ok_or_else(invalid)?;
        let country = parts.next();
        if parts.next().is_some() {
            return Err(invalid());
        }

        match country {
            None => Ok(Self::language(language)),
            Some(country) if is_alpha(country, 2..=2) => Ok(Self::new(language, country)),
            Some(_) => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

fn is_alpha(s: &str, len: std::ops::RangeInclusive<usize>) -> bool {
    len.contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("de-CH", "de", Some("CH"))]
    #[case("en_us", "en", Some("US"))]
    #[case("FR", "fr", None)]
    #[case("gsw-CH", "gsw", Some("CH"))]
    fn test_locale_from_str(
        #[case] input: &str,
        #[case] language: &str,
        #[case] country: Option<&str>,
    ) {
        let locale = Locale::from_str(input).unwrap();
        assert_eq!(locale.language_code(), language);
        assert_eq!(locale.country(), country);
    }

    #[rstest]
    #[case("")]
    #[case("d")]
    #[case("de-CHE")]
    #[case("de-CH-x")]
    #[case("12-CH")]
    fn test_locale_from_str_rejects(#[case] input: &str) {
        assert!(matches!(
            Locale::from_str(input),
            Err(MoneyError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_locale_serde_normalizes() {
        let locale: Locale = serde_json::from_str(r#""DE_ch""#).unwrap();
        assert_eq!(locale, Locale::new("de", "CH"));
        assert_eq!(serde_json::to_string(&locale).unwrap(), r#""de-CH""#);
        assert!(serde_json::from_str::<Locale>(r#""de-CHE""#).is_err());
    }

    #[test]
    fn test_locale_display() {
        assert_eq!(Locale::new("de", "ch").to_string(), "de-CH");
        assert_eq!(Locale::language("EN").to_string(), "en");
    }
}
