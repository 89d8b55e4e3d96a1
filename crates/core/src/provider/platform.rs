//! Static ISO 4217 snapshot backing the default provider.
//!
//! Covers every active ISO 4217 code. Entries are `(alphabetic code, numeric
//! code, minor-unit digits)`. Precious metals, bond units, SDR and the
//! testing and no-currency codes have no minor unit and carry `None`.

use moneta_shared::{CurrencyUnit, ISO_NAMESPACE, Locale};

/// One row of the ISO 4217 table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoCurrency {
    /// Alphabetic code.
    pub code: &'static str,
    /// Numeric code.
    pub numeric: u16,
    /// Minor-unit digits.
    pub fraction_digits: Option<u32>,
}

impl IsoCurrency {
    /// Builds the currency unit for this row.
    pub fn to_unit(&self) -> CurrencyUnit {
        let unit = CurrencyUnit::iso(self.code).with_numeric_code(self.numeric);
        match self.fraction_digits {
            Some(digits) => unit.with_default_fraction_digits(digits),
            None => unit,
        }
    }
}

const fn row(code: &'static str, numeric: u16, digits: u32) -> IsoCurrency {
    IsoCurrency {
        code,
        numeric,
        fraction_digits: Some(digits),
    }
}

const fn unit_less(code: &'static str, numeric: u16) -> IsoCurrency {
    IsoCurrency {
        code,
        numeric,
        fraction_digits: None,
    }
}

static CURRENCIES: &[IsoCurrency] = &[
    row("AED", 784, 2),
    row("AFN", 971, 2),
    row("ALL", 8, 2),
    row("AMD", 51, 2),
    row("AOA", 973, 2),
    row("ARS", 32, 2),
    row("AUD", 36, 2),
    row("AWG", 533, 2),
    row("AZN", 944, 2),
    row("BAM", 977, 2),
    row("BBD", 52, 2),
    row("BDT", 50, 2),
    row("BGN", 975, 2),
    row("BHD", 48, 3),
    row("BIF", 108, 0),
    row("BMD", 60, 2),
    row("BND", 96, 2),
    row("BOB", 68, 2),
    row("BOV", 984, 2),
    row("BRL", 986, 2),
    row("BSD", 44, 2),
    row("BTN", 64, 2),
    row("BWP", 72, 2),
    row("BYN", 933, 2),
    row("BZD", 84, 2),
    row("CAD", 124, 2),
    row("CDF", 976, 2),
    row("CHE", 947, 2),
    row("CHF", 756, 2),
    row("CHW", 948, 2),
    row("CLF", 990, 4),
    row("CLP", 152, 0),
    row("CNY", 156, 2),
    row("COP", 170, 2),
    row("COU", 970, 2),
    row("CRC", 188, 2),
    row("CUP", 192, 2),
    row("CVE", 132, 2),
    row("CZK", 203, 2),
    row("DJF", 262, 0),
    row("DKK", 208, 2),
    row("DOP", 214, 2),
    row("DZD", 12, 2),
    row("EGP", 818, 2),
    row("ERN", 232, 2),
    row("ETB", 230, 2),
    row("EUR", 978, 2),
    row("FJD", 242, 2),
    row("FKP", 238, 2),
    row("GBP", 826, 2),
    row("GEL", 981, 2),
    row("GHS", 936, 2),
    row("GIP", 292, 2),
    row("GMD", 270, 2),
    row("GNF", 324, 0),
    row("GTQ", 320, 2),
    row("GYD", 328, 2),
    row("HKD", 344, 2),
    row("HNL", 340, 2),
    row("HTG", 332, 2),
    row("HUF", 348, 2),
    row("IDR", 360, 2),
    row("ILS", 376, 2),
    row("INR", 356, 2),
    row("IQD", 368, 3),
    row("IRR", 364, 2),
    row("ISK", 352, 0),
    row("JMD", 388, 2),
    row("JOD", 400, 3),
    row("JPY", 392, 0),
    row("KES", 404, 2),
    row("KGS", 417, 2),
    row("KHR", 116, 2),
    row("KMF", 174, 0),
    row("KPW", 408, 2),
    row("KRW", 410, 0),
    row("KWD", 414, 3),
    row("KYD", 136, 2),
    row("KZT", 398, 2),
    row("LAK", 418, 2),
    row("LBP", 422, 2),
    row("LKR", 144, 2),
    row("LRD", 430, 2),
    row("LSL", 426, 2),
    row("LYD", 434, 3),
    row("MAD", 504, 2),
    row("MDL", 498, 2),
    row("MGA", 969, 2),
    row("MKD", 807, 2),
    row("MMK", 104, 2),
    row("MNT", 496, 2),
    row("MOP", 446, 2),
    row("MRU", 929, 2),
    row("MUR", 480, 2),
    row("MVR", 462, 2),
    row("MWK", 454, 2),
    row("MXN", 484, 2),
    row("MXV", 979, 2),
    row("MYR", 458, 2),
    row("MZN", 943, 2),
    row("NAD", 516, 2),
    row("NGN", 566, 2),
    row("NIO", 558, 2),
    row("NOK", 578, 2),
    row("NPR", 524, 2),
    row("NZD", 554, 2),
    row("OMR", 512, 3),
    row("PAB", 590, 2),
    row("PEN", 604, 2),
    row("PGK", 598, 2),
    row("PHP", 608, 2),
    row("PKR", 586, 2),
    row("PLN", 985, 2),
    row("PYG", 600, 0),
    row("QAR", 634, 2),
    row("RON", 946, 2),
    row("RSD", 941, 2),
    row("RUB", 643, 2),
    row("RWF", 646, 0),
    row("SAR", 682, 2),
    row("SBD", 90, 2),
    row("SCR", 690, 2),
    row("SDG", 938, 2),
    row("SEK", 752, 2),
    row("SGD", 702, 2),
    row("SHP", 654, 2),
    row("SLE", 925, 2),
    row("SOS", 706, 2),
    row("SRD", 968, 2),
    row("SSP", 728, 2),
    row("STN", 930, 2),
    row("SVC", 222, 2),
    row("SYP", 760, 2),
    row("SZL", 748, 2),
    row("THB", 764, 2),
    row("TJS", 972, 2),
    row("TMT", 934, 2),
    row("TND", 788, 3),
    row("TOP", 776, 2),
    row("TRY", 949, 2),
    row("TTD", 780, 2),
    row("TWD", 901, 2),
    row("TZS", 834, 2),
    row("UAH", 980, 2),
    row("UGX", 800, 0),
    row("USD", 840, 2),
    row("USN", 997, 2),
    row("UYI", 940, 0),
    row("UYU", 858, 2),
    row("UYW", 927, 4),
    row("UZS", 860, 2),
    row("VED", 926, 2),
    row("VES", 928, 2),
    row("VND", 704, 0),
    row("VUV", 548, 0),
    row("WST", 882, 2),
    row("XAF", 950, 0),
    unit_less("XAG", 961),
    unit_less("XAU", 959),
    unit_less("XBA", 955),
    unit_less("XBB", 956),
    unit_less("XBC", 957),
    unit_less("XBD", 958),
    row("XCD", 951, 2),
    row("XCG", 532, 2),
    unit_less("XDR", 960),
    row("XOF", 952, 0),
    unit_less("XPD", 964),
    row("XPF", 953, 0),
    unit_less("XPT", 962),
    unit_less("XSU", 994),
    unit_less("XTS", 963),
    unit_less("XUA", 965),
    unit_less("XXX", 999),
    row("YER", 886, 2),
    row("ZAR", 710, 2),
    row("ZMW", 967, 2),
    row("ZWG", 924, 2),
];

static COUNTRIES: &[(&str, &str)] = &[
    ("AD", "EUR"),
    ("AE", "AED"),
    ("AF", "AFN"),
    ("AG", "XCD"),
    ("AL", "ALL"),
    ("AM", "AMD"),
    ("AO", "AOA"),
    ("AR", "ARS"),
    ("AT", "EUR"),
    ("AU", "AUD"),
    ("AW", "AWG"),
    ("AZ", "AZN"),
    ("BA", "BAM"),
    ("BB", "BBD"),
    ("BD", "BDT"),
    ("BE", "EUR"),
    ("BF", "XOF"),
    ("BG", "BGN"),
    ("BH", "BHD"),
    ("BI", "BIF"),
    ("BJ", "XOF"),
    ("BM", "BMD"),
    ("BN", "BND"),
    ("BO", "BOB"),
    ("BR", "BRL"),
    ("BS", "BSD"),
    ("BT", "BTN"),
    ("BW", "BWP"),
    ("BY", "BYN"),
    ("BZ", "BZD"),
    ("CA", "CAD"),
    ("CD", "CDF"),
    ("CF", "XAF"),
    ("CG", "XAF"),
    ("CH", "CHF"),
    ("CI", "XOF"),
    ("CL", "CLP"),
    ("CM", "XAF"),
    ("CN", "CNY"),
    ("CO", "COP"),
    ("CR", "CRC"),
    ("CU", "CUP"),
    ("CV", "CVE"),
    ("CW", "XCG"),
    ("CY", "EUR"),
    ("CZ", "CZK"),
    ("DE", "EUR"),
    ("DJ", "DJF"),
    ("DK", "DKK"),
    ("DM", "XCD"),
    ("DO", "DOP"),
    ("DZ", "DZD"),
    ("EC", "USD"),
    ("EE", "EUR"),
    ("EG", "EGP"),
    ("ER", "ERN"),
    ("ES", "EUR"),
    ("ET", "ETB"),
    ("FI", "EUR"),
    ("FJ", "FJD"),
    ("FK", "FKP"),
    ("FR", "EUR"),
    ("GA", "XAF"),
    ("GB", "GBP"),
    ("GD", "XCD"),
    ("GE", "GEL"),
    ("GH", "GHS"),
    ("GI", "GIP"),
    ("GM", "GMD"),
    ("GN", "GNF"),
    ("GQ", "XAF"),
    ("GR", "EUR"),
    ("GT", "GTQ"),
    ("GW", "XOF"),
    ("GY", "GYD"),
    ("HK", "HKD"),
    ("HN", "HNL"),
    ("HR", "EUR"),
    ("HT", "HTG"),
    ("HU", "HUF"),
    ("ID", "IDR"),
    ("IE", "EUR"),
    ("IL", "ILS"),
    ("IN", "INR"),
    ("IQ", "IQD"),
    ("IR", "IRR"),
    ("IS", "ISK"),
    ("IT", "EUR"),
    ("JM", "JMD"),
    ("JO", "JOD"),
    ("JP", "JPY"),
    ("KE", "KES"),
    ("KG", "KGS"),
    ("KH", "KHR"),
    ("KM", "KMF"),
    ("KN", "XCD"),
    ("KP", "KPW"),
    ("KR", "KRW"),
    ("KW", "KWD"),
    ("KY", "KYD"),
    ("KZ", "KZT"),
    ("LA", "LAK"),
    ("LB", "LBP"),
    ("LC", "XCD"),
    ("LI", "CHF"),
    ("LK", "LKR"),
    ("LR", "LRD"),
    ("LS", "LSL"),
    ("LT", "EUR"),
    ("LU", "EUR"),
    ("LV", "EUR"),
    ("LY", "LYD"),
    ("MA", "MAD"),
    ("MC", "EUR"),
    ("MD", "MDL"),
    ("ME", "EUR"),
    ("MG", "MGA"),
    ("MK", "MKD"),
    ("ML", "XOF"),
    ("MM", "MMK"),
    ("MN", "MNT"),
    ("MO", "MOP"),
    ("MR", "MRU"),
    ("MT", "EUR"),
    ("MU", "MUR"),
    ("MV", "MVR"),
    ("MW", "MWK"),
    ("MX", "MXN"),
    ("MY", "MYR"),
    ("MZ", "MZN"),
    ("NA", "NAD"),
    ("NC", "XPF"),
    ("NE", "XOF"),
    ("NG", "NGN"),
    ("NI", "NIO"),
    ("NL", "EUR"),
    ("NO", "NOK"),
    ("NP", "NPR"),
    ("NZ", "NZD"),
    ("OM", "OMR"),
    ("PA", "PAB"),
    ("PE", "PEN"),
    ("PF", "XPF"),
    ("PG", "PGK"),
    ("PH", "PHP"),
    ("PK", "PKR"),
    ("PL", "PLN"),
    ("PR", "USD"),
    ("PT", "EUR"),
    ("PY", "PYG"),
    ("QA", "QAR"),
    ("RO", "RON"),
    ("RS", "RSD"),
    ("RU", "RUB"),
    ("RW", "RWF"),
    ("SA", "SAR"),
    ("SB", "SBD"),
    ("SC", "SCR"),
    ("SD", "SDG"),
    ("SE", "SEK"),
    ("SG", "SGD"),
    ("SH", "SHP"),
    ("SI", "EUR"),
    ("SK", "EUR"),
    ("SL", "SLE"),
    ("SM", "EUR"),
    ("SN", "XOF"),
    ("SO", "SOS"),
    ("SR", "SRD"),
    ("SS", "SSP"),
    ("ST", "STN"),
    ("SV", "USD"),
    ("SX", "XCG"),
    ("SY", "SYP"),
    ("SZ", "SZL"),
    ("TD", "XAF"),
    ("TG", "XOF"),
    ("TH", "THB"),
    ("TJ", "TJS"),
    ("TM", "TMT"),
    ("TN", "TND"),
    ("TO", "TOP"),
    ("TR", "TRY"),
    ("TT", "TTD"),
    ("TW", "TWD"),
    ("TZ", "TZS"),
    ("UA", "UAH"),
    ("UG", "UGX"),
    ("US", "USD"),
    ("UY", "UYU"),
    ("UZ", "UZS"),
    ("VA", "EUR"),
    ("VC", "XCD"),
    ("VE", "VES"),
    ("VN", "VND"),
    ("VU", "VUV"),
    ("WF", "XPF"),
    ("WS", "WST"),
    ("YE", "YER"),
    ("ZA", "ZAR"),
    ("ZM", "ZMW"),
    ("ZW", "ZWG"),
];

/// Read-only view over the static currency and country tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformCurrencies;

impl PlatformCurrencies {
    /// Every known currency.
    pub fn all(self) -> impl Iterator<Item = &'static IsoCurrency> {
        CURRENCIES.iter()
    }

    /// Looks up a currency by namespace and code.
    pub fn lookup(self, namespace: &str, code: &str) -> Option<&'static IsoCurrency> {
        if namespace != ISO_NAMESPACE {
            return None;
        }
        CURRENCIES.iter().find(|c| c.code == code)
    }

    /// The currency used in the locale's country.
    pub fn for_locale(self, locale: &Locale) -> Option<&'static IsoCurrency> {
        let country = locale.country()?;
        let (_, code) = COUNTRIES.iter().find(|(c, _)| *c == country)?;
        self.lookup(ISO_NAMESPACE, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_codes_are_sorted_and_unique() {
        assert!(CURRENCIES.windows(2).all(|pair| pair[0].code < pair[1].code));
        assert_eq!(PlatformCurrencies.all().count(), 178);
    }

    #[rstest]
    #[case("RUB", 643, Some(2))]
    #[case("XPF", 953, Some(0))]
    #[case("LKR", 144, Some(2))]
    #[case("KZT", 398, Some(2))]
    #[case("GEL", 981, Some(2))]
    #[case("BTN", 64, Some(2))]
    #[case("XAF", 950, Some(0))]
    #[case("IQD", 368, Some(3))]
    #[case("CLF", 990, Some(4))]
    #[case("UYI", 940, Some(0))]
    #[case("XDR", 960, None)]
    #[case("ZWG", 924, Some(2))]
    fn test_active_codes_are_known(
        #[case] code: &str,
        #[case] numeric: u16,
        #[case] fraction_digits: Option<u32>,
    ) {
        let currency = PlatformCurrencies.lookup(ISO_NAMESPACE, code).unwrap();
        assert_eq!(currency.numeric, numeric);
        assert_eq!(currency.fraction_digits, fraction_digits);
    }

    #[rstest]
    #[case("DEM")]
    #[case("HRK")]
    #[case("SLL")]
    #[case("ZWL")]
    fn test_withdrawn_codes_are_unknown(#[case] code: &str) {
        assert!(PlatformCurrencies.lookup(ISO_NAMESPACE, code).is_none());
    }

    #[test]
    fn test_every_country_maps_to_a_known_currency() {
        for (country, code) in COUNTRIES {
            assert!(
                PlatformCurrencies.lookup(ISO_NAMESPACE, code).is_some(),
                "{country} maps to unknown currency {code}"
            );
        }
    }

    #[test]
    fn test_lookup() {
        let bhd = PlatformCurrencies.lookup(ISO_NAMESPACE, "BHD").unwrap();
        assert_eq!(bhd.numeric, 48);
        assert_eq!(bhd.fraction_digits, Some(3));
        assert!(PlatformCurrencies.lookup(ISO_NAMESPACE, "chf").is_none());
        assert!(PlatformCurrencies.lookup("CRYPTO", "CHF").is_none());
    }

    #[test]
    fn test_for_locale() {
        let chf = PlatformCurrencies.for_locale(&Locale::new("de", "CH")).unwrap();
        assert_eq!(chf.code, "CHF");
        assert_eq!(PlatformCurrencies.for_locale(&Locale::new("ru", "RU")).unwrap().code, "RUB");
        assert_eq!(PlatformCurrencies.for_locale(&Locale::new("fr", "CM")).unwrap().code, "XAF");
        assert!(PlatformCurrencies.for_locale(&Locale::language("de")).is_none());
        assert!(PlatformCurrencies.for_locale(&Locale::new("xx", "ZZ")).is_none());
    }

    #[test]
    fn test_to_unit() {
        let unit = PlatformCurrencies.lookup(ISO_NAMESPACE, "JPY").unwrap().to_unit();
        assert_eq!(unit, CurrencyUnit::iso("JPY"));
        assert_eq!(unit.numeric_code(), Some(392));
        assert_eq!(unit.default_fraction_digits(), Some(0));

        let gold = PlatformCurrencies.lookup(ISO_NAMESPACE, "XAU").unwrap().to_unit();
        assert_eq!(gold.default_fraction_digits(), None);
    }
}
