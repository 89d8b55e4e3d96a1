//! Library-wide error types.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Money and currency error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// No currency is known for the namespace and code.
    #[error("Unknown currency: {namespace}:{code}{}", fmt_timestamp(.timestamp))]
    UnknownCurrency {
        /// Namespace that was searched.
        namespace: String,
        /// Requested currency code.
        code: String,
        /// Point in time of the lookup, `None` for the present.
        timestamp: Option<DateTime<Utc>>,
    },

    /// Malformed or missing input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A value does not fit the requested numeric type.
    #[error("Arithmetic overflow: {0}")]
    ArithmeticOverflow(String),

    /// Two amounts of different currencies were combined.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch {
        /// Currency of the left-hand amount.
        expected: String,
        /// Currency of the right-hand amount.
        got: String,
    },
}

fn fmt_timestamp(timestamp: &Option<DateTime<Utc>>) -> String {
    timestamp.map_or_else(String::new, |ts| format!(" at {}", ts.to_rfc3339()))
}

impl MoneyError {
    /// Creates an `UnknownCurrency` error.
    pub fn unknown_currency(
        namespace: impl Into<String>,
        code: impl Into<String>,
        timestamp: Option<DateTime<Utc>>,
    ) -> Self {
        Self::UnknownCurrency {
            namespace: namespace.into(),
            code: code.into(),
            timestamp,
        }
    }

    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCurrency { .. } => "UNKNOWN_CURRENCY",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::ArithmeticOverflow(_) => "ARITHMETIC_OVERFLOW",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
        }
    }
}
