//! Shared value types, errors, and configuration for Moneta.
//!
//! This crate provides the types used across all other crates:
//! - Currency units identified by namespace and code
//! - Monetary amounts with decimal precision
//! - Locales for locale-based currency lookup
//! - Library-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::MonetaConfig;
pub use error::{MoneyError, MoneyResult};
pub use types::{CurrencyUnit, ISO_NAMESPACE, Locale, MonetaryAmount};
