//! Core currency logic for Moneta.
//!
//! This crate contains pure currency logic with ZERO network or storage dependencies.
//!
//! # Modules
//!
//! - `provider` - Provider roles and the built-in ISO 4217 defaults
//! - `registry` - Resolve-once binding of provider roles
//! - `currencies` - Lookup and mapping facade over the registry
//! - `function` - Major/minor part, minimum/maximum, predicate combinators

pub mod currencies;
pub mod function;
pub mod provider;
pub mod registry;

pub use currencies::MonetaryCurrencies;
pub use provider::{CurrencyUnitMapper, CurrencyUnitProvider};
pub use registry::{Discovery, DiscoveryError, ProviderRegistry, ProviderRole, RegistrationTable};
