//! Value types used across the workspace.

pub mod currency;
pub mod locale;
pub mod money;

pub use currency::{CurrencyUnit, ISO_NAMESPACE};
pub use locale::Locale;
pub use money::MonetaryAmount;
