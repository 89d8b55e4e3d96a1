//! Library configuration management.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonetaConfig {
    /// Currency lookup configuration.
    #[serde(default)]
    pub currency: CurrencyConfig,
}

/// Currency lookup configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrencyConfig {
    /// Overrides the namespace reported as default, `ISO-4217` when unset.
    #[serde(default)]
    pub default_namespace: Option<String>,
}

impl MonetaConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MONETA").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// The configured default namespace, ignoring blank values.
    pub fn default_namespace(&self) -> Option<&str> {
        self.currency
            .default_namespace
            .as_deref()
            .map(str::trim)
            .filter(|ns| !ns.is_empty())
    }
}
