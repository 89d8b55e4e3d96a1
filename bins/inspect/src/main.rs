//! Moneta currency inspector
//!
//! Looks up currencies through the provider registry.
//!
//! Usage:
//! - `moneta` lists the currencies of the default namespace
//! - `moneta <CODE> [NAMESPACE]` shows one currency
//! - `moneta --locale <LOCALE>` shows the currencies of a locale

use anyhow::{Context, bail};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moneta_core::{MonetaryCurrencies, ProviderRegistry, RegistrationTable};
use moneta_shared::{CurrencyUnit, Locale, MonetaConfig};

#[derive(Parser)]
#[command(name = "moneta")]
#[command(about = "Look up currencies by code, namespace, or locale")]
struct Cli {
    /// Currency code, e.g. CHF; lists the default namespace when omitted
    #[arg(conflicts_with = "locale")]
    code: Option<String>,

    /// Namespace of the code; the default namespace when omitted
    #[arg(requires = "code")]
    namespace: Option<String>,

    /// Show the currencies of a locale such as de-CH
    #[arg(long)]
    locale: Option<Locale>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout is reserved for lookup results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moneta=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = MonetaConfig::load().context("Failed to load configuration")?;
    let currencies = bootstrap(&config);
    info!(
        namespace = %currencies.default_namespace(),
        "Currency providers ready"
    );

    match (cli.locale, cli.code, cli.namespace) {
        (Some(locale), _, _) => {
            let units = currencies.get_all_for_locale(&locale);
            if units.is_empty() {
                bail!("No currency known for locale {locale}");
            }
            units.iter().for_each(print_unit);
        }
        (None, Some(code), Some(namespace)) => print_unit(&currencies.get(&namespace, &code)?),
        (None, Some(code), None) => print_unit(&currencies.get_by_code(&code)?),
        (None, None, _) => list(&currencies)?,
    }

    Ok(())
}

/// Builds the currency context from the registration table.
///
/// The binary registers no providers of its own, so every role is bound to
/// its built-in default.
fn bootstrap(config: &MonetaConfig) -> MonetaryCurrencies {
    let table = RegistrationTable::new();
    debug!(?table, "Registration table populated");
    MonetaryCurrencies::with_config(ProviderRegistry::new(table), config)
}

fn list(currencies: &MonetaryCurrencies) -> anyhow::Result<()> {
    let namespace = currencies.default_namespace();
    let units = currencies
        .get_all(&namespace)
        .with_context(|| format!("Cannot list namespace {namespace}"))?;
    info!(count = units.len(), %namespace, "Listing currencies");
    units.iter().for_each(print_unit);
    Ok(())
}

fn print_unit(unit: &CurrencyUnit) {
    let numeric = unit
        .numeric_code()
        .map_or_else(|| "-".to_string(), |n| format!("{n:03}"));
    let digits = unit
        .default_fraction_digits()
        .map_or_else(|| "-".to_string(), |d| d.to_string());
    println!("{}\t{}\t{numeric}\t{digits}", unit.namespace(), unit.code());
}
