//! Resolve-once binding of provider roles to implementations.
//!
//! The registry asks a [`Discovery`] source for the candidates of a role the
//! first time the role is needed, keeps the first candidate (or a built-in
//! default when there is none), and returns that same instance from then on.
//! Discovery failures never reach the caller; they are logged and treated as
//! "nothing registered".

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::provider::{
    CurrencyUnitMapper, CurrencyUnitProvider, DefaultCurrencyUnitMapper,
    DefaultCurrencyUnitProvider,
};

/// A capability the registry binds to exactly one implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderRole {
    /// Currency unit lookup, see [`CurrencyUnitProvider`].
    CurrencyUnitProvider,
    /// Currency unit mapping, see [`CurrencyUnitMapper`].
    CurrencyUnitMapper,
}

impl fmt::Display for ProviderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrencyUnitProvider => write!(f, "CurrencyUnitProvider"),
            Self::CurrencyUnitMapper => write!(f, "CurrencyUnitMapper"),
        }
    }
}

/// Discovery of a role failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Discovery of {role} failed: {reason}")]
pub struct DiscoveryError {
    /// Role being discovered.
    pub role: ProviderRole,
    /// What went wrong.
    pub reason: String,
}

impl DiscoveryError {
    /// Creates a discovery error.
    pub fn new(role: ProviderRole, reason: impl Into<String>) -> Self {
        Self {
            role,
            reason: reason.into(),
        }
    }
}

/// Source of candidate implementations for each role.
///
/// Candidates are returned in discovery order; the registry keeps the first.
pub trait Discovery: Send + Sync {
    /// Candidates for [`ProviderRole::CurrencyUnitProvider`].
    fn currency_unit_providers(&self)
    -> Result<Vec<Arc<dyn CurrencyUnitProvider>>, DiscoveryError>;

    /// Candidates for [`ProviderRole::CurrencyUnitMapper`].
    fn currency_unit_mappers(&self) -> Result<Vec<Arc<dyn CurrencyUnitMapper>>, DiscoveryError>;
}

type Factory<T> = Box<dyn Fn() -> Result<Arc<T>, DiscoveryError> + Send + Sync>;

/// Explicit role-to-factory table filled in by the application at startup.
///
/// Factories run when the registry discovers their role, in registration
/// order, until one succeeds. Factories after it are never run. Discovery of
/// a role fails only if every registered factory fails.
#[derive(Default)]
pub struct RegistrationTable {
    providers: Vec<Factory<dyn CurrencyUnitProvider>>,
    mappers: Vec<Factory<dyn CurrencyUnitMapper>>,
}

impl RegistrationTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory for [`ProviderRole::CurrencyUnitProvider`].
    pub fn register_provider<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn() -> Result<Arc<dyn CurrencyUnitProvider>, DiscoveryError> + Send + Sync + 'static,
    {
        self.providers.push(Box::new(factory));
        self
    }

    /// Registers an already constructed provider.
    pub fn register_provider_instance(
        &mut self,
        provider: Arc<dyn CurrencyUnitProvider>,
    ) -> &mut Self {
        self.register_provider(move || Ok(Arc::clone(&provider)))
    }

    /// Registers a factory for [`ProviderRole::CurrencyUnitMapper`].
    pub fn register_mapper<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn() -> Result<Arc<dyn CurrencyUnitMapper>, DiscoveryError> + Send + Sync + 'static,
    {
        self.mappers.push(Box::new(factory));
        self
    }

    /// Registers an already constructed mapper.
    pub fn register_mapper_instance(&mut self, mapper: Arc<dyn CurrencyUnitMapper>) -> &mut Self {
        self.register_mapper(move || Ok(Arc::clone(&mapper)))
    }

    /// Number of factories registered for the role.
    pub fn len(&self, role: ProviderRole) -> usize {
        match role {
            ProviderRole::CurrencyUnitProvider => self.providers.len(),
            ProviderRole::CurrencyUnitMapper => self.mappers.len(),
        }
    }

    /// Returns true if nothing is registered for any role.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty() && self.mappers.is_empty()
    }
}

impl fmt::Debug for RegistrationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationTable")
            .field("providers", &self.providers.len())
            .field("mappers", &self.mappers.len())
            .finish()
    }
}

impl Discovery for RegistrationTable {
    fn currency_unit_providers(
        &self,
    ) -> Result<Vec<Arc<dyn CurrencyUnitProvider>>, DiscoveryError> {
        first_built(ProviderRole::CurrencyUnitProvider, &self.providers)
    }

    fn currency_unit_mappers(&self) -> Result<Vec<Arc<dyn CurrencyUnitMapper>>, DiscoveryError> {
        first_built(ProviderRole::CurrencyUnitMapper, &self.mappers)
    }
}

fn first_built<T: ?Sized>(
    role: ProviderRole,
    factories: &[Factory<T>],
) -> Result<Vec<Arc<T>>, DiscoveryError> {
    let mut failure = None;
    for (index, factory) in factories.iter().enumerate() {
        match factory() {
            Ok(candidate) => return Ok(vec![candidate]),
            Err(e) => {
                warn!(%role, index, error = %e, "Registered factory failed");
                if failure.is_none() {
                    failure = Some(e);
                }
            }
        }
    }
    failure.map_or_else(|| Ok(Vec::new()), Err)
}

/// Binds each provider role to one instance on first use.
///
/// Concurrent first calls for a role run discovery once and all observe the
/// same instance.
pub struct ProviderRegistry {
    discovery: Box<dyn Discovery>,
    provider: OnceCell<Arc<dyn CurrencyUnitProvider>>,
    mapper: OnceCell<Arc<dyn CurrencyUnitMapper>>,
}

impl ProviderRegistry {
    /// Creates a registry over the given discovery source.
    pub fn new(discovery: impl Discovery + 'static) -> Self {
        Self {
            discovery: Box::new(discovery),
            provider: OnceCell::new(),
            mapper: OnceCell::new(),
        }
    }

    /// Creates a registry that always falls back to the built-in defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(RegistrationTable::new())
    }

    /// The instance bound to [`ProviderRole::CurrencyUnitProvider`].
    pub fn currency_unit_provider(&self) -> Arc<dyn CurrencyUnitProvider> {
        let provider = self.provider.get_or_init(|| {
            select(
                ProviderRole::CurrencyUnitProvider,
                self.discovery.currency_unit_providers(),
                default_provider,
            )
        });
        Arc::clone(provider)
    }

    /// The instance bound to [`ProviderRole::CurrencyUnitMapper`].
    pub fn currency_unit_mapper(&self) -> Arc<dyn CurrencyUnitMapper> {
        let mapper = self.mapper.get_or_init(|| {
            select(
                ProviderRole::CurrencyUnitMapper,
                self.discovery.currency_unit_mappers(),
                default_mapper,
            )
        });
        Arc::clone(mapper)
    }

    /// Returns true once the role has been bound.
    pub fn is_resolved(&self, role: ProviderRole) -> bool {
        match role {
            ProviderRole::CurrencyUnitProvider => self.provider.get().is_some(),
            ProviderRole::CurrencyUnitMapper => self.mapper.get().is_some(),
        }
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("provider", &self.provider.get())
            .field("mapper", &self.mapper.get())
            .finish_non_exhaustive()
    }
}

fn select<T: ?Sized>(
    role: ProviderRole,
    discovered: Result<Vec<Arc<T>>, DiscoveryError>,
    fallback: fn() -> Arc<T>,
) -> Arc<T> {
    match discovered {
        Ok(candidates) => {
            let count = candidates.len();
            if let Some(first) = candidates.into_iter().next() {
                debug!(%role, candidates = count, "Bound registered implementation");
                return first;
            }
            info!(%role, "No implementation registered, using default");
        }
        Err(e) => {
            warn!(%role, error = %e, "Discovery failed, using default");
        }
    }
    fallback()
}

fn default_provider() -> Arc<dyn CurrencyUnitProvider> {
    Arc::new(DefaultCurrencyUnitProvider::new())
}

fn default_mapper() -> Arc<dyn CurrencyUnitMapper> {
    Arc::new(DefaultCurrencyUnitMapper)
}
