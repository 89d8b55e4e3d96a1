//! Concurrent first-time resolution of provider roles.
//!
//! These tests verify that:
//! - Racing first callers run discovery once
//! - Every caller observes the same instance
//! - Values resolved through the facade are shareable across threads

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use moneta_core::provider::DefaultCurrencyUnitProvider;
use moneta_core::{CurrencyUnitProvider, MonetaryCurrencies, ProviderRegistry, RegistrationTable};
use moneta_shared::ISO_NAMESPACE;

const THREADS: usize = 16;

#[test]
fn test_concurrent_resolution_runs_discovery_once() {
    let constructed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&constructed);

    let mut table = RegistrationTable::new();
    table.register_provider(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        // Widen the race window.
        thread::yield_now();
        Ok(Arc::new(DefaultCurrencyUnitProvider::new()) as Arc<dyn CurrencyUnitProvider>)
    });
    let registry = Arc::new(ProviderRegistry::new(table));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.currency_unit_provider()
            })
        })
        .collect();

    let resolved: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("resolver thread panicked"))
        .collect();

    assert_eq!(constructed.load(Ordering::SeqCst), 1);
    let first = &resolved[0];
    assert!(resolved.iter().all(|provider| Arc::ptr_eq(provider, first)));
    assert!(Arc::ptr_eq(first, &registry.currency_unit_provider()));
}

#[test]
fn test_concurrent_default_mapper_resolution() {
    let registry = Arc::new(ProviderRegistry::with_defaults());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.currency_unit_mapper()
            })
        })
        .collect();

    let resolved: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("resolver thread panicked"))
        .collect();

    let first = &resolved[0];
    assert!(resolved.iter().all(|mapper| Arc::ptr_eq(mapper, first)));
}

#[test]
fn test_shared_facade_lookups() {
    let currencies = Arc::new(MonetaryCurrencies::default());

    let handles: Vec<_> = ["CHF", "EUR", "JPY", "USD"]
        .into_iter()
        .map(|code| {
            let currencies = Arc::clone(&currencies);
            thread::spawn(move || currencies.get(ISO_NAMESPACE, code))
        })
        .collect();

    for handle in handles {
        let unit = handle
            .join()
            .expect("lookup thread panicked")
            .expect("currency should resolve");
        assert_eq!(unit.namespace(), ISO_NAMESPACE);
    }
}
