//! Capability registry
//!
//! Maps identifying keys to factories for O(1) lookup at creation time.
//! The mapping is populated exactly once per registry, lazily, by
//! enumerating the injected [`Scope`] on first use.
//!
//! # Invariants
//!
//! - Discovery runs at most once per registry lifetime (absent `reset`)
//! - The load state moves one way, Unloaded → Loaded; a scope failure
//!   leaves the registry Unloaded and the error is surfaced again on the
//!   next attempt
//! - On key collision the factory later in scan order wins; this is
//!   deterministic because scopes enumerate in a defined order
//! - The registry holds factories only, never instances; every `create`
//!   call builds a fresh instance owned by the caller

use crate::capability::Factory;
use crate::error::RegistryError;
use crate::params::Params;
use crate::scope::Scope;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Registry for capability factories
///
/// Thread-safe: concurrent first calls race on a write lock and exactly
/// one of them performs discovery; the rest observe the published
/// mapping. After loading, all operations take a short read lock.
///
/// # Example
///
/// ```
/// use kyky::{Capability, FnFactory, Params, Registry, StaticScope};
///
/// struct Echo;
/// impl Capability for Echo {
///     fn key(&self) -> &'static str { "echo" }
/// }
///
/// let scope = StaticScope::new()
///     .with(FnFactory::new("echo", |_p: &Params| Ok(Box::new(Echo) as Box<dyn Capability>)));
/// let registry: Registry<dyn Capability> = Registry::new(scope);
///
/// let instance = registry.create("echo", &Params::new()).unwrap();
/// assert_eq!(instance.key(), "echo");
/// ```
pub struct Registry<C: ?Sized> {
    scope: Box<dyn Scope<C>>,
    /// `None` = Unloaded, `Some` = Loaded; published under the write lock
    factories: RwLock<Option<HashMap<String, Arc<dyn Factory<C>>>>>,
}

impl<C: ?Sized> Registry<C> {
    /// Create an unloaded registry over the given scope
    ///
    /// No discovery happens here; the first `create` (or an explicit
    /// `ensure_loaded`) triggers it.
    pub fn new(scope: impl Scope<C> + 'static) -> Self {
        Self {
            scope: Box::new(scope),
            factories: RwLock::new(None),
        }
    }

    /// Run discovery if it has not run yet
    ///
    /// Idempotent: the first successful call enumerates the scope and
    /// publishes the key→factory mapping; every later call is a no-op.
    /// A scope failure propagates and leaves the registry unloaded.
    pub fn ensure_loaded(&self) -> Result<(), RegistryError> {
        if self.factories.read().is_some() {
            return Ok(());
        }

        let mut guard = self.factories.write();
        // Re-check: another caller may have loaded while we waited
        if guard.is_some() {
            return Ok(());
        }

        let discovered = self.scope.enumerate()?;
        let mut map: HashMap<String, Arc<dyn Factory<C>>> =
            HashMap::with_capacity(discovered.len());
        for factory in discovered {
            let key = factory.key();
            if map.insert(key.to_string(), factory).is_some() {
                warn!(key, "duplicate identifying key, later factory wins");
            }
        }

        info!(count = map.len(), "capability discovery complete");
        *guard = Some(map);
        Ok(())
    }

    /// Whether discovery has completed
    pub fn is_loaded(&self) -> bool {
        self.factories.read().is_some()
    }

    /// Build a fresh instance of the capability registered under `key`
    ///
    /// The only entry point consumers need. Triggers discovery on first
    /// use, resolves the factory, and forwards `params` to it verbatim.
    /// Returns [`RegistryError::UnknownKey`] for an unregistered key;
    /// factory failures propagate unchanged.
    pub fn create(&self, key: &str, params: &Params) -> Result<Box<C>, RegistryError> {
        self.ensure_loaded()?;

        // Clone the factory out so the lock is not held while building
        let factory = {
            let guard = self.factories.read();
            let map = loaded(&guard)?;
            map.get(key).cloned().ok_or_else(|| {
                let mut known: Vec<String> = map.keys().cloned().collect();
                known.sort();
                RegistryError::UnknownKey {
                    key: key.to_string(),
                    known,
                }
            })?
        };

        debug!(key, "building capability instance");
        factory.build(params)
    }

    /// All registered keys, sorted
    pub fn keys(&self) -> Result<Vec<String>, RegistryError> {
        self.ensure_loaded()?;
        let guard = self.factories.read();
        let mut keys: Vec<String> = loaded(&guard)?.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    /// Check whether a factory is registered for `key`
    pub fn has(&self, key: &str) -> Result<bool, RegistryError> {
        self.ensure_loaded()?;
        let guard = self.factories.read();
        Ok(loaded(&guard)?.contains_key(key))
    }

    /// Number of registered keys
    pub fn count(&self) -> Result<usize, RegistryError> {
        self.ensure_loaded()?;
        let guard = self.factories.read();
        Ok(loaded(&guard)?.len())
    }

    /// Clear the mapping and return to the unloaded state
    ///
    /// Test-harness aid: the next access re-runs discovery. Production
    /// callers construct a fresh registry instead.
    pub fn reset(&self) {
        debug!("registry reset, next access re-runs discovery");
        *self.factories.write() = None;
    }
}

/// View the mapping, failing if a concurrent `reset` unloaded it
fn loaded<'a, C: ?Sized>(
    guard: &'a Option<HashMap<String, Arc<dyn Factory<C>>>>,
) -> Result<&'a HashMap<String, Arc<dyn Factory<C>>>, RegistryError> {
    guard
        .as_ref()
        .ok_or_else(|| RegistryError::Scope("registry was reset during access".to_string()))
}
