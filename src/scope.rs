//! Discovery scope
//!
//! A [`Scope`] is the set of places the registry looks for capability
//! factories. It is injected into the registry rather than derived from
//! the registry's own location, so tests can swap in counting or failing
//! scopes.
//!
//! # Invariants
//!
//! - `enumerate` yields factories in a deterministic order; that order
//!   is the scan order the collision policy is defined against
//! - Enumeration never builds a capability instance

use crate::capability::Factory;
use crate::error::RegistryError;
use std::sync::Arc;

/// A source of capability factories
///
/// One `enumerate` call corresponds to one discovery pass. Failures are
/// [`RegistryError::Scope`] and leave the registry unloaded.
pub trait Scope<C: ?Sized>: Send + Sync {
    /// Enumerate every factory reachable from this scope, in scan order
    fn enumerate(&self) -> Result<Vec<Arc<dyn Factory<C>>>, RegistryError>;
}

/// Scope over an explicit, ordered factory list
///
/// The preferred scope for a statically-linked system: the application's
/// top-level wiring lists its implementations and scope resolution is
/// pushed to compile time. Insertion order is the scan order.
///
/// # Example
///
/// ```ignore
/// let scope = StaticScope::new()
///     .with(NormalFactory)
///     .with(LogNormalFactory);
/// let registry = Registry::new(scope);
/// ```
pub struct StaticScope<C: ?Sized> {
    factories: Vec<Arc<dyn Factory<C>>>,
}

impl<C: ?Sized> StaticScope<C> {
    /// Create an empty scope
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Add a factory, returning the updated scope (builder style)
    pub fn with(mut self, factory: impl Factory<C> + 'static) -> Self {
        self.factories.push(Arc::new(factory));
        self
    }

    /// Add an already-shared factory
    pub fn push(&mut self, factory: Arc<dyn Factory<C>>) {
        self.factories.push(factory);
    }

    /// Number of factories in the scope
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether the scope holds no factories
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<C: ?Sized> Default for StaticScope<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> Scope<C> for StaticScope<C> {
    fn enumerate(&self) -> Result<Vec<Arc<dyn Factory<C>>>, RegistryError> {
        Ok(self.factories.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::capability::{Capability, FnFactory};
    use crate::params::Params;

    struct Named(&'static str);

    impl Capability for Named {
        fn key(&self) -> &'static str {
            self.0
        }
    }

    fn factory(key: &'static str) -> FnFactory<dyn Capability> {
        FnFactory::new(key, move |_params: &Params| Ok(Box::new(Named(key)) as _))
    }

    #[test]
    fn empty_scope_enumerates_nothing() {
        let scope: StaticScope<dyn Capability> = StaticScope::new();
        assert!(scope.is_empty());
        assert!(scope.enumerate().unwrap().is_empty());
    }

    #[test]
    fn enumeration_preserves_insertion_order() {
        let scope = StaticScope::new()
            .with(factory("normal"))
            .with(factory("lognormal"))
            .with(factory("exponential"));

        let keys: Vec<&str> = scope
            .enumerate()
            .unwrap()
            .iter()
            .map(|f| f.key())
            .collect();
        assert_eq!(keys, ["normal", "lognormal", "exponential"]);
        assert_eq!(scope.len(), 3);
    }

    #[test]
    fn repeated_enumeration_is_stable() {
        let mut scope: StaticScope<dyn Capability> = StaticScope::default();
        scope.push(Arc::new(factory("a")));
        scope.push(Arc::new(factory("b")));

        let first: Vec<&str> = scope.enumerate().unwrap().iter().map(|f| f.key()).collect();
        let second: Vec<&str> = scope.enumerate().unwrap().iter().map(|f| f.key()).collect();
        assert_eq!(first, second);
    }
}
